/*!
 * Passage cropping.
 *
 * Given a document's content parts and a matched text span, this module derives
 * a short human-readable snippet: up to 100 characters of context on each side
 * of the match, trimmed to whole words where the window cut into the text, with
 * the match wrapped in emphasis markup.
 *
 * Cropping is pure and never fails: out-of-range offsets are clamped to the
 * referenced text, and a missing or non-text part crops as empty text.
 */

use crate::document::DocumentPart;

/// Number of context characters kept on each side of a match
pub const CONTEXT_CHARS: usize = 100;

/// Crop a word-bounded passage around the `[start, end)` character span of
/// `parts[parts_index]`.
///
/// The span is interpreted in characters, not bytes, so provider offsets into
/// non-ASCII text resolve correctly. An empty span yields an empty anchor,
/// which is valid and still produces emphasis markup.
pub fn crop(parts: &[DocumentPart], parts_index: usize, start: i64, end: i64) -> String {
    let text = parts
        .get(parts_index)
        .and_then(|part| part.data.as_str())
        .unwrap_or("");
    let total = text.chars().count();

    let start = start.clamp(0, total as i64) as usize;
    let end = end.clamp(start as i64, total as i64) as usize;

    let left = start.saturating_sub(CONTEXT_CHARS);
    let right = (end + CONTEXT_CHARS).min(total);

    let anchor = slice_chars(text, start, end);
    let mut prefix = slice_chars(text, left, start);
    let mut suffix = slice_chars(text, end, right);

    // When the window cut into the text on the left, the leading word may be
    // partial: drop through the first space, unless that space is the last
    // character of the prefix
    if left > 0 {
        if let Some(first_space) = prefix.find(' ') {
            if first_space + 1 < prefix.len() {
                prefix = &prefix[first_space + 1..];
            }
        }
    }

    // Same on the right: drop the possibly partial trailing word
    if right < total {
        if let Some(last_space) = suffix.rfind(' ') {
            suffix = &suffix[..last_space];
        }
    }

    format!("...{}<b>{}</b>{}...", prefix, anchor, suffix)
}

/// Slice `text` by character positions `[from, to)`
fn slice_chars(text: &str, from: usize, to: usize) -> &str {
    let start = byte_offset(text, from);
    let end = byte_offset(text, to);
    &text[start..end]
}

/// Byte offset of the character at position `char_index`, or the text length
/// when the position is past the end
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}
