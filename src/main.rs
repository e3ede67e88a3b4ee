// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use concept_explorer::app_config::{Config, LogLevel};
use concept_explorer::providers::concept_insights::ConceptInsights;
use concept_explorer::service::ConceptService;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the corpus by concept/document label
    LabelSearch {
        /// Label text to search for
        query: String,
    },

    /// Find documents related to the given concept ids, with passages
    Search {
        /// Concept ids to search by
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Extract concept mentions from free text
    Annotate {
        /// Text to annotate
        text: String,
    },
}

/// Concept Explorer
///
/// A command-line proxy for a concept-analytics service: label search,
/// conceptual search with passage enrichment, and concept-mention extraction.
#[derive(Parser, Debug)]
#[command(name = "concept-explorer")]
#[command(version = "1.0.0")]
#[command(about = "Concept search proxy with passage enrichment")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => writeln!(stderr, "\x1B[1;31m{} ERROR {}\x1B[0m", now, record.args()),
                Level::Warn => writeln!(stderr, "\x1B[1;33m{} WARN  {}\x1B[0m", now, record.args()),
                Level::Info => writeln!(stderr, "{} INFO  {}", now, record.args()),
                Level::Debug => writeln!(stderr, "\x1B[2m{} DEBUG {}\x1B[0m", now, record.args()),
                Level::Trace => writeln!(stderr, "\x1B[2m{} TRACE {}\x1B[0m", now, record.args()),
            };
        }
    }

    fn flush(&self) {}
}

/// Load the configuration file if present, otherwise start from defaults,
/// then apply environment overrides
fn load_config(config_path: &str) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };
    config.apply_env_overrides();
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    let mut config = load_config(&options.config_path)?;
    if let Some(level) = options.log_level {
        config.log_level = LogLevel::from(level);
    }

    CustomLogger::init(config.log_level.to_level_filter())
        .context("Failed to initialize logger")?;

    config.validate()?;

    let provider = Arc::new(ConceptInsights::new(
        config.provider.username.clone(),
        config.provider.password.clone(),
        config.provider.endpoint.clone(),
    ));
    let service = ConceptService::new(provider, config);

    // Corpus resolution failure at startup is fatal, matching the upstream
    // service behavior
    if let Err(e) = service.initialize().await {
        error!("Failed to resolve corpus id: {}", e);
        error!("Terminating.");
        std::process::exit(1);
    }

    let result = match options.command {
        Commands::LabelSearch { query } => {
            info!("Label search: {}", query);
            service.label_search(&query).await?
        }
        Commands::Search { ids } => {
            info!("Conceptual search for {} concept(s)", ids.len());
            serde_json::to_value(service.conceptual_search(ids).await?)?
        }
        Commands::Annotate { text } => {
            info!("Annotating {} characters of text", text.chars().count());
            service.extract_concept_mentions(&text).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
