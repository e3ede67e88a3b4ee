/*!
 * REST client for the Concept Insights v2 API.
 *
 * Resource ids (corpora, graphs, documents) are absolute paths such as
 * `/corpora/{account}/{corpus}` and are appended to the versioned API root as
 * is, mirroring how the service addresses its resources.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::document::{FullDocument, SearchResponse};
use crate::errors::ProviderError;
use crate::providers::{ConceptProvider, ConceptualSearchParams, LabelSearchParams};

/// Default public API endpoint
const DEFAULT_ENDPOINT: &str = "https://gateway.watsonplatform.net/concept-insights/api";

/// Concept Insights client
#[derive(Debug, Clone)]
pub struct ConceptInsights {
    /// HTTP client for API requests
    client: Client,
    /// Service username for basic auth
    username: String,
    /// Service password for basic auth
    password: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

/// One account entry in the accounts response
#[derive(Debug, Deserialize)]
struct AccountInfo {
    /// Account identifier
    account_id: String,
}

/// Response of the accounts endpoint
#[derive(Debug, Deserialize)]
struct AccountsResponse {
    /// Accounts the credentials belong to
    accounts: Vec<AccountInfo>,
}

impl ConceptInsights {
    /// Create a new client
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            username: username.into(),
            password: password.into(),
            endpoint: if endpoint.is_empty() {
                DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
        }
    }

    /// Build the full URL for a v2 resource path
    fn url(&self, resource: &str) -> String {
        format!("{}/v2{}", self.endpoint.trim_end_matches('/'), resource)
    }

    /// Send a GET request with basic auth and decode the JSON response
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(self.url(resource))
            .basic_auth(&self.username, Some(&self.password))
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        read_json(response, resource).await
    }
}

#[async_trait]
impl ConceptProvider for ConceptInsights {
    async fn account_id(&self) -> Result<String, ProviderError> {
        let accounts: AccountsResponse = self.get_json("/accounts", &[]).await?;
        accounts
            .accounts
            .into_iter()
            .next()
            .map(|account| account.account_id)
            .ok_or_else(|| ProviderError::ParseError("no accounts in response".to_string()))
    }

    async fn search_by_label(&self, params: &LabelSearchParams) -> Result<Value, ProviderError> {
        let query = [
            ("query", params.query.clone()),
            ("prefix", params.prefix.to_string()),
            ("limit", params.limit.to_string()),
            ("concepts", params.concepts.to_string()),
        ];
        self.get_json(&format!("{}/label_search", params.corpus), &query)
            .await
    }

    async fn related_documents(
        &self,
        params: &ConceptualSearchParams,
    ) -> Result<SearchResponse, ProviderError> {
        // The API expects the concept ids as a JSON array in a single query
        // parameter
        let ids = serde_json::to_string(&params.ids)
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        let query = [("ids", ids), ("limit", params.limit.to_string())];
        self.get_json(&format!("{}/conceptual_search", params.corpus), &query)
            .await
    }

    async fn fetch_document(&self, document_id: &str) -> Result<FullDocument, ProviderError> {
        self.get_json(document_id, &[]).await
    }

    async fn annotate_text(&self, graph: &str, text: &str) -> Result<Value, ProviderError> {
        let resource = format!("{}/annotate_text", graph);
        let response = self
            .client
            .post(self.url(&resource))
            .basic_auth(&self.username, Some(&self.password))
            .header("Content-Type", "text/plain")
            .body(text.to_string())
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        read_json(response, &resource).await
    }
}

/// Check the response status and decode the JSON body
async fn read_json<T: DeserializeOwned>(
    response: Response,
    resource: &str,
) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error response text".to_string());
        error!("Concept Insights API error on {} ({}): {}", resource, status, message);
        return Err(ProviderError::ApiError {
            status_code: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::ParseError(format!("{}: {}", resource, e)))
}
