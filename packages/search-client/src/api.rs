//! HTTP access to the directory API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::types::{ServiceProvider, ServiceQuery};

/// Default API origin for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Source of directory search results.
#[async_trait]
pub trait ServicesApi: Send + Sync {
    async fn fetch_services(&self, query: &ServiceQuery) -> Result<Vec<ServiceProvider>>;
}

#[derive(Deserialize)]
struct ConnectionTestResponse {
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed directory client.
#[derive(Clone)]
pub struct HttpServicesApi {
    http_client: Client,
    base_url: String,
}

impl HttpServicesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `GET /api/test` and return the backend's message.
    pub async fn test_connection(&self) -> Result<String> {
        let response = self
            .http_client
            .get(format!("{}/api/test", self.base_url))
            .send()
            .await?;

        let body: ConnectionTestResponse = Self::decode(response).await?;
        Ok(body.message)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            warn!(status = %status, error = %message, "Directory API error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| ClientError::Parse(format!("Failed to deserialize response: {}", e)))
    }
}

#[async_trait]
impl ServicesApi for HttpServicesApi {
    async fn fetch_services(&self, query: &ServiceQuery) -> Result<Vec<ServiceProvider>> {
        debug!(search = %query.search, category = %query.category, "Fetching services");

        let response = self
            .http_client
            .get(format!("{}/api/services", self.base_url))
            .query(&query.query_pairs())
            .send()
            .await?;

        Self::decode(response).await
    }
}
