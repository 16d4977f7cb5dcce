use crate::config::ClientConfig;
use crate::models::{AddTenResponse, ErrorBody, HealthResponse, StyleTextResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a readable JSON body.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The API answered with an error status and a JSON error body.
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<String>,
    },
}

/// Thin HTTP client for the three workshop endpoints.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to send GET request to {}: {}", url, e);
            ClientError::Network(e.to_string())
        })?;

        read_json(response).await
    }

    /// `number` is sent as `null` when absent so the server decides what is valid.
    pub async fn add_ten(&self, number: Option<i64>) -> Result<AddTenResponse, ClientError> {
        self.post("/api/add-ten", json!({ "number": number })).await
    }

    pub async fn style_text(
        &self,
        text: &str,
        style: &str,
    ) -> Result<StyleTextResponse, ClientError> {
        self.post("/api/style-text", json!({ "text": text, "style": style }))
            .await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                ClientError::Network(e.to_string())
            })?;

        read_json(response).await
    }
}

/// Decode the body as JSON whatever the status; a non-2xx status with an
/// `error` field becomes [`ClientError::Api`].
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body: serde_json::Value = response.json().await.map_err(|e| {
        tracing::warn!(status = %status, "Response body is not JSON: {}", e);
        ClientError::Network(e.to_string())
    })?;

    if !status.is_success() {
        if let Ok(error) = serde_json::from_value::<ErrorBody>(body.clone()) {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error.error,
                details: error.details,
            });
        }
    }

    serde_json::from_value(body).map_err(|e| {
        tracing::warn!(status = %status, "Unexpected response shape: {}", e);
        ClientError::Network(format!("unexpected response body: {}", e))
    })
}
