//! Wire types returned by the workshop API.

use serde::Deserialize;
use serde_json::Number;

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddTenResponse {
    pub original: Number,
    pub result: Number,
    pub operation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTextResponse {
    pub original_text: String,
    pub style: String,
    pub styled_text: String,
}

/// Body of every non-2xx answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
