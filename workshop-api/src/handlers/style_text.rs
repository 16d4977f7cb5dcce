use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

use crate::services::build_style_prompt;
use crate::startup::AppState;

const MISSING_FIELDS: &str = "Please provide both text and style";

#[derive(Debug, Deserialize, Validate)]
pub struct StyleTextRequest {
    #[validate(required, length(min = 1))]
    pub text: Option<String>,
    #[validate(required, length(min = 1))]
    pub style: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleTextResponse {
    pub original_text: String,
    pub style: String,
    pub styled_text: String,
}

/// Rewrite `text` in the requested `style` with one provider call.
#[tracing::instrument(skip(state, payload))]
pub async fn style_text(
    State(state): State<AppState>,
    payload: Result<Json<StyleTextRequest>, JsonRejection>,
) -> Result<Json<StyleTextResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) if request.validate().is_ok() => request,
        _ => return Err(AppError::BadRequest(MISSING_FIELDS.to_string())),
    };
    let (Some(text), Some(style)) = (request.text, request.style) else {
        return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
    };

    if !state.config.gemini.is_configured() {
        tracing::error!("GEMINI_API_KEY is not set; refusing style-text request");
        return Err(AppError::ConfigError(
            "Gemini API key not configured".to_string(),
        ));
    }

    let prompt = build_style_prompt(&text, &style);

    let response = state
        .text_provider
        .generate(&prompt)
        .await
        .map_err(|e| {
            tracing::error!(
                model = %state.text_provider.model(),
                style = %style,
                text_len = text.len(),
                error = %e,
                "Error calling Gemini API"
            );

            let message = e.to_string();
            AppError::Upstream {
                error: "Failed to style text".to_string(),
                details: if message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    message
                },
            }
        })?;

    tracing::info!(
        style = %style,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = ?response.finish_reason,
        "Text styled"
    );

    Ok(Json(StyleTextResponse {
        original_text: text,
        style,
        styled_text: response.text.trim().to_string(),
    }))
}
