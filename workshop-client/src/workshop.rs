//! The workshop panel: three controls, their busy flags and the text each
//! one displays.

use crate::config::ClientConfig;
use crate::loading::{Action, LoadingState};
use crate::services::{ApiClient, ClientError};
use chrono::{DateTime, Local};

pub const HEALTH_FALLBACK: &str = "Error: Could not connect to backend";
pub const REQUEST_FALLBACK: &str = "Error: Could not process request";

pub struct Workshop {
    api: ApiClient,
    loading: LoadingState,
}

impl Workshop {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
            loading: LoadingState::new(),
        }
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    /// Whether the control for `action` accepts a press.
    pub fn is_enabled(&self, action: Action) -> bool {
        !self.loading.is_busy(action)
    }

    pub fn can_add(&self, number_input: &str) -> bool {
        self.is_enabled(Action::Add) && !number_input.is_empty()
    }

    pub fn can_style(&self, text: &str, style: &str) -> bool {
        self.is_enabled(Action::Style) && !text.is_empty() && !style.is_empty()
    }

    /// Press "Check Health". `None` means the control was disabled and no request went out.
    pub async fn check_health(&self) -> Option<String> {
        let _busy = self.loading.begin(Action::Health)?;

        let line = match self.api.health().await {
            Ok(health) => format!(
                "Status: {}, Time: {}",
                health.status,
                local_time(&health.timestamp)
            ),
            Err(e) => render_error(e, HEALTH_FALLBACK),
        };
        Some(line)
    }

    /// Press "Add 10" with the raw text of the number field.
    pub async fn add_ten(&self, number_input: &str) -> Option<String> {
        if number_input.is_empty() {
            return None;
        }
        let _busy = self.loading.begin(Action::Add)?;

        let line = match self.api.add_ten(parse_leading_int(number_input)).await {
            Ok(added) => format!("Result: {}", added.result),
            Err(e) => render_error(e, REQUEST_FALLBACK),
        };
        Some(line)
    }

    /// Press "Transform Text".
    pub async fn style_text(&self, text: &str, style: &str) -> Option<String> {
        if text.is_empty() || style.is_empty() {
            return None;
        }
        let _busy = self.loading.begin(Action::Style)?;

        let line = match self.api.style_text(text, style).await {
            Ok(styled) => styled.styled_text,
            Err(e) => render_error(e, REQUEST_FALLBACK),
        };
        Some(line)
    }
}

/// Server-reported errors are shown as sent; transport failures get the
/// fixed local `fallback` and the server payload, if any, is dropped.
fn render_error(error: ClientError, fallback: &str) -> String {
    match error {
        ClientError::Api { message, .. } => format!("Error: {}", message),
        ClientError::Network(cause) => {
            tracing::debug!(%cause, "Request failed before a body could be read");
            fallback.to_string()
        }
    }
}

/// Render an RFC 3339 timestamp in local time, `M/D/YYYY, h:mm:ss AM`.
pub fn local_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

/// Lenient integer parse: optional sign, then leading digits; the rest is ignored.
/// `"12abc"` → 12, `"3.7"` → 3, `"abc"` → `None`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    format!("{}{}", sign, &rest[..digits_len]).parse().ok()
}
