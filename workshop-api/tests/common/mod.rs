#![allow(dead_code)]

use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use workshop_api::config::{ApiConfig, GeminiSettings};
use workshop_api::services::providers::mock::MockTextProvider;
use workshop_api::services::TextProvider;
use workshop_api::startup::{build_router, AppState, Application};

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockTextProvider>,
    pub client: reqwest::Client,
}

pub fn test_config(with_api_key: bool) -> ApiConfig {
    ApiConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        gemini: GeminiSettings {
            api_key: with_api_key.then(|| Secret::new("test-api-key".to_string())),
            ..GeminiSettings::default()
        },
        otlp_endpoint: None,
    }
}

/// Router over a mock provider, for `oneshot` tests.
pub fn test_router(provider: Arc<MockTextProvider>, with_api_key: bool) -> axum::Router {
    build_router(AppState {
        config: test_config(with_api_key),
        text_provider: provider as Arc<dyn TextProvider>,
    })
}

impl TestApp {
    pub async fn spawn(provider: MockTextProvider) -> Self {
        Self::spawn_with(provider, true).await
    }

    pub async fn spawn_without_api_key(provider: MockTextProvider) -> Self {
        Self::spawn_with(provider, false).await
    }

    async fn spawn_with(provider: MockTextProvider, with_api_key: bool) -> Self {
        let provider = Arc::new(provider);

        let app = Application::build_with_provider(
            test_config(with_api_key),
            provider.clone() as Arc<dyn TextProvider>,
        )
        .await
        .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            provider,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
