#![allow(dead_code)]

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use workshop_client::ClientConfig;

/// Fake workshop API with the real endpoint shapes.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub add_ten_bodies: Arc<Mutex<Vec<Value>>>,
    /// When set, style-text waits for a notification before answering.
    pub style_gate: Option<Arc<Notify>>,
    pub style_failure: bool,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": "2024-05-01T10:00:00.000Z",
        "message": "Backend is running successfully!"
    }))
}

async fn add_ten(State(fake): State<FakeBackend>, Json(body): Json<Value>) -> impl IntoResponse {
    fake.add_ten_bodies.lock().unwrap().push(body.clone());
    match body["number"].as_i64() {
        Some(n) => (
            StatusCode::OK,
            Json(json!({ "original": n, "result": n + 10, "operation": "added 10" })),
        ),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Please provide a valid number" })),
        ),
    }
}

async fn style_text(State(fake): State<FakeBackend>, Json(body): Json<Value>) -> impl IntoResponse {
    if let Some(gate) = &fake.style_gate {
        gate.notified().await;
    }
    if fake.style_failure {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to style text",
                "details": "API error: quota exceeded",
                "timestamp": "2024-05-01T10:00:00.000Z"
            })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "originalText": body["text"],
            "style": body["style"],
            "styledText": "Arrr, hello friends!"
        })),
    )
}

impl FakeBackend {
    /// Serve on a random port and return a client config pointing at it.
    pub async fn spawn(self) -> ClientConfig {
        let app = Router::new()
            .route("/api/health", get(health))
            .route("/api/add-ten", post(add_ten))
            .route("/api/style-text", post(style_text))
            .with_state(self);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        ClientConfig {
            api_base_url: format!("http://127.0.0.1:{}", port),
        }
    }
}

/// Serve plain text with an error status on every path.
pub async fn spawn_non_json_backend() -> ClientConfig {
    let app = Router::new().fallback(|| async {
        (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    ClientConfig {
        api_base_url: format!("http://127.0.0.1:{}", port),
    }
}

/// A base URL where nothing listens.
pub async fn unreachable_backend() -> ClientConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    ClientConfig {
        api_base_url: format!("http://127.0.0.1:{}", port),
    }
}
