pub mod config;
pub mod loading;
pub mod models;
pub mod services;
pub mod workshop;

pub use config::ClientConfig;
pub use loading::{Action, BusyGuard, LoadingState};
pub use services::api_client::{ApiClient, ClientError};
pub use workshop::Workshop;
