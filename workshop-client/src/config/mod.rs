use clap::Args;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Where the client finds the API. Read once at startup.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Base URL of the workshop API.
    #[arg(long = "api-url", env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
