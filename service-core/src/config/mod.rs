use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    /// Load the shared settings once at startup.
    ///
    /// Sources, lowest precedence first: an optional `configuration` file,
    /// `APP__*` environment variables, then the plain `PORT` variable.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", std::env::var("PORT").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_matches_workshop_backend() {
        assert_eq!(Config::default().port, 3001);
    }

    #[test]
    fn port_deserializes_from_string_source() {
        let config: Config = Cfg::builder()
            .set_override("port", "8088")
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");

        assert_eq!(config.port, 8088);
    }

    #[test]
    fn missing_port_uses_default() {
        let config: Config = Cfg::builder()
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");

        assert_eq!(config.port, DEFAULT_PORT);
    }
}
