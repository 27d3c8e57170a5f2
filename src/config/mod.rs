use garde::Validate;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:8000").
    #[serde(default = "default_bind_addr")]
    #[garde(length(min = 1))]
    pub bind_addr: String,

    /// Directory holding `cocktails.json` and `alcohols.json`.
    #[serde(default = "default_data_dir")]
    #[garde(custom(non_empty_path))]
    pub data_dir: PathBuf,

    /// Upper bound for request bodies, in bytes.
    #[serde(default = "default_max_body_bytes")]
    #[garde(range(min = 1024, max = 10_485_760))]
    pub max_body_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn non_empty_path(value: &PathBuf, _ctx: &()) -> garde::Result {
    if value.as_os_str().is_empty() {
        return Err(garde::Error::new("data directory must not be empty"));
    }
    Ok(())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config: AppConfig = envy::from_env()?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] garde::Report),
}
