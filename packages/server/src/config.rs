use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use common::config::StoreConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load from `NEWSROOM_CONFIG` (default `config/config`) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("NEWSROOM_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::load_from(&config_path)
    }

    /// Defaults, then the optional file at `config_path`, then `NEWSROOM__*` variables.
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("store.data_dir", "./resources")?
            .add_source(File::with_name(config_path).required(false))
            // Override from environment (e.g., NEWSROOM__STORE__DATA_DIR)
            .add_source(
                Environment::with_prefix("NEWSROOM")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
