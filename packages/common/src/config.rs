use std::path::PathBuf;

use serde::Deserialize;

/// Document store configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Directory holding one `<collection>.json` file per collection. Default: "./resources".
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./resources")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
