use std::fmt::Debug;
use std::path::Path;

use crate::storage::config::StorageConfig;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
}
impl Config {
    pub fn from_path<P>(config_path: P) -> Self
    where
        P: AsRef<Path> + Debug,
    {
        let str = std::fs::read_to_string(config_path.as_ref())
            .unwrap_or_else(|e| panic!("Failed to load config from {:?}: {}", config_path, e));
        let config: Config = toml::from_str(&str)
            .unwrap_or_else(|e| panic!("Failed to parse config from {:?}: {}", config_path, e));
        log::info!("Loaded config: {:#?}", config);
        config
    }
}
