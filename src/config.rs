use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::WordVaultError,
    persistence,
};

const CONFIG_FILE: &str = "config.json";

/// Client-side settings: where the backend lives and how long to wait on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: "http://localhost:8080".to_string(), request_timeout_secs: 120 }
    }
}

pub fn load_config() -> ClientConfig {
    persistence::load_json_or_default(CONFIG_FILE)
}

pub fn save_config(config: &ClientConfig) -> Result<(), WordVaultError> {
    persistence::save_json(config, CONFIG_FILE)
}
