//! Product catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};

/// Default environment variable holding the catalog auth token
pub const DEFAULT_CATALOG_TOKEN_ENV: &str = "BARISTA_CATALOG_TOKEN";

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Realtime-database root, e.g. `https://<db>.firebaseio.com`
    pub base_url: Option<String>,
    /// Collection holding the product records
    pub collection: String,
    /// Name of the environment variable holding the `?auth=` token
    pub auth_token_env: String,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            collection: "products".to_string(),
            auth_token_env: DEFAULT_CATALOG_TOKEN_ENV.to_string(),
        }
    }
}

impl FileCatalogConfig {
    pub fn resolve_auth_token(&self) -> Option<String> {
        std::env::var(&self.auth_token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}
