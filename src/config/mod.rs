pub mod toml_config;

use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_header, validate_url, Validate};
use reqwest::Client;
use std::collections::BTreeMap;
use std::env;
use std::fmt;

pub use toml_config::TomlConfig;

/// 單一目錄端點的連線設定
///
/// Each `CatalogClient` owns one of these. Pointing a client somewhere else
/// means building a new config, never mutating a shared one.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub headers: BTreeMap<String, String>,
    pub http: Client,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: BTreeMap::new(),
            http: Client::new(),
        }
    }

    /// Timeouts, proxies and TLS settings live on the transport.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_bearer_token(self, token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {}", token))
    }

    pub fn graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.base_url.trim_end_matches('/'))
    }

    /// 從環境變數載入: CATALOG_BASE_URL（必填）、CATALOG_API_TOKEN（選填）
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("CATALOG_BASE_URL").map_err(|_| CatalogError::ConfigError {
            message: "CATALOG_BASE_URL environment variable is required".to_string(),
        })?;

        let config = match env::var("CATALOG_API_TOKEN") {
            Ok(token) if !token.is_empty() => Self::new(base_url).with_bearer_token(&token),
            _ => Self::new(base_url),
        };

        config.validate()?;
        Ok(config)
    }
}

// header 值可能含有 token，只印名稱
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .keys()
            .map(|name| (name.as_str(), "<redacted>"))
            .collect();

        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("headers", &headers)
            .field("http", &self.http)
            .finish()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        for (name, value) in &self.headers {
            validate_header(name, value)?;
        }
        Ok(())
    }
}
