use crate::config::ClientConfig;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_header, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub base_url: String,
    pub api_token: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${CATALOG_API_TOKEN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_client_config(self) -> ClientConfig {
        let mut config = ClientConfig::new(self.catalog.base_url);
        for (name, value) in self.catalog.headers.unwrap_or_default() {
            config = config.with_header(name, value);
        }
        match self.catalog.api_token.as_deref() {
            Some(token) if !token.is_empty() => config.with_bearer_token(token),
            _ => config,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.base_url", &self.catalog.base_url)?;

        if let Some(token) = &self.catalog.api_token {
            if token.starts_with("${") {
                return Err(CatalogError::ConfigError {
                    message: format!("catalog.api_token references an unset variable: {}", token),
                });
            }
        }

        if let Some(headers) = &self.catalog.headers {
            for (name, value) in headers {
                validate_header(name, value)?;
            }
        }
        Ok(())
    }
}
