use crate::utils::error::{CatalogError, Result};
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_header(name: &str, value: &str) -> Result<()> {
    if HeaderName::from_bytes(name.as_bytes()).is_err() {
        return Err(CatalogError::InvalidConfigValueError {
            field: "headers".to_string(),
            value: name.to_string(),
            reason: "Invalid HTTP header name".to_string(),
        });
    }

    // 值不回顯，可能含有 token
    if HeaderValue::from_str(value).is_err() {
        return Err(CatalogError::InvalidConfigValueError {
            field: format!("headers.{}", name),
            value: "<redacted>".to_string(),
            reason: "Invalid HTTP header value".to_string(),
        });
    }

    Ok(())
}
