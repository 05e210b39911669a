use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response is missing field: {path}")]
    MissingField { path: String },

    #[error("GraphQL query errors: [{}]", .messages.join(", "))]
    Graphql { messages: Vec<String> },

    #[error("Service not found: {name}")]
    NotFound { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Decode,
    NotFound,
    Config,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::Transport(_) | CatalogError::HttpStatus { .. } => {
                ErrorCategory::Transport
            }
            CatalogError::Decode(_)
            | CatalogError::MissingField { .. }
            | CatalogError::Graphql { .. } => ErrorCategory::Decode,
            CatalogError::NotFound { .. } => ErrorCategory::NotFound,
            CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::IoError(_) => ErrorCategory::Config,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    pub fn is_decode(&self) -> bool {
        self.category() == ErrorCategory::Decode
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub(crate) fn missing(path: &str) -> Self {
        CatalogError::MissingField {
            path: path.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
