pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{ClientConfig, TomlConfig};
pub use self::core::{client::CatalogClient, CatalogApi, ResponsibleParty};
pub use utils::error::{CatalogError, ErrorCategory, Result};
