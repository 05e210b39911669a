pub mod client;
pub mod queries;

pub use crate::domain::model::{ResponsibleParty, Service, Tag};
pub use crate::domain::ports::CatalogApi;
pub use crate::utils::error::Result;
