use crate::utils::error::Result;
use async_trait::async_trait;

/// 服務目錄查詢介面
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn resolve_service_id(&self, name: &str) -> Result<String>;
    async fn list_tags(&self, service_id: &str) -> Result<Vec<String>>;
    async fn resolve_responsible_party(&self, service_id: &str) -> Result<String>;
}
