use crate::config::ClientConfig;
use crate::core::queries::{self, CatalogQuery};
use crate::domain::model::{
    AccountData, ResponsibleParty, ServiceAccount, ServiceResponsibility, ServiceTags,
    ServicesAccount,
};
use crate::domain::ports::CatalogApi;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// 錯誤回應本體保留的最大位元組數
const MAX_ERROR_BODY: usize = 1024;

/// 服務目錄 GraphQL 客戶端
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: ClientConfig,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Same as `resolve_responsible_party`, but keeps which level answered.
    pub async fn responsible_party(&self, service_id: &str) -> Result<ResponsibleParty> {
        let data: AccountData<ServiceAccount<ServiceResponsibility>> = self
            .execute(&queries::service_responsible_party(service_id))
            .await?;

        let party = pick_responsible_party(&data.account.service).inspect_err(|e| {
            tracing::warn!("No responsible party for service {}: {}", service_id, e);
        })?;
        tracing::debug!("Responsible party for service {}: {:?}", service_id, party);
        Ok(party)
    }

    /// 送出查詢並解析 `data` 欄位
    async fn execute<T: DeserializeOwned>(&self, query: &CatalogQuery) -> Result<T> {
        let endpoint = self.config.graphql_endpoint();
        tracing::debug!("Sending GraphQL {} to: {}", query.operation_name, endpoint);

        let mut builder = self.config.http.post(&endpoint).json(query);
        for (name, value) in &self.config.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("{} request failed: {}", query.operation_name, e);
            CatalogError::Transport(e)
        })?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!("{} returned HTTP {}", query.operation_name, status);
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        decode_response(&body)
    }
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    body
}

fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: graphql_client::Response<T> = serde_json::from_str(body).map_err(|e| {
        tracing::warn!("Catalog response did not match the expected shape: {}", e);
        CatalogError::Decode(e)
    })?;

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        tracing::warn!("GraphQL response has {} errors", errors.len());
        return Err(CatalogError::Graphql {
            messages: errors.into_iter().map(|e| e.message).collect(),
        });
    }

    envelope.data.ok_or_else(|| {
        tracing::warn!("GraphQL response has neither data nor errors");
        CatalogError::missing("data")
    })
}

/// 先取 on-call，空字串或缺少時改取 manager；只有這兩層
fn pick_responsible_party(service: &ServiceResponsibility) -> Result<ResponsibleParty> {
    if let Some(name) = service.on_call_name().filter(|name| !name.is_empty()) {
        return Ok(ResponsibleParty::OnCall(name.to_string()));
    }

    service
        .manager_name()
        .map(|name| ResponsibleParty::Manager(name.to_string()))
        .ok_or_else(|| CatalogError::missing("data.account.service.owner.manager.name"))
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn resolve_service_id(&self, name: &str) -> Result<String> {
        let data: AccountData<ServicesAccount> =
            self.execute(&queries::service_by_name(name)).await?;

        let service = data
            .account
            .services
            .nodes
            .into_iter()
            .next()
            .ok_or_else(|| {
                tracing::warn!("No service named '{}' in the catalog", name);
                CatalogError::NotFound {
                    name: name.to_string(),
                }
            })?;

        tracing::debug!("Resolved service '{}' to id {}", name, service.id);
        Ok(service.id)
    }

    async fn list_tags(&self, service_id: &str) -> Result<Vec<String>> {
        let data: AccountData<ServiceAccount<ServiceTags>> =
            self.execute(&queries::service_tags(service_id)).await?;

        let tags: Vec<String> = data
            .account
            .service
            .tags
            .into_iter()
            .map(|tag| tag.name)
            .collect();

        tracing::debug!("Service {} has {} tags", service_id, tags.len());
        Ok(tags)
    }

    async fn resolve_responsible_party(&self, service_id: &str) -> Result<String> {
        Ok(self.responsible_party(service_id).await?.into_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responsibility(value: serde_json::Value) -> ServiceResponsibility {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_on_call_user_wins() {
        let service = responsibility(serde_json::json!({
            "onCallRotation": { "onCallUser": { "name": "on_call_user" } },
            "owner": { "manager": { "name": "manager_name" } }
        }));
        assert_eq!(
            pick_responsible_party(&service).unwrap(),
            ResponsibleParty::OnCall("on_call_user".to_string())
        );
    }

    #[test]
    fn test_empty_on_call_falls_back_to_manager() {
        let service = responsibility(serde_json::json!({
            "onCallRotation": { "onCallUser": { "name": "" } },
            "owner": { "manager": { "name": "manager_name" } }
        }));
        assert_eq!(
            pick_responsible_party(&service).unwrap(),
            ResponsibleParty::Manager("manager_name".to_string())
        );
    }

    #[test]
    fn test_missing_rotation_falls_back_to_manager() {
        let service = responsibility(serde_json::json!({
            "onCallRotation": null,
            "owner": { "manager": { "name": "manager_name" } }
        }));
        assert_eq!(
            pick_responsible_party(&service).unwrap(),
            ResponsibleParty::Manager("manager_name".to_string())
        );
    }

    #[test]
    fn test_empty_manager_is_returned_as_is() {
        let service = responsibility(serde_json::json!({
            "onCallRotation": { "onCallUser": { "name": "" } },
            "owner": { "manager": { "name": "" } }
        }));
        assert_eq!(
            pick_responsible_party(&service).unwrap(),
            ResponsibleParty::Manager(String::new())
        );
    }

    #[test]
    fn test_both_levels_absent_is_decode_error() {
        let service = responsibility(serde_json::json!({}));
        let err = pick_responsible_party(&service).unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("owner.manager.name"));
    }

    #[test]
    fn test_decode_graphql_errors() {
        let body = r#"{"data": null, "errors": [{"message": "Service not visible"}]}"#;
        let err = decode_response::<serde_json::Value>(body).unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("Service not visible"));
    }

    #[test]
    fn test_decode_missing_data() {
        let err = decode_response::<serde_json::Value>(r#"{"errors": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField { ref path } if path == "data"));
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let body = r#"{"data": {"account": {"services": {"nodes": "oops"}}}}"#;
        let err = decode_response::<AccountData<ServicesAccount>>(body).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_null_service_is_decode_error() {
        let body = r#"{"data": {"account": {"service": null}}}"#;

        let err = decode_response::<AccountData<ServiceAccount<ServiceTags>>>(body).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));

        let err = decode_response::<AccountData<ServiceAccount<ServiceResponsibility>>>(body)
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_empty_on_call_with_null_owner_is_missing_field() {
        let service = responsibility(serde_json::json!({
            "onCallRotation": { "onCallUser": { "name": "" } },
            "owner": null
        }));
        let err = pick_responsible_party(&service).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField { ref path }
            if path == "data.account.service.owner.manager.name"));
    }

    #[test]
    fn test_error_body_is_truncated() {
        let short = "upstream timeout".to_string();
        assert_eq!(truncate_body(short.clone()), short);

        let long = "x".repeat(MAX_ERROR_BODY * 4);
        let truncated = truncate_body(long);
        assert_eq!(truncated.len(), MAX_ERROR_BODY + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_error_body_truncation_respects_char_boundaries() {
        // 3-byte characters never line up with the limit
        let long = "服".repeat(MAX_ERROR_BODY);
        let truncated = truncate_body(long);
        assert!(truncated.len() <= MAX_ERROR_BODY + 3);
        assert!(truncated.trim_end_matches("...").chars().all(|c| c == '服'));
    }
}
