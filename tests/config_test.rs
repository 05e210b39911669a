use anyhow::Result;
use catalog_client::{CatalogApi, CatalogClient, TomlConfig};
use httpmock::prelude::*;
use tempfile::TempDir;

/// 從 TOML 檔案建立客戶端並實際送出查詢
#[tokio::test]
async fn test_client_from_toml_file() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("authorization", "Bearer file-token")
                .header("x-team", "platform");
            then.status(200).json_body(serde_json::json!({
                "data": {"account": {"services": {"nodes": [{"id": "42", "name": "billing"}]}}}
            }));
        })
        .await;

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("catalog.toml");
    let config_content = format!(
        r#"
[catalog]
base_url = "{}"
api_token = "file-token"

[catalog.headers]
X-Team = "platform"
"#,
        server.base_url()
    );
    tokio::fs::write(&config_path, config_content).await?;

    let config = TomlConfig::from_file(&config_path)?;
    let client = CatalogClient::new(config.into_client_config());

    assert_eq!(client.resolve_service_id("billing").await?, "42");
    api_mock.assert_async().await;
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("IO error"));
}
