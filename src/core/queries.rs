use graphql_client::QueryBody;
use serde_json::json;

pub const SERVICE_BY_NAME: &str = r#"query ServiceByName($name: String!) {
  account {
    services(filter: [{ key: name, type: equals, arg: $name }]) {
      nodes {
        id
        name
      }
    }
  }
}"#;

pub const SERVICE_TAGS: &str = r#"query ServiceTags($id: ID!) {
  account {
    service(id: $id) {
      tags {
        id
        name
      }
    }
  }
}"#;

pub const SERVICE_RESPONSIBLE_PARTY: &str = r#"query ServiceResponsibleParty($id: ID!) {
  account {
    service(id: $id) {
      onCallRotation {
        onCallUser {
          name
        }
      }
      owner {
        manager {
          name
        }
      }
    }
  }
}"#;

pub type CatalogQuery = QueryBody<serde_json::Value>;

pub fn service_by_name(name: &str) -> CatalogQuery {
    QueryBody {
        variables: json!({ "name": name }),
        query: SERVICE_BY_NAME,
        operation_name: "ServiceByName",
    }
}

pub fn service_tags(service_id: &str) -> CatalogQuery {
    QueryBody {
        variables: json!({ "id": service_id }),
        query: SERVICE_TAGS,
        operation_name: "ServiceTags",
    }
}

pub fn service_responsible_party(service_id: &str) -> CatalogQuery {
    QueryBody {
        variables: json!({ "id": service_id }),
        query: SERVICE_RESPONSIBLE_PARTY,
        operation_name: "ServiceResponsibleParty",
    }
}
