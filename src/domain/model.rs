use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// 目前負責某服務的人，以及答案來自哪一層
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsibleParty {
    OnCall(String),
    Manager(String),
}

impl ResponsibleParty {
    pub fn name(&self) -> &str {
        match self {
            ResponsibleParty::OnCall(name) | ResponsibleParty::Manager(name) => name,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            ResponsibleParty::OnCall(name) | ResponsibleParty::Manager(name) => name,
        }
    }
}

// `data` 欄位內容: {"account": {...}}

#[derive(Debug, Deserialize)]
pub struct AccountData<T> {
    pub account: T,
}

#[derive(Debug, Deserialize)]
pub struct ServicesAccount {
    pub services: ServiceConnection,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConnection {
    pub nodes: Vec<Service>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceAccount<S> {
    pub service: S,
}

#[derive(Debug, Deserialize)]
pub struct ServiceTags {
    pub tags: Vec<Tag>,
}

/// Nullable levels stay `Option` so that absence is distinguishable from "".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponsibility {
    #[serde(default)]
    pub on_call_rotation: Option<OnCallRotation>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnCallRotation {
    #[serde(default)]
    pub on_call_user: Option<Person>,
}

#[derive(Debug, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub manager: Option<Person>,
}

#[derive(Debug, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
}

impl ServiceResponsibility {
    pub fn on_call_name(&self) -> Option<&str> {
        self.on_call_rotation
            .as_ref()?
            .on_call_user
            .as_ref()?
            .name
            .as_deref()
    }

    pub fn manager_name(&self) -> Option<&str> {
        self.owner.as_ref()?.manager.as_ref()?.name.as_deref()
    }
}
