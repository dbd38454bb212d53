//! Application layer elements: applications, components, services, interfaces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize_enum_token;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApplicationLayer {
    pub uid: String,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub components: Vec<ApplicationComponent>,
    #[serde(default)]
    pub services: Vec<ApplicationService>,
    #[serde(default)]
    pub interfaces: Vec<ApplicationInterface>,
}

impl ApplicationLayer {
    pub fn element_count(&self) -> usize {
        self.applications.len()
            + self.components.len()
            + self.services.len()
            + self.interfaces.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stereo_type: ApplicationStereoType,
    /// Applications use `metadata` rather than `properties` in model files.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    pub lifecycle: ApplicationLifecycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationComponent {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub component_type: ApplicationComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationService {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInterface {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub interface_type: ApplicationInterfaceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStereoType {
    #[default]
    BusinessApplication,
    ItApplication,
    Platform,
    Infrastructure,
    Microsolution,
}

impl ApplicationStereoType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "business_application" => Some(Self::BusinessApplication),
            "it_application" => Some(Self::ItApplication),
            "platform" => Some(Self::Platform),
            "infrastructure" => Some(Self::Infrastructure),
            "microsolution" => Some(Self::Microsolution),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationLifecycle {
    Plan,
    Develop,
    #[default]
    Active,
    Phaseout,
    Retire,
}

impl ApplicationLifecycle {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "plan" => Some(Self::Plan),
            "develop" => Some(Self::Develop),
            "active" => Some(Self::Active),
            "phaseout" => Some(Self::Phaseout),
            "retire" => Some(Self::Retire),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationComponentType {
    Frontend,
    #[default]
    Backend,
    Database,
    Integration,
    Analytics,
}

impl ApplicationComponentType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "frontend" => Some(Self::Frontend),
            "backend" => Some(Self::Backend),
            "database" => Some(Self::Database),
            "integration" => Some(Self::Integration),
            "analytics" => Some(Self::Analytics),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationInterfaceType {
    #[default]
    Api,
    Ui,
    File,
    Message,
}

impl ApplicationInterfaceType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "api" => Some(Self::Api),
            "ui" => Some(Self::Ui),
            "file" => Some(Self::File),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}
