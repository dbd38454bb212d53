//! Technology layer elements: nodes, services, artifacts, interfaces, system software.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize_enum_token;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TechnologyLayer {
    pub uid: String,
    #[serde(default)]
    pub nodes: Vec<TechnologyNode>,
    #[serde(default)]
    pub services: Vec<TechnologyService>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub interfaces: Vec<TechnologyInterface>,
    #[serde(default)]
    pub system_software: Vec<SystemSoftware>,
}

impl TechnologyLayer {
    pub fn element_count(&self) -> usize {
        self.nodes.len()
            + self.services.len()
            + self.artifacts.len()
            + self.interfaces.len()
            + self.system_software.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyNode {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub node_type: TechnologyNodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyService {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub service_category: TechnologyServiceCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub artifact_type: ArtifactType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyInterface {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSoftware {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub software_type: SystemSoftwareType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TechnologyNodeType {
    #[default]
    Server,
    Network,
    Storage,
    Client,
    Cloud,
}

impl TechnologyNodeType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "server" => Some(Self::Server),
            "network" => Some(Self::Network),
            "storage" => Some(Self::Storage),
            "client" => Some(Self::Client),
            "cloud" => Some(Self::Cloud),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TechnologyServiceCategory {
    #[default]
    Compute,
    Storage,
    Network,
    Security,
    Monitoring,
}

impl TechnologyServiceCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "compute" => Some(Self::Compute),
            "storage" => Some(Self::Storage),
            "network" => Some(Self::Network),
            "security" => Some(Self::Security),
            "monitoring" => Some(Self::Monitoring),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    #[default]
    Configuration,
    Data,
    Software,
    Physical,
}

impl ArtifactType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "configuration" => Some(Self::Configuration),
            "data" => Some(Self::Data),
            "software" => Some(Self::Software),
            "physical" => Some(Self::Physical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SystemSoftwareType {
    Os,
    Database,
    Middleware,
    #[default]
    Runtime,
}

impl SystemSoftwareType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "os" => Some(Self::Os),
            "database" => Some(Self::Database),
            "middleware" => Some(Self::Middleware),
            "runtime" => Some(Self::Runtime),
            _ => None,
        }
    }
}
