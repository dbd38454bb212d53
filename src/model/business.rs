//! Business layer elements: domains, capabilities, actors, processes, services.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize_enum_token;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BusinessLayer {
    pub uid: String,
    #[serde(default)]
    pub domains: Vec<BusinessDomain>,
    #[serde(default)]
    pub capabilities: Vec<BusinessCapability>,
    #[serde(default)]
    pub actors: Vec<BusinessActor>,
    #[serde(default)]
    pub processes: Vec<BusinessProcess>,
    #[serde(default)]
    pub services: Vec<BusinessService>,
}

impl BusinessLayer {
    pub fn element_count(&self) -> usize {
        self.domains.len()
            + self.capabilities.len()
            + self.actors.len()
            + self.processes.len()
            + self.services.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDomain {
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
pub struct BusinessCapability {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Capability map level (1 = top level).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_capability: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessActor {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub actor_type: ActorType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProcess {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    pub process_type: ProcessType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessService {
    pub uid: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    #[default]
    Internal,
    External,
    Partner,
}

impl ActorType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "internal" => Some(Self::Internal),
            "external" => Some(Self::External),
            "partner" => Some(Self::Partner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    #[default]
    Core,
    Support,
    Management,
}

impl ProcessType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "core" => Some(Self::Core),
            "support" => Some(Self::Support),
            "management" => Some(Self::Management),
            _ => None,
        }
    }
}
