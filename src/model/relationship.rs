//! ArchiMate-style relationships between element references.
//!
//! A relationship is a typed, directed edge (Association is the one
//! undirected type) between two raw element references. References are kept
//! as the strings written in the model files; resolution against the element
//! set is out of scope. Category and structural strength are derived from the
//! type and never stored, so they can never disagree with it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::normalize_enum_token;

/// The eleven ArchiMate 3.1 relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    // Structural, in ascending order of strength
    #[default]
    Association,
    Assignment,
    Realization,
    Aggregation,
    Composition,
    // Dynamic
    Triggering,
    Flow,
    // Dependency
    Serving,
    Access,
    Influence,
    // Other
    Specialization,
}

/// Semantic grouping of relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipCategory {
    Structural,
    Dynamic,
    Dependency,
    Other,
}

impl RelationshipType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "association" => Some(Self::Association),
            "assignment" => Some(Self::Assignment),
            "realization" => Some(Self::Realization),
            "aggregation" => Some(Self::Aggregation),
            "composition" => Some(Self::Composition),
            "triggering" => Some(Self::Triggering),
            "flow" => Some(Self::Flow),
            "serving" => Some(Self::Serving),
            "access" => Some(Self::Access),
            "influence" => Some(Self::Influence),
            "specialization" => Some(Self::Specialization),
            _ => None,
        }
    }

    /// Category is a pure function of the type.
    pub fn category(self) -> RelationshipCategory {
        match self {
            Self::Association
            | Self::Assignment
            | Self::Realization
            | Self::Aggregation
            | Self::Composition => RelationshipCategory::Structural,
            Self::Triggering | Self::Flow => RelationshipCategory::Dynamic,
            Self::Serving | Self::Access | Self::Influence => RelationshipCategory::Dependency,
            Self::Specialization => RelationshipCategory::Other,
        }
    }

    /// Structural strength, 1 (weakest) to 5 (strongest); 0 for
    /// non-structural types.
    pub fn strength(self) -> u8 {
        match self {
            Self::Association => 1,
            Self::Assignment => 2,
            Self::Realization => 3,
            Self::Aggregation => 4,
            Self::Composition => 5,
            _ => 0,
        }
    }
}

/// Flow classification for `Flow` relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowType {
    #[default]
    Information,
    Value,
    Goods,
    Resources,
    Data,
    Control,
    Event,
    Signal,
    Material,
}

impl FlowType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "information" => Some(Self::Information),
            "value" => Some(Self::Value),
            "goods" => Some(Self::Goods),
            "resources" => Some(Self::Resources),
            "data" => Some(Self::Data),
            "control" => Some(Self::Control),
            "event" => Some(Self::Event),
            "signal" => Some(Self::Signal),
            "material" => Some(Self::Material),
            _ => None,
        }
    }
}

/// Access classification for `Access` relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    Read,
    Write,
    ReadWrite,
    #[default]
    Access,
}

impl AccessType {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_enum_token(raw).as_str() {
            "read" => Some(Self::Read),
            "write" => Some(Self::Write),
            "read_write" => Some(Self::ReadWrite),
            "access" => Some(Self::Access),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub uid: String,
    pub relationship_type: RelationshipType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unresolved reference to the source element (e.g. `BA.customer`).
    pub source: String,
    /// Unresolved reference to the target element.
    pub target: String,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Required iff `relationship_type` is `Flow`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_type: Option<FlowType>,
    /// Required iff `relationship_type` is `Access`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_type: Option<AccessType>,
}

impl Relationship {
    pub fn category(&self) -> RelationshipCategory {
        self.relationship_type.category()
    }

    pub fn strength(&self) -> u8 {
        self.relationship_type.strength()
    }

    /// False only when a conditionally required discriminant is missing.
    pub fn is_well_formed(&self) -> bool {
        match self.relationship_type {
            RelationshipType::Flow => self.flow_type.is_some(),
            RelationshipType::Access => self.access_type.is_some(),
            _ => true,
        }
    }
}

/// Human-readable description of a relationship type, for reports and UIs.
/// Not consulted by the validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: RelationshipCategory,
    pub strength: u8,
    pub directional: bool,
    pub semantics: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_derived_from_type() {
        assert_eq!(RelationshipType::Composition.category(), RelationshipCategory::Structural);
        assert_eq!(RelationshipType::Triggering.category(), RelationshipCategory::Dynamic);
        assert_eq!(RelationshipType::Flow.category(), RelationshipCategory::Dynamic);
        assert_eq!(RelationshipType::Serving.category(), RelationshipCategory::Dependency);
        assert_eq!(RelationshipType::Specialization.category(), RelationshipCategory::Other);
    }

    #[test]
    fn test_structural_strength_ordering() {
        assert_eq!(RelationshipType::Association.strength(), 1);
        assert_eq!(RelationshipType::Assignment.strength(), 2);
        assert_eq!(RelationshipType::Realization.strength(), 3);
        assert_eq!(RelationshipType::Aggregation.strength(), 4);
        assert_eq!(RelationshipType::Composition.strength(), 5);
        assert_eq!(RelationshipType::Flow.strength(), 0);
    }

    #[test]
    fn test_parse_tolerates_case_and_separators() {
        assert_eq!(RelationshipType::parse("COMPOSITION"), Some(RelationshipType::Composition));
        assert_eq!(AccessType::parse("Read-Write"), Some(AccessType::ReadWrite));
        assert_eq!(RelationshipType::parse("borrows"), None);
    }

    #[test]
    fn test_flow_well_formedness() {
        let mut rel = Relationship {
            uid: "rel-1".into(),
            relationship_type: RelationshipType::Flow,
            description: None,
            source: "a".into(),
            target: "b".into(),
            properties: BTreeMap::new(),
            flow_type: None,
            access_type: None,
        };
        assert!(!rel.is_well_formed());
        rel.flow_type = Some(FlowType::Information);
        assert!(rel.is_well_formed());
    }
}
