//! Typed domain model for layered enterprise architectures.
//!
//! An [`Architecture`] is the aggregate root: one business, one application
//! and one technology layer container plus a flat relationship list. It is
//! built once per load or merge by the mapper and never mutated afterwards;
//! every change replaces the whole aggregate.

pub mod application;
pub mod business;
pub mod relationship;
pub mod technology;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use application::{
    Application, ApplicationComponent, ApplicationComponentType, ApplicationInterface,
    ApplicationInterfaceType, ApplicationLayer, ApplicationLifecycle, ApplicationService,
    ApplicationStereoType,
};
pub use business::{
    ActorType, BusinessActor, BusinessCapability, BusinessDomain, BusinessLayer, BusinessProcess,
    BusinessService, ProcessType,
};
pub use relationship::{
    AccessType, FlowType, Relationship, RelationshipCategory, RelationshipInfo, RelationshipType,
};
pub use technology::{
    Artifact, ArtifactType, SystemSoftware, SystemSoftwareType, TechnologyInterface,
    TechnologyLayer, TechnologyNode, TechnologyNodeType, TechnologyService,
    TechnologyServiceCategory,
};

/// The full three-layer model plus relationships for one system-of-interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    pub uid: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub business_layer: BusinessLayer,
    pub application_layer: ApplicationLayer,
    pub technology_layer: TechnologyLayer,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    /// Provenance: contributing source files, element counts, load timestamp.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Architecture {
    /// Total number of elements across all three layers.
    pub fn element_count(&self) -> usize {
        self.business_layer.element_count()
            + self.application_layer.element_count()
            + self.technology_layer.element_count()
    }
}

/// Normalize a raw enum token from a model file: spaces and hyphens become
/// underscores, case is folded. `"Business Application"` and
/// `"business-application"` both match `business_application`.
pub(crate) fn normalize_enum_token(raw: &str) -> String {
    raw.trim().replace([' ', '-'], "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_enum_token() {
        assert_eq!(normalize_enum_token("Business Application"), "business_application");
        assert_eq!(normalize_enum_token("READ-WRITE"), "read_write");
        assert_eq!(normalize_enum_token("  Core "), "core");
    }
}
