//! Relationship graph validation.
//!
//! Stateless free functions over the typed model: per-relationship
//! well-formedness, pairwise conflict detection between relationships that
//! share a source/target pair, and cycle detection over the subgraph induced
//! by structural relationships. Validation never fails the caller; it only
//! returns a result describing validity. Findings are advisory — an
//! architecture is still loaded and stored when its validation fails.
//!
//! Stable error codes:
//! - `REL_001` Flow relationship missing its flowType
//! - `REL_002` Access relationship missing its accessType
//! - `REL_003` Composition and Aggregation between the same pair
//! - `REL_004` multiple distinct structural types between the same pair
//! - `REL_005` cycle in the structural subgraph

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::model::{Relationship, RelationshipCategory, RelationshipInfo, RelationshipType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
}

impl ValidationError {
    pub fn new(code: &str, message: impl Into<String>, field: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: field.map(str::to_string),
            element_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }
}

/// Structural check of one relationship: a Flow without a flowType or an
/// Access without an accessType is invalid; every other type/discriminant
/// combination passes.
pub fn validate_relationship(relationship: &Relationship) -> ValidationResult {
    let mut errors = Vec::new();

    if !relationship.is_well_formed() {
        match relationship.relationship_type {
            RelationshipType::Flow => errors.push(ValidationError::new(
                "REL_001",
                "Flow relationship requires a flowType",
                Some("flowType"),
            )),
            RelationshipType::Access => errors.push(ValidationError::new(
                "REL_002",
                "Access relationship requires an accessType",
                Some("accessType"),
            )),
            _ => {}
        }
    }

    check_element_compatibility(relationship, &mut errors);
    check_flow_type(relationship, &mut errors);
    check_access_type(relationship, &mut errors);

    ValidationResult::from_errors(errors)
}

/// Validate a relationship list: each relationship individually, then
/// pairwise conflicts and structural cycles.
pub fn validate_relationships(relationships: &[Relationship]) -> ValidationResult {
    let mut errors = Vec::new();

    for relationship in relationships {
        errors.extend(validate_relationship(relationship).errors);
    }

    check_conflicts(relationships, &mut errors);
    check_cycles(relationships, &mut errors);

    ValidationResult::from_errors(errors)
}

/// Relationship counts per category, reported alongside set validation.
pub fn category_counts(relationships: &[Relationship]) -> BTreeMap<RelationshipCategory, usize> {
    let mut counts = BTreeMap::new();
    for relationship in relationships {
        *counts.entry(relationship.category()).or_insert(0) += 1;
    }
    counts
}

// Compatibility of source/target element kinds with the relationship type
// would need the resolved element set; references are unresolved here, so
// this check accepts everything. Kept as a named rule so the gap is visible.
fn check_element_compatibility(_relationship: &Relationship, _errors: &mut Vec<ValidationError>) {}

// Appropriateness of the flowType for the connected elements; permissive for
// the same reason as element compatibility.
fn check_flow_type(_relationship: &Relationship, _errors: &mut Vec<ValidationError>) {}

// Appropriateness of the accessType for the target element; permissive.
fn check_access_type(_relationship: &Relationship, _errors: &mut Vec<ValidationError>) {}

fn check_conflicts(relationships: &[Relationship], errors: &mut Vec<ValidationError>) {
    // Groups key on the directional source-target concatenation: A->B and
    // B->A land in different groups and are never compared.
    let mut groups: BTreeMap<String, Vec<&Relationship>> = BTreeMap::new();
    for relationship in relationships {
        groups
            .entry(format!("{}-{}", relationship.source, relationship.target))
            .or_default()
            .push(relationship);
    }

    for (pair, group) in &groups {
        if group.len() < 2 {
            continue;
        }

        let types: BTreeSet<RelationshipType> = group.iter().map(|r| r.relationship_type).collect();

        if types.contains(&RelationshipType::Composition)
            && types.contains(&RelationshipType::Aggregation)
        {
            errors.push(ValidationError::new(
                "REL_003",
                format!(
                    "Composition and Aggregation relationships cannot exist between the same elements: {pair}"
                ),
                Some("relationshipType"),
            ));
        }

        let structural_count = types
            .iter()
            .filter(|t| t.category() == RelationshipCategory::Structural)
            .count();
        if structural_count > 1 {
            errors.push(ValidationError::new(
                "REL_004",
                format!(
                    "Multiple structural relationships between same elements may indicate a modeling issue: {pair}"
                ),
                Some("relationshipType"),
            ));
        }
    }
}

fn check_cycles(relationships: &[Relationship], errors: &mut Vec<ValidationError>) {
    // Adjacency restricted to structural relationships, over the raw
    // reference strings.
    let mut adjacency: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for relationship in relationships {
        if relationship.category() == RelationshipCategory::Structural {
            adjacency
                .entry(relationship.source.clone())
                .or_default()
                .insert(relationship.target.clone());
        }
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut stack: HashSet<String> = HashSet::new();

    let nodes: Vec<String> = adjacency.keys().cloned().collect();
    for node in nodes {
        if !visited.contains(&node) && has_cycle(&node, &adjacency, &mut visited, &mut stack) {
            errors.push(ValidationError::new(
                "REL_005",
                format!("Circular dependency detected in structural relationships involving: {node}"),
                Some("source"),
            ));
        }
    }
}

// DFS with an explicit recursion stack. Reports only the root at which the
// first back-edge was found, not the full cycle path, and stops traversing
// that root once a cycle is seen.
fn has_cycle(
    node: &str,
    adjacency: &BTreeMap<String, BTreeSet<String>>,
    visited: &mut HashSet<String>,
    stack: &mut HashSet<String>,
) -> bool {
    if stack.contains(node) {
        return true;
    }
    if visited.contains(node) {
        return false;
    }

    visited.insert(node.to_string());
    stack.insert(node.to_string());

    if let Some(neighbors) = adjacency.get(node) {
        for neighbor in neighbors {
            if has_cycle(neighbor, adjacency, visited, stack) {
                return true;
            }
        }
    }

    stack.remove(node);
    false
}

/// Static lookup of human-readable information for a relationship type.
/// Used for reports and documentation, never by the validation rules.
pub fn relationship_info(relationship_type: RelationshipType) -> RelationshipInfo {
    match relationship_type {
        RelationshipType::Composition => RelationshipInfo {
            name: "Composition",
            description: "Represents a whole-part relationship with existential dependency",
            category: RelationshipCategory::Structural,
            strength: 5,
            directional: true,
            semantics: "The source element is composed of the target element. If the source is deleted, the target is also deleted.",
        },
        RelationshipType::Aggregation => RelationshipInfo {
            name: "Aggregation",
            description: "Represents a collection-member relationship",
            category: RelationshipCategory::Structural,
            strength: 4,
            directional: true,
            semantics: "The source element aggregates the target element. The target can exist independently.",
        },
        RelationshipType::Realization => RelationshipInfo {
            name: "Realization",
            description: "Shows implementation or fulfillment",
            category: RelationshipCategory::Structural,
            strength: 3,
            directional: true,
            semantics: "The source element realizes or implements the target element.",
        },
        RelationshipType::Assignment => RelationshipInfo {
            name: "Assignment",
            description: "Allocation of responsibility or performance of behavior",
            category: RelationshipCategory::Structural,
            strength: 2,
            directional: true,
            semantics: "The source element is assigned to perform the target element.",
        },
        RelationshipType::Association => RelationshipInfo {
            name: "Association",
            description: "Generic unspecified relationship",
            category: RelationshipCategory::Structural,
            strength: 1,
            directional: false,
            semantics: "The source and target elements are associated in some way.",
        },
        RelationshipType::Triggering => RelationshipInfo {
            name: "Triggering",
            description: "Temporal or causal dependency",
            category: RelationshipCategory::Dynamic,
            strength: 0,
            directional: true,
            semantics: "The source element triggers the target element in time or causally.",
        },
        RelationshipType::Flow => RelationshipInfo {
            name: "Flow",
            description: "Transfer of information, resources, or value",
            category: RelationshipCategory::Dynamic,
            strength: 0,
            directional: true,
            semantics: "Something flows from the source element to the target element.",
        },
        RelationshipType::Serving => RelationshipInfo {
            name: "Serving",
            description: "Provides functionality to another element",
            category: RelationshipCategory::Dependency,
            strength: 0,
            directional: true,
            semantics: "The source element serves the target element by providing functionality.",
        },
        RelationshipType::Access => RelationshipInfo {
            name: "Access",
            description: "Behavioral elements accessing passive elements",
            category: RelationshipCategory::Dependency,
            strength: 0,
            directional: true,
            semantics: "The source element accesses the target element.",
        },
        RelationshipType::Influence => RelationshipInfo {
            name: "Influence",
            description: "One element affects another",
            category: RelationshipCategory::Dependency,
            strength: 0,
            directional: true,
            semantics: "The source element influences the target element.",
        },
        RelationshipType::Specialization => RelationshipInfo {
            name: "Specialization",
            description: "Generalization/specialization relationship",
            category: RelationshipCategory::Other,
            strength: 0,
            directional: true,
            semantics: "The source element is a specialization of the target element.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessType, FlowType};
    use std::collections::BTreeMap;

    fn rel(
        uid: &str,
        relationship_type: RelationshipType,
        source: &str,
        target: &str,
    ) -> Relationship {
        Relationship {
            uid: uid.to_string(),
            relationship_type,
            description: None,
            source: source.to_string(),
            target: target.to_string(),
            properties: BTreeMap::new(),
            flow_type: None,
            access_type: None,
        }
    }

    fn codes(result: &ValidationResult) -> Vec<&str> {
        result.errors.iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn test_flow_without_flow_type_is_rel_001() {
        let result = validate_relationship(&rel("r", RelationshipType::Flow, "a", "b"));
        assert!(!result.is_valid);
        assert_eq!(codes(&result), vec!["REL_001"]);
    }

    #[test]
    fn test_flow_with_flow_type_is_valid() {
        let mut flow = rel("r", RelationshipType::Flow, "a", "b");
        flow.flow_type = Some(FlowType::Information);
        assert!(validate_relationship(&flow).is_valid);
    }

    #[test]
    fn test_access_without_access_type_is_rel_002() {
        let result = validate_relationship(&rel("r", RelationshipType::Access, "a", "b"));
        assert_eq!(codes(&result), vec!["REL_002"]);
    }

    #[test]
    fn test_access_with_access_type_is_valid() {
        let mut access = rel("r", RelationshipType::Access, "a", "b");
        access.access_type = Some(AccessType::Read);
        assert!(validate_relationship(&access).is_valid);
    }

    #[test]
    fn test_other_types_valid_without_discriminants() {
        for relationship_type in [
            RelationshipType::Association,
            RelationshipType::Composition,
            RelationshipType::Serving,
            RelationshipType::Specialization,
        ] {
            assert!(validate_relationship(&rel("r", relationship_type, "a", "b")).is_valid);
        }
    }

    #[test]
    fn test_composition_aggregation_conflict_is_one_rel_003() {
        let result = validate_relationships(&[
            rel("r1", RelationshipType::Composition, "a", "b"),
            rel("r2", RelationshipType::Aggregation, "a", "b"),
        ]);
        let found = codes(&result);
        assert_eq!(found.iter().filter(|c| **c == "REL_003").count(), 1);
        // Two distinct structural types in one group also trips REL_004
        assert_eq!(found.iter().filter(|c| **c == "REL_004").count(), 1);
    }

    #[test]
    fn test_opposite_directions_never_compared() {
        let result = validate_relationships(&[
            rel("r1", RelationshipType::Composition, "a", "b"),
            rel("r2", RelationshipType::Aggregation, "b", "a"),
        ]);
        assert!(!codes(&result).contains(&"REL_003"));
    }

    #[test]
    fn test_same_type_twice_is_no_conflict() {
        let result = validate_relationships(&[
            rel("r1", RelationshipType::Composition, "a", "b"),
            rel("r2", RelationshipType::Composition, "a", "b"),
        ]);
        assert!(result.is_valid);
    }

    #[test]
    fn test_structural_cycle_is_rel_005() {
        let result = validate_relationships(&[
            rel("r1", RelationshipType::Composition, "a", "b"),
            rel("r2", RelationshipType::Composition, "b", "c"),
            rel("r3", RelationshipType::Composition, "c", "a"),
        ]);
        // The whole ring is visited from the first root, so exactly one finding
        assert_eq!(codes(&result), vec!["REL_005"]);
    }

    #[test]
    fn test_disjoint_cycles_each_report() {
        let result = validate_relationships(&[
            rel("r1", RelationshipType::Composition, "a", "b"),
            rel("r2", RelationshipType::Composition, "b", "a"),
            rel("r3", RelationshipType::Composition, "c", "d"),
            rel("r4", RelationshipType::Composition, "d", "c"),
        ]);
        assert_eq!(codes(&result).iter().filter(|c| **c == "REL_005").count(), 2);
    }

    #[test]
    fn test_dependency_cycle_not_reported() {
        let result = validate_relationships(&[
            rel("r1", RelationshipType::Serving, "a", "b"),
            rel("r2", RelationshipType::Serving, "b", "c"),
            rel("r3", RelationshipType::Serving, "c", "a"),
        ]);
        assert!(!codes(&result).contains(&"REL_005"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_acyclic_structural_graph_is_valid() {
        let result = validate_relationships(&[
            rel("r1", RelationshipType::Composition, "a", "b"),
            rel("r2", RelationshipType::Aggregation, "a", "c"),
            rel("r3", RelationshipType::Realization, "b", "d"),
        ]);
        // REL_004 does not apply across different pairs
        assert!(result.is_valid);
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let result = validate_relationships(&[rel("r1", RelationshipType::Composition, "a", "a")]);
        assert!(codes(&result).contains(&"REL_005"));
    }

    #[test]
    fn test_category_counts() {
        let mut flow = rel("r3", RelationshipType::Flow, "e", "f");
        flow.flow_type = Some(FlowType::Data);
        let relationships = vec![
            rel("r1", RelationshipType::Composition, "a", "b"),
            rel("r2", RelationshipType::Serving, "c", "d"),
            flow,
            rel("r4", RelationshipType::Specialization, "g", "h"),
            rel("r5", RelationshipType::Association, "i", "j"),
        ];
        let counts = category_counts(&relationships);
        assert_eq!(counts.get(&RelationshipCategory::Structural), Some(&2));
        assert_eq!(counts.get(&RelationshipCategory::Dynamic), Some(&1));
        assert_eq!(counts.get(&RelationshipCategory::Dependency), Some(&1));
        assert_eq!(counts.get(&RelationshipCategory::Other), Some(&1));
    }

    #[test]
    fn test_relationship_info_lookup() {
        let info = relationship_info(RelationshipType::Composition);
        assert_eq!(info.name, "Composition");
        assert_eq!(info.strength, 5);
        assert!(info.directional);

        let association = relationship_info(RelationshipType::Association);
        assert!(!association.directional);
        assert_eq!(association.category, RelationshipCategory::Structural);
    }
}
