//! End-to-end tests: write model directories to disk, load, merge, validate.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use stratum::loader::{self, BUSINESS_DIR, APPLICATION_DIR, TECHNOLOGY_DIR};
use stratum::model::{ApplicationStereoType, RelationshipCategory};
use stratum::repository::{ArchitectureRepository, InMemoryArchitectureRepository};

fn write_model(root: &Path, layer: &str, name: &str, content: &str) {
    let dir = root.join(layer);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn sample_models() -> TempDir {
    let tmp = TempDir::new().unwrap();

    write_model(
        tmp.path(),
        BUSINESS_DIR,
        "sales.pkl",
        r#"
module sales

salesDomain: BusinessDomain = new {
  uid = "dom-sales"
  name = "Sales"
  description = "Everything revenue"
}

accountManager: BusinessActor = new {
  uid = "actor-am"
  name = "Account Manager"
  actorType = "internal"
}

orderToCash: BusinessProcess = new {
  uid = "proc-o2c"
  name = "Order to Cash"
  processType = "core"
  inputs = "order, credit check"
}
"#,
    );

    write_model(
        tmp.path(),
        APPLICATION_DIR,
        "crm.pkl",
        r#"
module crm

crmApp: Application = new {
  uid = "app-crm"
  name = "CRM"
  stereoType = "business_application"
  lifecycle = "active"
  metadata = Map("owner", "sales-it", "criticality", "high")
}

crmApi: ApplicationInterface = new {
  uid = "if-crm-api"
  name = "CRM REST API"
  interfaceType = "api"
}

crmServesSales: Relationship = new {
  uid = "rel-crm-sales"
  relationshipType = "serving"
  source = "app-crm"
  target = "dom-sales"
}
"#,
    );

    write_model(
        tmp.path(),
        TECHNOLOGY_DIR,
        "infra.pkl",
        r#"
module infra

appServer: TechnologyNode = new {
  uid = "node-app-1"
  name = "Application Server"
  nodeType = "server"
}

crmRunsOn: Relationship = new {
  uid = "rel-crm-node"
  relationshipType = "assignment"
  source = "node-app-1"
  target = "app-crm"
}
"#,
    );

    tmp
}

#[test]
fn test_full_pipeline_loads_and_merges() {
    let tmp = sample_models();
    let outcome = loader::load_architecture(tmp.path()).unwrap();
    let architecture = &outcome.architecture;

    assert!(outcome.skipped.is_empty());
    assert_eq!(architecture.uid, "merged-architecture");
    assert_eq!(architecture.business_layer.domains.len(), 1);
    assert_eq!(architecture.business_layer.actors.len(), 1);
    assert_eq!(architecture.business_layer.processes.len(), 1);
    assert_eq!(architecture.application_layer.applications.len(), 1);
    assert_eq!(architecture.application_layer.interfaces.len(), 1);
    assert_eq!(architecture.technology_layer.nodes.len(), 1);
    assert_eq!(architecture.relationships.len(), 2);

    let application = &architecture.application_layer.applications[0];
    assert_eq!(application.stereo_type, ApplicationStereoType::BusinessApplication);
    assert_eq!(application.metadata.get("owner").map(String::as_str), Some("sales-it"));

    let process = &architecture.business_layer.processes[0];
    assert_eq!(process.inputs, vec!["order", "credit check"]);

    let sources = architecture.metadata.get("sources").unwrap();
    assert!(sources.contains("sales.pkl"));
    assert!(sources.contains("crm.pkl"));
    assert!(sources.contains("infra.pkl"));
}

#[test]
fn test_full_pipeline_validation_is_clean() {
    let tmp = sample_models();
    let outcome = loader::load_architecture(tmp.path()).unwrap();
    let report = loader::validate_loaded(&outcome.architecture);

    assert!(report.is_valid(), "unexpected findings: {:?}", report);
    assert_eq!(
        report.relationship_counts.get(&RelationshipCategory::Structural),
        Some(&1)
    );
    assert_eq!(
        report.relationship_counts.get(&RelationshipCategory::Dependency),
        Some(&1)
    );
}

#[test]
fn test_structural_cycle_detected_across_files() {
    let tmp = sample_models();
    write_model(
        tmp.path(),
        TECHNOLOGY_DIR,
        "cycle.pkl",
        r#"
module cycle

a: Relationship = new {
  uid = "rel-cyc-1"
  relationshipType = "composition"
  source = "x"
  target = "y"
}
b: Relationship = new {
  uid = "rel-cyc-2"
  relationshipType = "composition"
  source = "y"
  target = "x"
}
"#,
    );

    let outcome = loader::load_architecture(tmp.path()).unwrap();
    let report = loader::validate_loaded(&outcome.architecture);

    assert!(!report.is_valid());
    assert!(report
        .relationship_result
        .errors
        .iter()
        .any(|e| e.code == "REL_005"));
}

#[test]
fn test_malformed_fragments_degrade_not_abort() {
    let tmp = TempDir::new().unwrap();
    write_model(
        tmp.path(),
        BUSINESS_DIR,
        "messy.pkl",
        r#"
module messy

// a declaration with junk inside
d: BusinessDomain = new {
  uid = "dom-1"
  this line is not a field
  name = "Still parsed"
}

noUid: BusinessDomain = new {
  name = "Dropped silently"
}
"#,
    );

    let outcome = loader::load_architecture(tmp.path()).unwrap();
    let domains = &outcome.architecture.business_layer.domains;
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].name, "Still parsed");
}

#[test]
fn test_loaded_architecture_round_trips_through_repository() {
    let tmp = sample_models();
    let outcome = loader::load_architecture(tmp.path()).unwrap();

    let repository = InMemoryArchitectureRepository::new();
    let saved = repository.save(outcome.architecture).unwrap();
    let found = repository.find_by_uid(&saved.uid).unwrap().unwrap();

    assert_eq!(found, saved);
    assert_eq!(found.element_count(), 6);
}
