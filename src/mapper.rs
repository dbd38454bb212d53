//! Classification of generic records into the typed architecture model.
//!
//! The mapper is deliberately tolerant: a record missing its `uid` is
//! dropped, an unrecognized enum token coerces to the kind's default, and a
//! declared type with no matching kind is ignored. Loading keeps going past
//! malformed fragments; the rest of the system depends on that.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::model::{
    AccessType, Application, ApplicationComponent, ApplicationComponentType, ApplicationInterface,
    ApplicationInterfaceType, ApplicationLayer, ApplicationLifecycle, ApplicationService,
    ApplicationStereoType, Architecture, Artifact, ArtifactType, BusinessActor, ActorType,
    BusinessCapability, BusinessDomain, BusinessLayer, BusinessProcess, BusinessService, FlowType,
    ProcessType, Relationship, RelationshipType, SystemSoftware, SystemSoftwareType,
    TechnologyInterface, TechnologyLayer, TechnologyNode, TechnologyNodeType, TechnologyService,
    TechnologyServiceCategory,
};
use crate::parser::{Document, Record};

const MODEL_VERSION: &str = "1.0.0";

/// Build one architecture from a single parsed document. Identifier, name
/// and description are synthesized from the module name.
pub fn map_to_architecture(document: &Document) -> Architecture {
    let module = document.module.as_deref().unwrap_or("Unknown");

    let mut metadata = BTreeMap::new();
    metadata.insert("source".to_string(), document.source.clone());

    Architecture {
        uid: format!("arch-{module}"),
        name: format!("{module} Architecture"),
        description: format!("Architecture loaded from module: {module}"),
        version: MODEL_VERSION.to_string(),
        business_layer: extract_business_layer(&document.objects),
        application_layer: extract_application_layer(&document.objects),
        technology_layer: extract_technology_layer(&document.objects),
        relationships: extract_relationships(&document.relationships),
        metadata,
    }
}

/// Merge every supplied document into one architecture.
///
/// The split into three lists mirrors the models directory layout but is
/// advisory only: objects are flattened across all lists and classified by
/// declared type, so a business file may declare technology nodes. The merge
/// is a pure fold and expects the full, final document set.
pub fn merge_documents(
    business: &[Document],
    application: &[Document],
    technology: &[Document],
) -> Architecture {
    let mut objects: Vec<Record> = Vec::new();
    let mut relationships: Vec<Record> = Vec::new();
    let mut sources: Vec<String> = Vec::new();

    for document in business.iter().chain(application).chain(technology) {
        objects.extend(document.objects.iter().cloned());
        relationships.extend(document.relationships.iter().cloned());
        sources.push(document.source.clone());
    }

    let joined_sources = sources.join(", ");

    let mut metadata = BTreeMap::new();
    metadata.insert("sources".to_string(), joined_sources.clone());
    metadata.insert("totalObjects".to_string(), objects.len().to_string());
    metadata.insert(
        "totalRelationships".to_string(),
        relationships.len().to_string(),
    );
    metadata.insert("loadedAt".to_string(), Utc::now().to_rfc3339());

    Architecture {
        uid: "merged-architecture".to_string(),
        name: "Merged Architecture".to_string(),
        description: format!("Architecture merged from models: {joined_sources}"),
        version: MODEL_VERSION.to_string(),
        business_layer: extract_business_layer(&objects),
        application_layer: extract_application_layer(&objects),
        technology_layer: extract_technology_layer(&objects),
        relationships: extract_relationships(&relationships),
        metadata,
    }
}

fn extract_business_layer(objects: &[Record]) -> BusinessLayer {
    let mut layer = BusinessLayer {
        uid: "business-layer".to_string(),
        ..Default::default()
    };

    for record in objects {
        match record.declared_type.as_str() {
            "BusinessDomain" => layer.domains.extend(map_business_domain(record)),
            "BusinessCapability" => layer.capabilities.extend(map_business_capability(record)),
            "BusinessActor" => layer.actors.extend(map_business_actor(record)),
            "BusinessProcess" => layer.processes.extend(map_business_process(record)),
            "BusinessService" => layer.services.extend(map_business_service(record)),
            _ => {}
        }
    }

    layer
}

fn extract_application_layer(objects: &[Record]) -> ApplicationLayer {
    let mut layer = ApplicationLayer {
        uid: "application-layer".to_string(),
        ..Default::default()
    };

    for record in objects {
        match record.declared_type.as_str() {
            "Application" => layer.applications.extend(map_application(record)),
            "ApplicationComponent" => layer.components.extend(map_application_component(record)),
            "ApplicationService" => layer.services.extend(map_application_service(record)),
            "ApplicationInterface" => layer.interfaces.extend(map_application_interface(record)),
            _ => {}
        }
    }

    layer
}

fn extract_technology_layer(objects: &[Record]) -> TechnologyLayer {
    let mut layer = TechnologyLayer {
        uid: "technology-layer".to_string(),
        ..Default::default()
    };

    for record in objects {
        match record.declared_type.as_str() {
            "TechnologyNode" => layer.nodes.extend(map_technology_node(record)),
            "TechnologyService" => layer.services.extend(map_technology_service(record)),
            "Artifact" => layer.artifacts.extend(map_artifact(record)),
            "TechnologyInterface" => layer.interfaces.extend(map_technology_interface(record)),
            "SystemSoftware" => layer.system_software.extend(map_system_software(record)),
            _ => {}
        }
    }

    layer
}

fn extract_relationships(records: &[Record]) -> Vec<Relationship> {
    records.iter().filter_map(map_relationship).collect()
}

// The uid is the one required field everywhere: without it the record is
// dropped entirely, with no error surfaced.
fn required_uid(record: &Record) -> Option<String> {
    record.get_str("uid").map(str::to_string)
}

fn display_name(record: &Record) -> String {
    record.get_str("name").unwrap_or_default().to_string()
}

fn optional_str(record: &Record, key: &str) -> Option<String> {
    record.get_str(key).map(str::to_string)
}

// Business layer

fn map_business_domain(record: &Record) -> Option<BusinessDomain> {
    Some(BusinessDomain {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
    })
}

fn map_business_capability(record: &Record) -> Option<BusinessCapability> {
    Some(BusinessCapability {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        level: record.get_int("level"),
        parent_capability: optional_str(record, "parentCapability"),
    })
}

fn map_business_actor(record: &Record) -> Option<BusinessActor> {
    let actor_type = record
        .get_str("actorType")
        .and_then(ActorType::parse)
        .unwrap_or_default();

    Some(BusinessActor {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        actor_type,
    })
}

fn map_business_process(record: &Record) -> Option<BusinessProcess> {
    let process_type = record
        .get_str("processType")
        .and_then(ProcessType::parse)
        .unwrap_or_default();

    Some(BusinessProcess {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        process_type,
        owner: optional_str(record, "owner"),
        inputs: record.get_string_list("inputs"),
        outputs: record.get_string_list("outputs"),
    })
}

fn map_business_service(record: &Record) -> Option<BusinessService> {
    Some(BusinessService {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        service_level: optional_str(record, "serviceLevel"),
        availability: optional_str(record, "availability"),
    })
}

// Application layer

fn map_application(record: &Record) -> Option<Application> {
    let stereo_type = record
        .get_str("stereoType")
        .and_then(ApplicationStereoType::parse)
        .unwrap_or_default();
    let lifecycle = record
        .get_str("lifecycle")
        .and_then(ApplicationLifecycle::parse)
        .unwrap_or_default();

    Some(Application {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        stereo_type,
        metadata: record.get_string_map("metadata"),
        vendor: optional_str(record, "vendor"),
        lifecycle,
    })
}

fn map_application_component(record: &Record) -> Option<ApplicationComponent> {
    let component_type = record
        .get_str("componentType")
        .and_then(ApplicationComponentType::parse)
        .unwrap_or_default();

    Some(ApplicationComponent {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        component_type,
        technology: optional_str(record, "technology"),
    })
}

fn map_application_service(record: &Record) -> Option<ApplicationService> {
    Some(ApplicationService {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
    })
}

fn map_application_interface(record: &Record) -> Option<ApplicationInterface> {
    let interface_type = record
        .get_str("interfaceType")
        .and_then(ApplicationInterfaceType::parse)
        .unwrap_or_default();

    Some(ApplicationInterface {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        interface_type,
        format: optional_str(record, "format"),
    })
}

// Technology layer

fn map_technology_node(record: &Record) -> Option<TechnologyNode> {
    let node_type = record
        .get_str("nodeType")
        .and_then(TechnologyNodeType::parse)
        .unwrap_or_default();

    Some(TechnologyNode {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        node_type,
        location: optional_str(record, "location"),
        capacity: optional_str(record, "capacity"),
        operating_system: optional_str(record, "operatingSystem"),
    })
}

fn map_technology_service(record: &Record) -> Option<TechnologyService> {
    let service_category = record
        .get_str("serviceCategory")
        .and_then(TechnologyServiceCategory::parse)
        .unwrap_or_default();

    Some(TechnologyService {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        service_category,
        provider: optional_str(record, "provider"),
    })
}

fn map_artifact(record: &Record) -> Option<Artifact> {
    let artifact_type = record
        .get_str("artifactType")
        .and_then(ArtifactType::parse)
        .unwrap_or_default();

    Some(Artifact {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        artifact_type,
        format: optional_str(record, "format"),
        size: optional_str(record, "size"),
    })
}

fn map_technology_interface(record: &Record) -> Option<TechnologyInterface> {
    Some(TechnologyInterface {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        protocol: optional_str(record, "protocol"),
        port: record.get_int("port"),
    })
}

fn map_system_software(record: &Record) -> Option<SystemSoftware> {
    let software_type = record
        .get_str("softwareType")
        .and_then(SystemSoftwareType::parse)
        .unwrap_or_default();

    Some(SystemSoftware {
        uid: required_uid(record)?,
        name: display_name(record),
        description: optional_str(record, "description"),
        documentation: optional_str(record, "documentation"),
        properties: record.get_string_map("properties"),
        software_type,
        vendor: optional_str(record, "vendor"),
        version: optional_str(record, "version"),
    })
}

// Relationships

fn map_relationship(record: &Record) -> Option<Relationship> {
    let relationship_type = record
        .get_str("relationshipType")
        .or_else(|| record.get_str("type"))
        .and_then(RelationshipType::parse)
        .unwrap_or_default();

    // Present-but-unrecognized discriminants coerce to the conventional
    // default, same policy as every other enum field; absence stays None so
    // validation can flag it.
    let flow_type = record
        .get_str("flowType")
        .map(|raw| FlowType::parse(raw).unwrap_or_default());
    let access_type = record
        .get_str("accessType")
        .map(|raw| AccessType::parse(raw).unwrap_or_default());

    Some(Relationship {
        uid: required_uid(record)?,
        relationship_type,
        description: optional_str(record, "description"),
        source: record.get_str("source").unwrap_or("unknown").to_string(),
        target: record.get_str("target").unwrap_or("unknown").to_string(),
        properties: record.get_string_map("properties"),
        flow_type,
        access_type,
    })
}
