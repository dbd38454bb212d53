//! Terminal rendering of load summaries and validation reports.

use colored::Colorize;

use crate::loader::{ArchitectureReport, SkippedFile};
use crate::model::{Architecture, RelationshipCategory};
use crate::validation::ValidationError;

/// Multi-section summary of a loaded architecture.
pub fn format_load_summary(architecture: &Architecture, skipped: &[SkippedFile]) -> String {
    let business = &architecture.business_layer;
    let application = &architecture.application_layer;
    let technology = &architecture.technology_layer;

    let mut output = vec![
        format!("{} ({})", architecture.name.bold(), architecture.uid),
        format!("version: {}", architecture.version),
        String::new(),
        format!(
            "Business layer: {} domains, {} capabilities, {} actors, {} processes, {} services",
            business.domains.len(),
            business.capabilities.len(),
            business.actors.len(),
            business.processes.len(),
            business.services.len()
        ),
        format!(
            "Application layer: {} applications, {} components, {} services, {} interfaces",
            application.applications.len(),
            application.components.len(),
            application.services.len(),
            application.interfaces.len()
        ),
        format!(
            "Technology layer: {} nodes, {} services, {} artifacts, {} interfaces, {} system software",
            technology.nodes.len(),
            technology.services.len(),
            technology.artifacts.len(),
            technology.interfaces.len(),
            technology.system_software.len()
        ),
        String::new(),
        format!(
            "{} elements, {} relationships",
            architecture.element_count(),
            architecture.relationships.len()
        ),
    ];

    if let Some(sources) = architecture.metadata.get("sources") {
        output.push(format!("sources: {}", sources.dimmed()));
    }

    if !skipped.is_empty() {
        output.push(String::new());
        output.push(format!("Skipped ({})", skipped.len()).yellow().to_string());
        for file in skipped {
            output.push(format!("  {}: {}", file.path.display(), file.reason).yellow().to_string());
        }
    }

    output.join("\n")
}

/// Render a full validation report.
pub fn format_validation_report(report: &ArchitectureReport) -> String {
    let mut output = Vec::new();

    if report.is_valid() {
        output.push("VALID".green().bold().to_string());
    } else {
        output.push("INVALID".red().bold().to_string());
    }
    output.push(String::new());

    let errors: Vec<&ValidationError> = report
        .architecture_result
        .errors
        .iter()
        .chain(&report.relationship_result.errors)
        .collect();

    if errors.is_empty() {
        output.push("  (no findings)".dimmed().to_string());
    } else {
        output.push(format!("Findings ({})", errors.len()).bold().to_string());
        for error in errors {
            let mut line = format!("  {} {}", error.code.red(), error.message);
            if let Some(field) = &error.field {
                line.push_str(&format!(" [{field}]"));
            }
            output.push(line);
        }
    }

    output.push(String::new());
    output.push("Relationships by category".bold().to_string());
    for category in [
        RelationshipCategory::Structural,
        RelationshipCategory::Dynamic,
        RelationshipCategory::Dependency,
        RelationshipCategory::Other,
    ] {
        let count = report.relationship_counts.get(&category).copied().unwrap_or(0);
        output.push(format!("  {category:?}: {count}"));
    }

    output.join("\n")
}

/// Machine-readable variant of the validation report.
pub fn validation_report_json(report: &ArchitectureReport) -> serde_json::Value {
    let counts: serde_json::Map<String, serde_json::Value> = report
        .relationship_counts
        .iter()
        .map(|(category, count)| {
            (
                format!("{category:?}").to_lowercase(),
                serde_json::Value::from(*count),
            )
        })
        .collect();

    serde_json::json!({
        "isValid": report.is_valid(),
        "architecture": report.architecture_result,
        "relationships": report.relationship_result,
        "relationshipCounts": counts,
    })
}

/// One line per element of the requested layer.
pub fn format_layer_listing(architecture: &Architecture, layer: &str) -> String {
    let mut lines: Vec<(String, String, &str)> = Vec::new();

    match layer {
        "business" => {
            let l = &architecture.business_layer;
            lines.extend(l.domains.iter().map(|e| (e.uid.clone(), e.name.clone(), "domain")));
            lines.extend(l.capabilities.iter().map(|e| (e.uid.clone(), e.name.clone(), "capability")));
            lines.extend(l.actors.iter().map(|e| (e.uid.clone(), e.name.clone(), "actor")));
            lines.extend(l.processes.iter().map(|e| (e.uid.clone(), e.name.clone(), "process")));
            lines.extend(l.services.iter().map(|e| (e.uid.clone(), e.name.clone(), "service")));
        }
        "application" => {
            let l = &architecture.application_layer;
            lines.extend(l.applications.iter().map(|e| (e.uid.clone(), e.name.clone(), "application")));
            lines.extend(l.components.iter().map(|e| (e.uid.clone(), e.name.clone(), "component")));
            lines.extend(l.services.iter().map(|e| (e.uid.clone(), e.name.clone(), "service")));
            lines.extend(l.interfaces.iter().map(|e| (e.uid.clone(), e.name.clone(), "interface")));
        }
        _ => {
            let l = &architecture.technology_layer;
            lines.extend(l.nodes.iter().map(|e| (e.uid.clone(), e.name.clone(), "node")));
            lines.extend(l.services.iter().map(|e| (e.uid.clone(), e.name.clone(), "service")));
            lines.extend(l.artifacts.iter().map(|e| (e.uid.clone(), e.name.clone(), "artifact")));
            lines.extend(l.interfaces.iter().map(|e| (e.uid.clone(), e.name.clone(), "interface")));
            lines.extend(l.system_software.iter().map(|e| (e.uid.clone(), e.name.clone(), "system software")));
        }
    }

    if lines.is_empty() {
        return "  (no elements)".dimmed().to_string();
    }

    lines
        .iter()
        .map(|(uid, name, kind)| format!("  {} {} {}", uid.bold(), name, format!("({kind})").dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::validate_loaded;
    use crate::mapper::map_to_architecture;
    use crate::parser::parse_document;

    fn sample() -> Architecture {
        map_to_architecture(&parse_document(
            r#"
module sample

d: BusinessDomain = new {
 uid = "dom-1"
 name = "Sales"
}
r: Relationship = new {
 uid = "rel-1"
 relationshipType = "flow"
 source = "a"
 target = "b"
}
"#,
            "sample.pkl",
        ))
    }

    #[test]
    fn test_load_summary_counts() {
        colored::control::set_override(false);
        let summary = format_load_summary(&sample(), &[]);
        assert!(summary.contains("1 elements, 1 relationships"));
        assert!(summary.contains("1 domains"));
    }

    #[test]
    fn test_validation_report_lists_findings() {
        colored::control::set_override(false);
        let architecture = sample();
        let report = validate_loaded(&architecture);
        let rendered = format_validation_report(&report);
        assert!(rendered.contains("INVALID"));
        assert!(rendered.contains("REL_001"));
        assert!(rendered.contains("Dynamic: 1"));
    }

    #[test]
    fn test_validation_report_json_shape() {
        let architecture = sample();
        let report = validate_loaded(&architecture);
        let json = validation_report_json(&report);
        assert_eq!(json["isValid"], false);
        assert_eq!(json["relationshipCounts"]["dynamic"], 1);
        assert_eq!(json["relationships"]["errors"][0]["code"], "REL_001");
    }

    #[test]
    fn test_layer_listing() {
        colored::control::set_override(false);
        let listing = format_layer_listing(&sample(), "business");
        assert!(listing.contains("dom-1"));
        assert!(listing.contains("Sales"));
        assert!(format_layer_listing(&sample(), "technology").contains("no elements"));
    }
}
