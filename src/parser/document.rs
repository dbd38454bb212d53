//! Whole-file declaration scanning.

use regex::Regex;

use super::record::{parse_record_body, Record};

/// One parsed model file: every declaration found in it, with relationships
/// additionally partitioned out for validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Module name from the `module <name>` header, when present.
    pub module: Option<String>,
    /// Source filename, kept for provenance metadata.
    pub source: String,
    /// Every declaration in the file, relationships included.
    pub objects: Vec<Record>,
    /// The subset of `objects` whose declared type is `Relationship`.
    pub relationships: Vec<Record>,
}

/// Scan one file's text for `module` and object declarations.
///
/// Two declaration shapes are recognized and scanned independently:
/// `local name: Type = new { ... }` and the same without `local`. The scans
/// are concatenated, so a `local` declaration — whose tail also satisfies
/// the top-level pattern — is captured twice. Model files in the wild use
/// the top-level form.
pub fn parse_document(content: &str, filename: &str) -> Document {
    let module_re = Regex::new(r"module\s+(\w+)").unwrap();
    let local_re = Regex::new(r"local\s+(\w+):\s*(\w+)\s*=\s*new\s*\{([^}]+)\}").unwrap();
    let top_level_re = Regex::new(r"(\w+):\s*(\w+)\s*=\s*new\s*\{([^}]+)\}").unwrap();

    let module = module_re
        .captures(content)
        .map(|caps| caps[1].to_string());

    let mut objects = Vec::new();
    for re in [&local_re, &top_level_re] {
        for caps in re.captures_iter(content) {
            let fields = parse_record_body(&caps[3]);
            objects.push(Record::new(&caps[1], &caps[2], fields));
        }
    }

    let relationships = objects
        .iter()
        .filter(|record| record.declared_type == "Relationship")
        .cloned()
        .collect();

    Document {
        module,
        source: filename.to_string(),
        objects,
        relationships,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
module crm

crmApp: Application = new {
  uid = "app-crm"
  name = "CRM"
  stereoType = "business_application"
}

crmServes: Relationship = new {
  uid = "rel-1"
  relationshipType = "serving"
  source = "app-crm"
  target = "cap-sales"
}
"#;

    #[test]
    fn test_module_name_extracted() {
        let doc = parse_document(SAMPLE, "crm.pkl");
        assert_eq!(doc.module.as_deref(), Some("crm"));
        assert_eq!(doc.source, "crm.pkl");
    }

    #[test]
    fn test_missing_module_tolerated() {
        let doc = parse_document("a: Application = new {\n uid = \"x\"\n}", "x.pkl");
        assert_eq!(doc.module, None);
        assert_eq!(doc.objects.len(), 1);
    }

    #[test]
    fn test_declarations_scanned_with_name_and_type() {
        let doc = parse_document(SAMPLE, "crm.pkl");
        assert_eq!(doc.objects.len(), 2);
        assert_eq!(doc.objects[0].name, "crmApp");
        assert_eq!(doc.objects[0].declared_type, "Application");
        assert_eq!(doc.objects[0].get_str("uid"), Some("app-crm"));
    }

    #[test]
    fn test_relationships_partitioned() {
        let doc = parse_document(SAMPLE, "crm.pkl");
        assert_eq!(doc.relationships.len(), 1);
        assert_eq!(doc.relationships[0].get_str("relationshipType"), Some("serving"));
        // Relationship records stay in the full object list too
        assert!(doc.objects.iter().any(|r| r.declared_type == "Relationship"));
    }

    #[test]
    fn test_local_declaration_captured_by_both_scans() {
        // The top-level pattern also matches inside a `local` declaration,
        // so the record appears twice. Pinned here so a change is deliberate.
        let doc = parse_document("local a: Application = new {\n uid = \"x\"\n}", "x.pkl");
        assert_eq!(doc.objects.len(), 2);
        assert_eq!(doc.objects[0].name, "a");
        assert_eq!(doc.objects[1].name, "a");
    }

    #[test]
    fn test_empty_file_yields_empty_document() {
        let doc = parse_document("", "empty.pkl");
        assert!(doc.objects.is_empty());
        assert!(doc.relationships.is_empty());
    }
}
