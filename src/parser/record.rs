//! Field extraction from one declaration body.

use std::collections::BTreeMap;

use regex::Regex;

use super::value::{parse_value, Value};

/// One parsed declaration: the declared name and type from the source file
/// plus the generic field map. Never persisted; consumed only by the mapper.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Declared name, the identifier left of the colon.
    pub name: String,
    /// Declared type, e.g. `BusinessActor` or `Relationship`.
    pub declared_type: String,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(name: &str, declared_type: &str, fields: BTreeMap<String, Value>) -> Self {
        Self {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            fields,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(Value::as_int)
    }

    /// Coerce a map-typed field to string pairs; any non-map value (or a
    /// missing field) yields an empty map.
    pub fn get_string_map(&self, key: &str) -> BTreeMap<String, String> {
        self.fields
            .get(key)
            .and_then(Value::as_map)
            .cloned()
            .unwrap_or_default()
    }

    /// Read a name list written as a comma-separated string value.
    /// The literal syntax has no list shape, so `inputs = "order, invoice"`
    /// is the conventional spelling.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get_str(key)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Parse the body text between the outermost braces of one declaration.
///
/// Blank lines and `//` comments are skipped; remaining lines must look like
/// `key = value` with one pair per line. One trailing comma is stripped from
/// the value before classification. Lines that do not match are silently
/// ignored.
pub fn parse_record_body(body: &str) -> BTreeMap<String, Value> {
    let field_re = Regex::new(r"^(\w+)\s*=\s*(.+)$").unwrap();
    let mut fields = BTreeMap::new();

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if let Some(caps) = field_re.captures(trimmed) {
            let key = &caps[1];
            let mut value = caps[2].trim();
            if let Some(stripped) = value.strip_suffix(',') {
                value = stripped.trim_end();
            }
            fields.insert(key.to_string(), parse_value(value));
        }
    }

    fields
}
