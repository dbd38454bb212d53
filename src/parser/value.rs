//! Literal value classification.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

/// A parsed literal value. Model files carry only these shapes; anything the
/// classifier does not recognize stays a verbatim string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Decimal(f64),
    Map(BTreeMap<String, String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// Classify one trimmed literal fragment (the right-hand side of a
/// `key = value` pair, trailing comma already stripped).
///
/// Always produces a value; unrecognized shapes pass through verbatim as
/// strings. An unquoted token containing a dot is a cross-reference to
/// another object (`BA.customer`) and is kept as-is — reference resolution
/// is out of scope.
pub fn parse_value(raw: &str) -> Value {
    let int_re = Regex::new(r"^\d+$").unwrap();
    let decimal_re = Regex::new(r"^\d*\.\d+$").unwrap();

    if raw.starts_with('"') && raw.ends_with('"') && raw.len() >= 2 {
        return Value::Str(raw[1..raw.len() - 1].to_string());
    }
    if raw == "true" || raw == "false" {
        return Value::Bool(raw == "true");
    }
    if int_re.is_match(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
    }
    if decimal_re.is_match(raw) {
        if let Ok(d) = raw.parse::<f64>() {
            return Value::Decimal(d);
        }
    }
    if raw.starts_with("Map(") {
        return Value::Map(parse_map_literal(raw));
    }
    // Reference token or plain word, either way a verbatim string
    Value::Str(raw.to_string())
}

/// Parse `Map("k1", "v1", "k2", "v2")` into a string map. The list is read
/// as alternating key/value entries; an odd trailing entry is dropped.
fn parse_map_literal(raw: &str) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();

    let inner = raw.strip_prefix("Map(").unwrap_or(raw);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let mut i = 0;
    while i + 1 < parts.len() {
        let key = parts[i].trim_matches('"');
        let value = parts[i + 1].trim_matches('"');
        result.insert(key.to_string(), value.to_string());
        i += 2;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_string_strips_quotes() {
        assert_eq!(parse_value("\"hello\""), Value::Str("hello".to_string()));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("false"), Value::Bool(false));
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse_value("42"), Value::Int(42));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_value("3.14"), Value::Decimal(3.14));
        assert_eq!(parse_value(".5"), Value::Decimal(0.5));
    }

    #[test]
    fn test_map_literal() {
        let value = parse_value(r#"Map("a", "1", "b", "2")"#);
        let map = value.as_map().expect("expected a map");
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("b").map(String::as_str), Some("2"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_map_literal_odd_entry_dropped() {
        let value = parse_value(r#"Map("a", "1", "orphan")"#);
        let map = value.as_map().expect("expected a map");
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("orphan"));
    }

    #[test]
    fn test_reference_token_passes_through() {
        assert_eq!(parse_value("BA.customer"), Value::Str("BA.customer".to_string()));
    }

    #[test]
    fn test_unrecognized_shape_degrades_to_string() {
        assert_eq!(parse_value("List(1, 2)"), Value::Str("List(1, 2)".to_string()));
        assert_eq!(parse_value("12abc"), Value::Str("12abc".to_string()));
    }

    #[test]
    fn test_bare_quote_is_not_a_string_pair() {
        // A single quote character is not a quoted literal
        assert_eq!(parse_value("\""), Value::Str("\"".to_string()));
    }
}
