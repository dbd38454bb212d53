//! Tolerant parser for the Pkl-style model file subset.
//!
//! The parser recognizes a constrained subset of object-literal declarations,
//! enough to describe architecture elements and relationships. It is not a
//! Pkl evaluator: no expressions, imports, type-checking or templating. The
//! scan is regex-based and fails open throughout; malformed fragments degrade
//! to string values or are skipped, they never abort a file.
//!
//! - [`value`] classifies single literal fragments.
//! - [`record`] extracts `key = value` fields from one declaration body.
//! - [`document`] scans a full file for declarations.

pub mod document;
pub mod record;
pub mod value;

pub use document::{parse_document, Document};
pub use record::{parse_record_body, Record};
pub use value::{parse_value, Value};
