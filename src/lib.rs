//! # Stratum - Architecture Models as Code
//!
//! Stratum loads enterprise-architecture models written in a constrained
//! Pkl-style object syntax, merges them into one typed three-layer model and
//! validates the relationship graph against ArchiMate-style structural rules.
//!
//! ## Pipeline
//!
//! Model files → [`parser`] (one document per file) → [`mapper`] (merge into
//! one [`model::Architecture`]) → [`validation`] over the relationship list.
//! Parsing and mapping are tolerant by design: malformed literals degrade to
//! strings, unknown enum tokens fall back to defaults and records without a
//! uid are dropped, so a model directory always loads.
//!
//! ## Modules
//!
//! - [`parser`] - Value, record and document parsing for the model syntax
//! - [`model`] - Typed element, layer and relationship model
//! - [`mapper`] - Record classification and document merging
//! - [`validation`] - Relationship well-formedness, conflict and cycle rules
//! - [`loader`] - Model directory discovery and architecture-level checks
//! - [`repository`] - Keyed storage of loaded architectures
//! - [`formatters`] - Terminal and JSON report rendering
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use stratum::loader;
//! use stratum::validation::validate_relationships;
//!
//! let outcome = loader::load_architecture(Path::new("models")).expect("load failed");
//! let result = validate_relationships(&outcome.architecture.relationships);
//! if !result.is_valid {
//!     for error in &result.errors {
//!         eprintln!("{}: {}", error.code, error.message);
//!     }
//! }
//! ```

pub mod formatters;
pub mod loader;
pub mod mapper;
pub mod model;
pub mod parser;
pub mod repository;
pub mod validation;
