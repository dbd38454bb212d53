//! Model file discovery and loading.
//!
//! A models directory holds one subdirectory per layer (`business/`,
//! `application/`, `technology/`), each a flat set of `.pkl` files. The
//! layout is advisory: nothing stops a business file from declaring
//! technology elements, and the mapper classifies by declared type alone.
//!
//! Loading is isolate-and-continue: a file that cannot be read is recorded
//! as skipped and never aborts its siblings.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

use crate::mapper::merge_documents;
use crate::model::{Architecture, RelationshipCategory};
use crate::parser::{parse_document, Document};
use crate::validation::{
    category_counts, validate_relationships, ValidationError, ValidationResult,
};

pub const BUSINESS_DIR: &str = "business";
pub const APPLICATION_DIR: &str = "application";
pub const TECHNOLOGY_DIR: &str = "technology";

/// A model file that could not be loaded, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The parsed documents of one models directory, prior to merging.
#[derive(Debug, Clone, Default)]
pub struct LoadedModels {
    pub business: Vec<Document>,
    pub application: Vec<Document>,
    pub technology: Vec<Document>,
    pub skipped: Vec<SkippedFile>,
}

impl LoadedModels {
    pub fn document_count(&self) -> usize {
        self.business.len() + self.application.len() + self.technology.len()
    }
}

/// The outcome of loading and merging one models directory.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub architecture: Architecture,
    pub skipped: Vec<SkippedFile>,
}

/// Parse every model file under the three layer subdirectories of `dir`.
/// Missing subdirectories yield no documents; unreadable files are skipped.
pub fn load_models_dir(dir: &Path) -> Result<LoadedModels> {
    let mut models = LoadedModels::default();

    models.business = load_layer_dir(dir, BUSINESS_DIR, &mut models.skipped)?;
    models.application = load_layer_dir(dir, APPLICATION_DIR, &mut models.skipped)?;
    models.technology = load_layer_dir(dir, TECHNOLOGY_DIR, &mut models.skipped)?;

    Ok(models)
}

/// Load a models directory and merge everything into one architecture.
pub fn load_architecture(dir: &Path) -> Result<LoadOutcome> {
    let models = load_models_dir(dir)?;
    let architecture = merge_documents(&models.business, &models.application, &models.technology);

    Ok(LoadOutcome {
        architecture,
        skipped: models.skipped,
    })
}

fn load_layer_dir(
    dir: &Path,
    layer: &str,
    skipped: &mut Vec<SkippedFile>,
) -> Result<Vec<Document>> {
    let pattern = dir.join(layer).join("*.pkl");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Models path is not valid UTF-8: {}", dir.display()))?;

    let mut documents = Vec::new();
    for entry in glob(pattern).context("Invalid model file pattern")? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                skipped.push(SkippedFile {
                    path: e.path().to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                documents.push(parse_document(&content, &filename));
            }
            Err(e) => skipped.push(SkippedFile {
                path,
                reason: e.to_string(),
            }),
        }
    }

    Ok(documents)
}

/// Basic aggregate-level checks, applied before an architecture is stored.
pub fn validate_architecture(architecture: &Architecture) -> ValidationResult {
    let mut errors = Vec::new();

    if architecture.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "ARCH_001",
            "Architecture name cannot be blank",
            Some("name"),
        ));
    }
    if architecture.version.trim().is_empty() {
        errors.push(ValidationError::new(
            "ARCH_002",
            "Architecture version cannot be blank",
            Some("version"),
        ));
    }

    ValidationResult::from_errors(errors)
}

/// Full validation report for one architecture: aggregate checks plus the
/// relationship rules, with per-category relationship counts.
#[derive(Debug, Clone)]
pub struct ArchitectureReport {
    pub architecture_result: ValidationResult,
    pub relationship_result: ValidationResult,
    pub relationship_counts: BTreeMap<RelationshipCategory, usize>,
}

impl ArchitectureReport {
    pub fn is_valid(&self) -> bool {
        self.architecture_result.is_valid && self.relationship_result.is_valid
    }
}

pub fn validate_loaded(architecture: &Architecture) -> ArchitectureReport {
    ArchitectureReport {
        architecture_result: validate_architecture(architecture),
        relationship_result: validate_relationships(&architecture.relationships),
        relationship_counts: category_counts(&architecture.relationships),
    }
}
