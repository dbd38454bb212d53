use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{anyhow, Result};

use crate::model::Architecture;

use super::ArchitectureRepository;

/// In-memory implementation of [`ArchitectureRepository`], keyed by
/// architecture uid. Interior mutability behind an `RwLock` so one instance
/// can be shared across threads.
#[derive(Default)]
pub struct InMemoryArchitectureRepository {
    architectures: RwLock<HashMap<String, Architecture>>,
}

impl InMemoryArchitectureRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArchitectureRepository for InMemoryArchitectureRepository {
    fn save(&self, architecture: Architecture) -> Result<Architecture> {
        let mut map = self
            .architectures
            .write()
            .map_err(|_| anyhow!("architecture store lock poisoned"))?;
        map.insert(architecture.uid.clone(), architecture.clone());
        Ok(architecture)
    }

    fn find_by_uid(&self, uid: &str) -> Result<Option<Architecture>> {
        let map = self
            .architectures
            .read()
            .map_err(|_| anyhow!("architecture store lock poisoned"))?;
        Ok(map.get(uid).cloned())
    }

    fn find_all(&self) -> Result<Vec<Architecture>> {
        let map = self
            .architectures
            .read()
            .map_err(|_| anyhow!("architecture store lock poisoned"))?;
        Ok(map.values().cloned().collect())
    }

    fn delete(&self, uid: &str) -> Result<bool> {
        let mut map = self
            .architectures
            .write()
            .map_err(|_| anyhow!("architecture store lock poisoned"))?;
        Ok(map.remove(uid).is_some())
    }

    fn exists(&self, uid: &str) -> Result<bool> {
        let map = self
            .architectures
            .read()
            .map_err(|_| anyhow!("architecture store lock poisoned"))?;
        Ok(map.contains_key(uid))
    }
}
