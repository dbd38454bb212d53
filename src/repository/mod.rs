//! Storage abstraction for loaded architectures.

mod in_memory;

pub use in_memory::InMemoryArchitectureRepository;

use anyhow::Result;

use crate::model::Architecture;

/// Keyed storage of architecture aggregates. Implementations store whole
/// aggregates only; there is no partial update — saving an existing uid
/// replaces the previous instance.
pub trait ArchitectureRepository {
    fn save(&self, architecture: Architecture) -> Result<Architecture>;

    fn find_by_uid(&self, uid: &str) -> Result<Option<Architecture>>;

    fn find_all(&self) -> Result<Vec<Architecture>>;

    fn delete(&self, uid: &str) -> Result<bool>;

    fn exists(&self, uid: &str) -> Result<bool>;
}
