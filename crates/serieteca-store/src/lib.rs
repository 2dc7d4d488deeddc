#![forbid(unsafe_code)]
//! Record store for the series catalog.
//!
//! Owns the process-local ordered collection of [`Serie`] records, assigns
//! sequential identifiers, and performs id-addressed lookups. Handlers only
//! see the [`SerieStore`] trait, so a persistence-backed implementation can
//! be swapped in without touching callers.

use async_trait::async_trait;
use serieteca_model::{Serie, SeriePatch};
use tokio::sync::Mutex;

pub const CRATE_NAME: &str = "serieteca-store";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound { id: u64 },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "no serie with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Capability seam over the catalog collection: list, create, find, update,
/// delete. Identifiers are store-assigned and unique among stored records.
#[async_trait]
pub trait SerieStore: Send + Sync + 'static {
    /// Full ordered snapshot of the collection. No side effects.
    async fn list(&self) -> Vec<Serie>;

    /// Assigns the next identifier (any client-supplied id is discarded),
    /// appends the record, and returns it as stored.
    async fn create(&self, candidate: Serie) -> Serie;

    /// Linear scan by id. No side effects.
    async fn find_by_id(&self, id: u64) -> Option<Serie>;

    /// Overwrites exactly the non-null patch fields on the stored record.
    async fn update(&self, id: u64, patch: SeriePatch) -> Result<Serie, StoreError>;

    /// Removes the record with that id.
    async fn delete(&self, id: u64) -> Result<(), StoreError>;
}

/// In-memory store. Every operation takes the lock once and holds it
/// end-to-end: the server dispatches requests concurrently, and the
/// read-modify-write sequences in `create`, `update` and `delete` must be
/// mutually exclusive for the id-uniqueness invariant to hold.
#[derive(Default)]
pub struct InMemorySerieStore {
    entries: Mutex<Vec<Serie>>,
}

impl InMemorySerieStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 on an empty collection, otherwise `max(existing ids) + 1`.
    ///
    /// Recomputed from current contents rather than kept as a monotonic
    /// counter, so deleting the highest record makes its id reusable. The
    /// delete-then-create-restarts-at-1 behavior is part of the store's
    /// contract (see the contract tests).
    fn next_id(entries: &[Serie]) -> u64 {
        entries
            .iter()
            .filter_map(|serie| serie.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

#[async_trait]
impl SerieStore for InMemorySerieStore {
    async fn list(&self) -> Vec<Serie> {
        self.entries.lock().await.clone()
    }

    async fn create(&self, candidate: Serie) -> Serie {
        let mut entries = self.entries.lock().await;
        let stored = Serie {
            id: Some(Self::next_id(&entries)),
            ..candidate
        };
        entries.push(stored.clone());
        stored
    }

    async fn find_by_id(&self, id: u64) -> Option<Serie> {
        self.entries
            .lock()
            .await
            .iter()
            .find(|serie| serie.id == Some(id))
            .cloned()
    }

    async fn update(&self, id: u64, patch: SeriePatch) -> Result<Serie, StoreError> {
        let mut entries = self.entries.lock().await;
        let serie = entries
            .iter_mut()
            .find(|serie| serie.id == Some(id))
            .ok_or(StoreError::NotFound { id })?;
        serie.apply(&patch);
        Ok(serie.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        let position = entries
            .iter()
            .position(|serie| serie.id == Some(id))
            .ok_or(StoreError::NotFound { id })?;
        entries.remove(position);
        Ok(())
    }
}
