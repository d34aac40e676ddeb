//! Registry
//!
//! Thread-safe owner of the dual index.
//!
//! ## Responsibilities
//! - Enforce identifier uniqueness on insert
//! - Keep the id and description indexes in lockstep
//! - Serve lookups and ordered listings from a consistent snapshot
//! - Report committed and rejected operations to the observer

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{Result, StowageError};
use crate::observe::{Observation, Observer, TracingObserver};
use crate::record::Record;

use super::DualIndex;

/// In-memory inventory registry
///
/// ## Concurrency:
/// - Both indexes sit behind ONE RwLock, so a reader never sees an
///   insert or remove applied to one index and not the other
/// - All methods use `&self`; share with `Arc<Registry>`
/// - The observer runs after the lock is released
pub struct Registry {
    config: Config,

    /// id index + description index, guarded jointly
    index: RwLock<DualIndex>,

    observer: Arc<dyn Observer>,
}

impl Registry {
    /// Create an empty registry with default config and tracing output
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: Config, observer: Arc<dyn Observer>) -> Self {
        let index = DualIndex::with_config(&config);
        Self {
            config,
            index: RwLock::new(index),
            observer,
        }
    }

    /// Add a record
    ///
    /// Fails with `DuplicateIdentifier` if the id is already stored; the
    /// registry is unchanged in that case.
    pub fn add(&self, record: impl Into<Arc<Record>>) -> Result<()> {
        let record = record.into();
        let result = self.index.write().insert(Arc::clone(&record));

        self.report("add", result)?;
        self.observer.observe(&Observation::Added {
            id: record.id().to_string(),
            description: record.description().to_string(),
        });
        Ok(())
    }

    /// Get the record stored under `id`
    pub fn find_by_id(&self, id: &str) -> Result<Arc<Record>> {
        let result = self
            .index
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StowageError::not_found(id));

        self.report("find", result)
    }

    /// Remove the record stored under `id` from both indexes
    ///
    /// Returns the removed record. Fails with `NotFound` and leaves both
    /// indexes untouched if `id` is absent.
    pub fn remove(&self, id: &str) -> Result<Arc<Record>> {
        let result = self.index.write().remove(id);

        let removed = self.report("remove", result)?;
        self.observer.observe(&Observation::Removed {
            id: removed.id().to_string(),
        });
        Ok(removed)
    }

    /// Snapshot of all records ordered by description, then tie-break
    pub fn list_by_description(&self) -> Vec<Arc<Record>> {
        self.index.read().iter_ordered().cloned().collect()
    }

    /// Ordered `(description, location)` pairs
    pub fn listing(&self) -> Vec<(String, String)> {
        self.index
            .read()
            .iter_ordered()
            .map(|r| (r.description().to_string(), r.location().to_string()))
            .collect()
    }

    /// Records with exactly this description, in tie-break order
    pub fn find_by_description(&self, description: &str) -> Vec<Arc<Record>> {
        self.index.read().bucket(description).cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }

    /// All stored identifiers, ascending
    pub fn ids(&self) -> Vec<String> {
        self.index.read().ids()
    }

    /// Verify that both indexes describe the same record set
    pub fn check_consistency(&self) -> Result<()> {
        self.index.read().verify()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn report<T>(&self, op: &'static str, result: Result<T>) -> Result<T> {
        if let Err(error) = &result {
            self.observer.observe(&Observation::Rejected {
                op,
                error: error.clone(),
            });
        }
        result
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
