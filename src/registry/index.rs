//! Dual index implementation
//!
//! HashMap for identifier lookups, BTreeMap of buckets for ordered
//! enumeration by description. No locking here; `Registry` adds that.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::config::{Config, TieBreak};
use crate::error::{Result, StowageError};
use crate::record::Record;

/// Position of a record inside its description bucket
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Ordinal {
    Id(String),
    Seq(u64),
}

/// Primary index entry
#[derive(Debug, Clone)]
struct Slot {
    record: Arc<Record>,
    /// Insertion sequence number, assigned on successful insert
    seq: u64,
}

type Bucket = BTreeMap<Ordinal, Arc<Record>>;

/// The two views over one set of records
///
/// Both maps are only mutated by [`DualIndex::insert`] and
/// [`DualIndex::remove`], each of which updates both or neither.
#[derive(Debug, Clone)]
pub struct DualIndex {
    tie_break: TieBreak,

    /// id -> record
    by_id: HashMap<String, Slot>,

    /// description -> bucket of records sharing it, sorted by key
    by_description: BTreeMap<String, Bucket>,

    next_seq: u64,
}

impl DualIndex {
    /// Create an empty index with default configuration
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            tie_break: config.tie_break,
            by_id: HashMap::with_capacity(config.initial_capacity),
            by_description: BTreeMap::new(),
            next_seq: 0,
        }
    }

    fn ordinal(&self, slot: &Slot) -> Ordinal {
        match self.tie_break {
            TieBreak::Identifier => Ordinal::Id(slot.record.id().to_string()),
            TieBreak::Insertion => Ordinal::Seq(slot.seq),
        }
    }

    /// Insert a record into both indexes
    ///
    /// Fails with `DuplicateIdentifier` before touching either map.
    pub fn insert(&mut self, record: Arc<Record>) -> Result<()> {
        if self.by_id.contains_key(record.id()) {
            return Err(StowageError::duplicate(record.id()));
        }

        let slot = Slot {
            record: Arc::clone(&record),
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let ordinal = self.ordinal(&slot);
        self.by_description
            .entry(record.description().to_string())
            .or_default()
            .insert(ordinal, Arc::clone(&record));
        self.by_id.insert(record.id().to_string(), slot);

        Ok(())
    }

    /// Look up a record by identifier
    pub fn get(&self, id: &str) -> Option<&Arc<Record>> {
        self.by_id.get(id).map(|slot| &slot.record)
    }

    /// Remove a record from both indexes, returning it
    ///
    /// Only this record's entry leaves its bucket; the bucket itself is
    /// dropped once empty.
    pub fn remove(&mut self, id: &str) -> Result<Arc<Record>> {
        let slot = self
            .by_id
            .remove(id)
            .ok_or_else(|| StowageError::not_found(id))?;

        let ordinal = self.ordinal(&slot);
        let description = slot.record.description();
        if let Some(bucket) = self.by_description.get_mut(description) {
            bucket.remove(&ordinal);
            if bucket.is_empty() {
                self.by_description.remove(description);
            }
        }

        Ok(slot.record)
    }

    /// Records ordered by description, then by the configured tie-break
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Arc<Record>> + '_ {
        self.by_description.values().flat_map(|bucket| bucket.values())
    }

    /// Records whose description is exactly `description`
    pub fn bucket(&self, description: &str) -> impl Iterator<Item = &Arc<Record>> + '_ {
        self.by_description
            .get(description)
            .into_iter()
            .flat_map(|bucket| bucket.values())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Number of distinct descriptions
    pub fn description_count(&self) -> usize {
        self.by_description.len()
    }

    /// All identifiers, ascending
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.by_id.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Check that both maps describe exactly the same set of records
    pub fn verify(&self) -> Result<()> {
        let mut bucket_entries = 0usize;

        for (description, bucket) in &self.by_description {
            if bucket.is_empty() {
                return Err(StowageError::IndexCorruption(format!(
                    "empty bucket for description '{}'",
                    description
                )));
            }

            for (ordinal, record) in bucket {
                bucket_entries += 1;

                if record.description() != description {
                    return Err(StowageError::IndexCorruption(format!(
                        "item {} filed under '{}' but described as '{}'",
                        record.id(),
                        description,
                        record.description()
                    )));
                }

                let slot = self.by_id.get(record.id()).ok_or_else(|| {
                    StowageError::IndexCorruption(format!(
                        "item {} in description index but not in id index",
                        record.id()
                    ))
                })?;

                if !Arc::ptr_eq(&slot.record, record) || self.ordinal(slot) != *ordinal {
                    return Err(StowageError::IndexCorruption(format!(
                        "description index entry for {} does not match id index",
                        record.id()
                    )));
                }
            }
        }

        if bucket_entries != self.by_id.len() {
            return Err(StowageError::IndexCorruption(format!(
                "id index holds {} items, description index holds {}",
                self.by_id.len(),
                bucket_entries
            )));
        }

        Ok(())
    }
}

impl Default for DualIndex {
    fn default() -> Self {
        Self::new()
    }
}
