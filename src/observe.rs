//! Observation Module
//!
//! Side-effect sink for registry events. The registry reports every
//! committed add/remove and every rejected call here; nothing it returns
//! depends on the sink.

use crate::error::StowageError;

/// Event reported by the registry after an operation completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// A record was inserted into both indexes
    Added { id: String, description: String },

    /// A record was removed from both indexes
    Removed { id: String },

    /// An operation failed and left the registry unchanged
    Rejected { op: &'static str, error: StowageError },
}

/// Receiver of registry observations
pub trait Observer: Send + Sync {
    fn observe(&self, event: &Observation);
}

/// Emits observations as `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&self, event: &Observation) {
        match event {
            Observation::Added { id, description } => {
                tracing::info!(id = %id, description = %description, "item added");
            }
            Observation::Removed { id } => {
                tracing::info!(id = %id, "item removed");
            }
            Observation::Rejected { op, error } => {
                tracing::warn!(op = *op, error = %error, "operation rejected");
            }
        }
    }
}

/// Discards all observations
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn observe(&self, _event: &Observation) {}
}
