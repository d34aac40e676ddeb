//! Error types for Stowage
//!
//! Provides a unified error type for all registry operations.

use thiserror::Error;

/// Result type alias using StowageError
pub type Result<T> = std::result::Result<T, StowageError>;

/// Unified error type for Stowage operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StowageError {
    // -------------------------------------------------------------------------
    // Registry Errors
    // -------------------------------------------------------------------------
    #[error("item with ID {id} already exists")]
    DuplicateIdentifier { id: String },

    #[error("item with ID {id} not found")]
    NotFound { id: String },

    /// The two indexes disagree. Only reported by the consistency check.
    #[error("index corruption detected: {0}")]
    IndexCorruption(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StowageError {
    pub(crate) fn duplicate(id: &str) -> Self {
        Self::DuplicateIdentifier { id: id.to_string() }
    }

    pub(crate) fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// True for [`StowageError::DuplicateIdentifier`]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateIdentifier { .. })
    }

    /// True for [`StowageError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
