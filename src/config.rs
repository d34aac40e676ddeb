//! Configuration for Stowage
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::str::FromStr;

use crate::error::StowageError;

/// Main configuration for a Registry instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Ordering Configuration
    // -------------------------------------------------------------------------
    /// How records sharing a description are ordered when enumerated
    pub tie_break: TieBreak,

    // -------------------------------------------------------------------------
    // Capacity Configuration
    // -------------------------------------------------------------------------
    /// Number of records the identifier index is pre-sized for
    pub initial_capacity: usize,
}

/// Ordering among records with the same description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Ascending identifier
    #[default]
    Identifier,

    /// Order in which the records were added
    Insertion,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "id"),
            Self::Insertion => write!(f, "insertion"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = StowageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "identifier" => Ok(Self::Identifier),
            "insertion" | "insert" => Ok(Self::Insertion),
            other => Err(StowageError::Config(format!(
                "unknown tie-break '{}', expected 'id' or 'insertion'",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Identifier,
            initial_capacity: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the tie-break used for same-description records
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Set the pre-size hint for the identifier index
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
