//! Record
//!
//! Immutable inventory entry. Identity is the `id`; the other two fields
//! are payload as far as equality is concerned.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A stored inventory item
#[derive(Debug, Clone)]
pub struct Record {
    id: String,
    description: String,
    location: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Secondary key used for ordered enumeration
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.location)
    }
}
