//! Command definitions
//!
//! Single entry point for callers that drive the registry from a script
//! or a request stream.

use std::sync::Arc;

use crate::error::Result;
use crate::record::Record;
use crate::registry::Registry;

/// Operation to run against a registry
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Store a new record
    Add(Record),

    /// Look up a record by identifier
    Find { id: String },

    /// Remove a record by identifier
    Remove { id: String },

    /// Enumerate all records by description
    List,
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Find { .. } => "find",
            Command::Remove { .. } => "remove",
            Command::List => "list",
        }
    }
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added,
    Found(Arc<Record>),
    Removed(Arc<Record>),
    Listed(Vec<Arc<Record>>),
}

impl Registry {
    /// Execute a command
    ///
    /// Routes commands to the matching registry operation
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        tracing::debug!(command = command.name(), "executing");

        match command {
            Command::Add(record) => {
                self.add(record)?;
                Ok(Outcome::Added)
            }
            Command::Find { id } => self.find_by_id(&id).map(Outcome::Found),
            Command::Remove { id } => self.remove(&id).map(Outcome::Removed),
            Command::List => Ok(Outcome::Listed(self.list_by_description())),
        }
    }
}
