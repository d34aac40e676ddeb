//! # Stowage
//!
//! A minimal in-memory inventory registry with:
//! - Unique identifier index for point lookups
//! - Description index kept in sorted order for ordered listings
//! - Atomic add/remove that update both indexes or neither
//! - Single RwLock over both indexes for shared use across threads
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Caller / Driver                          │
//! │             (Command or direct method calls)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Registry                               │
//! │                 (RwLock<DualIndex>)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │  id index   │          │ description  │
//!   │  (HashMap)  │          │ index (BTree)│
//!   └─────────────┘          └──────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐
//!               │   Observer   │
//!               │  (tracing)   │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod registry;
pub mod observe;
pub mod command;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StowageError, Result};
pub use config::{Config, TieBreak};
pub use record::Record;
pub use registry::{DualIndex, Registry};
pub use observe::{NoopObserver, Observation, Observer, TracingObserver};
pub use command::{Command, Outcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stowage
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
