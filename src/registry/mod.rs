//! Registry Module
//!
//! Stores records under two indexes that always describe the same set.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────┐     ┌───────────────────────────────────┐
//! │ id index (HashMap)           │     │ description index (BTreeMap)      │
//! │  "ITEM001" ─► Slot{rec, seq} │     │  "Fan Motor" ─► { ord ─► rec }    │
//! │  "ITEM002" ─► Slot{rec, seq} │     │  "LED Light" ─► { ord ─► rec, .. }│
//! └──────────────────────────────┘     └───────────────────────────────────┘
//! ```
//!
//! Each description maps to a bucket, so records sharing a description
//! all survive. Inside a bucket, records are ordered by id or by insertion
//! sequence depending on [`TieBreak`](crate::config::TieBreak).

mod index;
mod manager;

pub use index::DualIndex;
pub use manager::Registry;
