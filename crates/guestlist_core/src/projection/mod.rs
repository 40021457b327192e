//! Read-side projections derived from guest snapshots.
//!
//! # Responsibility
//! - Turn a snapshot into view-ready aggregates without touching the store.

pub mod summary;
