//! Guest collection ownership.
//!
//! # Responsibility
//! - Hold the only mutable copy of the guest sequence.
//! - Expose read-only snapshots to projections and bindings.
//!
//! # Invariants
//! - All mutations go through `GuestStore` methods.
//! - Snapshots are immutable once published.

pub mod guest_store;
