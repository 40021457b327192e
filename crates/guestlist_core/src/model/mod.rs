//! Guest list domain model.
//!
//! # Responsibility
//! - Define the guest record shared by store, projections and bindings.
//! - Keep name/email normalization rules in one place.
//!
//! # Invariants
//! - Every guest is identified by a store-assigned `GuestId`.
//! - Removal is a hard delete; there are no tombstones.

pub mod guest;
