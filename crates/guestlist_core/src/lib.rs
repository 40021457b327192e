//! Core domain logic for the guest list manager.
//! This crate is the single source of truth for guest list invariants.

pub mod logging;
pub mod model;
pub mod projection;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::guest::{
    email_looks_valid, GuestId, GuestPatch, GuestRecord, GuestValidationError, NewGuest,
};
pub use projection::summary::{summarize, GuestSummary};
pub use store::guest_store::{GuestSnapshot, GuestStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
