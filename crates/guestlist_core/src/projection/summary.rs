//! Guest summary projection.
//!
//! # Responsibility
//! - Derive aggregate counts from one guest snapshot.
//!
//! # Invariants
//! - Pure function of its input; nothing is cached between calls.
//! - `confirmed_count + unconfirmed_count == total`.
//! - `rsvp_count + not_rsvp_count == total`.

use crate::model::guest::GuestRecord;
use serde::{Deserialize, Serialize};

/// Aggregate counts over one guest snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSummary {
    pub total: usize,
    pub confirmed_count: usize,
    pub unconfirmed_count: usize,
    pub rsvp_count: usize,
    pub not_rsvp_count: usize,
}

impl GuestSummary {
    /// Returns whether both complementary count pairs add up to `total`.
    pub fn is_consistent(&self) -> bool {
        self.confirmed_count + self.unconfirmed_count == self.total
            && self.rsvp_count + self.not_rsvp_count == self.total
    }
}

/// Computes summary counts for `guests`.
pub fn summarize(guests: &[GuestRecord]) -> GuestSummary {
    let total = guests.len();
    let confirmed_count = guests.iter().filter(|guest| guest.confirmed).count();
    let rsvp_count = guests.iter().filter(|guest| guest.rsvp).count();

    GuestSummary {
        total,
        confirmed_count,
        unconfirmed_count: total - confirmed_count,
        rsvp_count,
        not_rsvp_count: total - rsvp_count,
    }
}
