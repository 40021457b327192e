//! In-memory guest store.
//!
//! # Responsibility
//! - Own the ordered guest sequence and every mutation applied to it.
//! - Publish a fresh immutable snapshot after each effective mutation.
//!
//! # Invariants
//! - Ids are unique across the current sequence.
//! - New ids are `1 + max(current ids)`, so the highest id is reused after
//!   its record is removed.
//! - Insertion order is preserved; edits and toggles replace in place.
//! - Unknown ids are no-ops for remove/toggle/set/edit, never errors.
//! - No-ops and rejected input keep the current snapshot and revision.

use crate::model::guest::{GuestId, GuestPatch, GuestRecord, GuestValidationError, NewGuest};
use crate::projection::summary::{summarize, GuestSummary};
use log::{debug, info};
use std::collections::BTreeSet;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable view of the full guest sequence at one point in time.
///
/// Cloning is cheap and never observes later mutations.
#[derive(Debug, Clone)]
pub struct GuestSnapshot(Arc<[GuestRecord]>);

impl GuestSnapshot {
    /// Returns whether both handles point at the same published snapshot.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Finds one guest by id.
    pub fn get(&self, id: GuestId) -> Option<&GuestRecord> {
        self.0.iter().find(|guest| guest.id == id)
    }

    fn position(&self, id: GuestId) -> Option<usize> {
        self.0.iter().position(|guest| guest.id == id)
    }
}

impl Default for GuestSnapshot {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<GuestRecord>> for GuestSnapshot {
    fn from(value: Vec<GuestRecord>) -> Self {
        Self(value.into())
    }
}

impl Deref for GuestSnapshot {
    type Target = [GuestRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for GuestSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other) || self.0 == other.0
    }
}

impl Eq for GuestSnapshot {}

/// Sole owner of the guest collection.
#[derive(Debug, Clone, Default)]
pub struct GuestStore {
    guests: GuestSnapshot,
    revision: u64,
}

impl GuestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the demo guest list.
    ///
    /// Seed: Alice (no flags), Bob (RSVP), Charlie (confirmed + RSVP),
    /// ids 1..=3.
    pub fn with_demo_guests() -> Self {
        let seed = [
            (1, "Alice", "alice@email.com", false, false),
            (2, "Bob", "bob@email.com", false, true),
            (3, "Charlie", "charlie@email.com", true, true),
        ]
        .into_iter()
        .map(|(id, name, email, confirmed, rsvp)| GuestRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            confirmed,
            rsvp,
        })
        .collect::<Vec<_>>();

        Self {
            guests: GuestSnapshot::from(seed),
            revision: 0,
        }
    }

    /// Creates a store from existing records, keeping their order and flags.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share one id.
    /// - `EmptyName` / `EmptyEmail` when a record breaks text invariants.
    pub fn from_records(records: Vec<GuestRecord>) -> Result<Self, GuestValidationError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id) {
                return Err(GuestValidationError::DuplicateId(record.id));
            }
        }

        Ok(Self {
            guests: GuestSnapshot::from(records),
            revision: 0,
        })
    }

    /// Returns the current snapshot.
    pub fn list(&self) -> GuestSnapshot {
        self.guests.clone()
    }

    pub fn get(&self, id: GuestId) -> Option<&GuestRecord> {
        self.guests.get(id)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Number of effective mutations applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Summary counts for the current snapshot.
    pub fn summary(&self) -> GuestSummary {
        summarize(&self.guests)
    }

    /// Appends a new guest with a store-assigned id.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptyEmail` when input is blank after trim.
    /// - `IdSpaceExhausted` when the current max id is `GuestId::MAX`.
    ///
    /// The store is left unchanged on error.
    pub fn add(
        &mut self,
        name: impl AsRef<str>,
        email: impl AsRef<str>,
    ) -> Result<GuestRecord, GuestValidationError> {
        let record = self
            .next_id()
            .and_then(|id| GuestRecord::new(id, name, email))
            .inspect_err(|err| {
                info!("event=guest_add module=store status=error reason={err:?}");
            })?;

        let mut next = self.guests.to_vec();
        next.push(record.clone());
        self.publish(next);
        debug!(
            "event=guest_add module=store status=ok id={} revision={}",
            record.id, self.revision
        );
        Ok(record)
    }

    /// Adds a guest from a form payload. Flag fields on `input` are ignored.
    pub fn add_input(&mut self, input: &NewGuest) -> Result<GuestRecord, GuestValidationError> {
        self.add(&input.name, &input.email)
    }

    /// Removes a guest by id, returning the removed record.
    pub fn remove(&mut self, id: GuestId) -> Option<GuestRecord> {
        let Some(index) = self.guests.position(id) else {
            debug!("event=guest_remove module=store status=noop id={id}");
            return None;
        };

        let mut next = self.guests.to_vec();
        let removed = next.remove(index);
        self.publish(next);
        debug!(
            "event=guest_remove module=store status=ok id={id} revision={}",
            self.revision
        );
        Some(removed)
    }

    /// Sets the confirmed flag, returning the resulting record.
    pub fn set_confirmed(&mut self, id: GuestId, value: bool) -> Option<GuestRecord> {
        self.replace("guest_set_confirmed", id, |guest| guest.with_confirmed(value))
    }

    /// Flips the confirmed flag, returning the resulting record.
    pub fn toggle_confirmed(&mut self, id: GuestId) -> Option<GuestRecord> {
        self.replace("guest_toggle_confirmed", id, |guest| {
            guest.with_confirmed(!guest.confirmed)
        })
    }

    /// Sets the RSVP flag, returning the resulting record.
    pub fn set_rsvp(&mut self, id: GuestId, value: bool) -> Option<GuestRecord> {
        self.replace("guest_set_rsvp", id, |guest| guest.with_rsvp(value))
    }

    /// Flips the RSVP flag, returning the resulting record.
    pub fn toggle_rsvp(&mut self, id: GuestId) -> Option<GuestRecord> {
        self.replace("guest_toggle_rsvp", id, |guest| guest.with_rsvp(!guest.rsvp))
    }

    /// Replaces name and/or email on one guest.
    ///
    /// Returns `Ok(None)` when `id` is unknown.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptyEmail` when a supplied field is blank after trim.
    ///   The record is left unchanged.
    pub fn edit(
        &mut self,
        id: GuestId,
        patch: &GuestPatch,
    ) -> Result<Option<GuestRecord>, GuestValidationError> {
        patch.validate().inspect_err(|err| {
            info!("event=guest_edit module=store status=error id={id} reason={err:?}");
        })?;

        let Some(index) = self.guests.position(id) else {
            debug!("event=guest_edit module=store status=noop id={id}");
            return Ok(None);
        };

        let updated = patch.apply_to(&self.guests[index])?;
        self.commit_at(index, updated.clone(), "guest_edit");
        Ok(Some(updated))
    }

    fn next_id(&self) -> Result<GuestId, GuestValidationError> {
        self.guests
            .iter()
            .map(|guest| guest.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(GuestValidationError::IdSpaceExhausted)
    }

    fn replace(
        &mut self,
        event: &str,
        id: GuestId,
        update: impl FnOnce(&GuestRecord) -> GuestRecord,
    ) -> Option<GuestRecord> {
        let Some(index) = self.guests.position(id) else {
            debug!("event={event} module=store status=noop id={id}");
            return None;
        };

        let updated = update(&self.guests[index]);
        self.commit_at(index, updated.clone(), event);
        Some(updated)
    }

    fn commit_at(&mut self, index: usize, updated: GuestRecord, event: &str) {
        let id = updated.id;
        if self.guests[index] == updated {
            debug!("event={event} module=store status=noop id={id}");
            return;
        }

        let mut next = self.guests.to_vec();
        next[index] = updated;
        self.publish(next);
        debug!(
            "event={event} module=store status=ok id={id} revision={}",
            self.revision
        );
    }

    fn publish(&mut self, guests: Vec<GuestRecord>) {
        self.guests = GuestSnapshot::from(guests);
        self.revision += 1;
    }
}
