//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose guest list use-cases to the UI layer via FRB.
//! - Own the process-wide guest store behind a single lock.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every store operation runs under one lock acquisition, start to end.
//! - Validation failures are reported in the envelope, never thrown.

use guestlist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    GuestId, GuestPatch, GuestRecord, GuestStore, GuestSummary,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static GUEST_STORE: OnceLock<Mutex<GuestStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One guest row as rendered by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestItem {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub confirmed: bool,
    pub rsvp: bool,
    /// Advisory shape check for an inline email hint.
    pub email_looks_valid: bool,
}

impl From<&GuestRecord> for GuestItem {
    fn from(value: &GuestRecord) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            email: value.email.clone(),
            confirmed: value.confirmed,
            rsvp: value.rsvp,
            email_looks_valid: value.email_looks_valid(),
        }
    }
}

/// Summary counts envelope for the summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSummaryResponse {
    pub total: u64,
    pub confirmed_count: u64,
    pub unconfirmed_count: u64,
    pub rsvp_count: u64,
    pub not_rsvp_count: u64,
    /// Store revision the counts were derived from.
    pub revision: u64,
}

impl GuestSummaryResponse {
    fn new(summary: GuestSummary, revision: u64) -> Self {
        Self {
            total: summary.total as u64,
            confirmed_count: summary.confirmed_count as u64,
            unconfirmed_count: summary.unconfirmed_count as u64,
            rsvp_count: summary.rsvp_count as u64,
            not_rsvp_count: summary.not_rsvp_count as u64,
            revision,
        }
    }
}

/// Generic action response envelope for guest mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestActionResponse {
    /// Whether operation succeeded. Unknown ids still count as success.
    pub ok: bool,
    /// Resulting (or removed) guest; `None` on failure or no-op.
    pub guest: Option<GuestItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Store revision after the call.
    pub revision: u64,
}

impl GuestActionResponse {
    fn success(message: impl Into<String>, guest: &GuestRecord, revision: u64) -> Self {
        Self {
            ok: true,
            guest: Some(GuestItem::from(guest)),
            message: message.into(),
            revision,
        }
    }

    fn unchanged(id: GuestId, revision: u64) -> Self {
        Self {
            ok: true,
            guest: None,
            message: format!("No guest with id {id}; nothing changed."),
            revision,
        }
    }

    fn failure(message: impl Into<String>, revision: u64) -> Self {
        Self {
            ok: false,
            guest: None,
            message: message.into(),
            revision,
        }
    }

    fn from_optional(
        message: &str,
        id: GuestId,
        guest: Option<GuestRecord>,
        revision: u64,
    ) -> Self {
        match guest {
            Some(guest) => Self::success(message, &guest, revision),
            None => Self::unchanged(id, revision),
        }
    }
}

/// Lists the current guest snapshot in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_list() -> Vec<GuestItem> {
    let store = lock_store();
    store.list().iter().map(GuestItem::from).collect()
}

/// Returns summary counts for the current snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_summary() -> GuestSummaryResponse {
    let store = lock_store();
    GuestSummaryResponse::new(store.summary(), store.revision())
}

/// Adds a guest from the add-guest form.
///
/// # FFI contract
/// - Blank name/email returns `ok=false` and leaves the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_add(name: String, email: String) -> GuestActionResponse {
    let mut store = lock_store();
    match store.add(name, email) {
        Ok(guest) => GuestActionResponse::success("Guest added.", &guest, store.revision()),
        Err(err) => {
            GuestActionResponse::failure(format!("guest_add failed: {err}"), store.revision())
        }
    }
}

/// Saves an inline edit. `None` fields keep their current value.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_edit(id: u64, name: Option<String>, email: Option<String>) -> GuestActionResponse {
    let mut store = lock_store();
    match store.edit(id, &GuestPatch { name, email }) {
        Ok(guest) => {
            GuestActionResponse::from_optional("Guest updated.", id, guest, store.revision())
        }
        Err(err) => {
            GuestActionResponse::failure(format!("guest_edit failed: {err}"), store.revision())
        }
    }
}

/// Removes a guest; returns the removed row on success.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_remove(id: u64) -> GuestActionResponse {
    let mut store = lock_store();
    let removed = store.remove(id);
    GuestActionResponse::from_optional("Guest removed.", id, removed, store.revision())
}

#[flutter_rust_bridge::frb(sync)]
pub fn guest_toggle_confirmed(id: u64) -> GuestActionResponse {
    let mut store = lock_store();
    let guest = store.toggle_confirmed(id);
    GuestActionResponse::from_optional("Confirmation updated.", id, guest, store.revision())
}

#[flutter_rust_bridge::frb(sync)]
pub fn guest_toggle_rsvp(id: u64) -> GuestActionResponse {
    let mut store = lock_store();
    let guest = store.toggle_rsvp(id);
    GuestActionResponse::from_optional("RSVP updated.", id, guest, store.revision())
}

#[flutter_rust_bridge::frb(sync)]
pub fn guest_set_confirmed(id: u64, value: bool) -> GuestActionResponse {
    let mut store = lock_store();
    let guest = store.set_confirmed(id, value);
    GuestActionResponse::from_optional("Confirmation updated.", id, guest, store.revision())
}

#[flutter_rust_bridge::frb(sync)]
pub fn guest_set_rsvp(id: u64, value: bool) -> GuestActionResponse {
    let mut store = lock_store();
    let guest = store.set_rsvp(id, value);
    GuestActionResponse::from_optional("RSVP updated.", id, guest, store.revision())
}

/// Replaces the process-wide store with a fresh one.
///
/// `with_demo_guests = true` restores the demo seed; otherwise the list is
/// emptied. Returns the new summary.
#[flutter_rust_bridge::frb(sync)]
pub fn guest_reset(with_demo_guests: bool) -> GuestSummaryResponse {
    let mut store = lock_store();
    *store = if with_demo_guests {
        GuestStore::with_demo_guests()
    } else {
        GuestStore::new()
    };
    GuestSummaryResponse::new(store.summary(), store.revision())
}

fn lock_store() -> MutexGuard<'static, GuestStore> {
    GUEST_STORE
        .get_or_init(|| Mutex::new(GuestStore::with_demo_guests()))
        .lock()
        // Store methods leave no partial state on unwind, so a poisoned
        // guard still holds a consistent snapshot.
        .unwrap_or_else(PoisonError::into_inner)
}
