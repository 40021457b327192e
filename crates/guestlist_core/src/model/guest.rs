//! Guest domain model.
//!
//! # Responsibility
//! - Define the canonical guest record rendered by every list/summary view.
//! - Own text normalization and non-empty validation for name/email.
//!
//! # Invariants
//! - `id` is assigned by the store, never by callers of `add`.
//! - `name` and `email` are stored trimmed and are never empty.
//! - New records start with `confirmed = false` and `rsvp = false`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email shape regex")
});

/// Store-assigned guest identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GuestId = u64;

/// Validation failures for guest creation, edits and seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestValidationError {
    /// Name is empty after trimming whitespace.
    EmptyName,
    /// Email is empty after trimming whitespace.
    EmptyEmail,
    /// Two seed records share one id.
    DuplicateId(GuestId),
    /// The current max id is `GuestId::MAX`; no fresh id can be derived.
    IdSpaceExhausted,
}

impl Display for GuestValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "guest name must not be empty"),
            Self::EmptyEmail => write!(f, "guest email must not be empty"),
            Self::DuplicateId(id) => write!(f, "duplicate guest id: {id}"),
            Self::IdSpaceExhausted => write!(f, "no guest id left above the current maximum"),
        }
    }
}

impl Error for GuestValidationError {}

/// Canonical guest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GuestRecordWire")]
pub struct GuestRecord {
    /// Unique within one store; derived from the current max id on add.
    pub id: GuestId,
    /// Display name, trimmed.
    pub name: String,
    /// Contact email, trimmed. Format is not enforced.
    pub email: String,
    /// Organizer has confirmed attendance.
    pub confirmed: bool,
    /// Guest has responded to the invitation.
    pub rsvp: bool,
}

#[derive(Deserialize)]
struct GuestRecordWire {
    id: GuestId,
    name: String,
    email: String,
    #[serde(default)]
    confirmed: bool,
    #[serde(default)]
    rsvp: bool,
}

impl TryFrom<GuestRecordWire> for GuestRecord {
    type Error = GuestValidationError;

    fn try_from(value: GuestRecordWire) -> Result<Self, Self::Error> {
        let mut record = Self::new(value.id, value.name, value.email)?;
        record.confirmed = value.confirmed;
        record.rsvp = value.rsvp;
        Ok(record)
    }
}

impl GuestRecord {
    /// Creates a record with normalized text and both flags cleared.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptyEmail` when either field is blank after trim.
    pub fn new(
        id: GuestId,
        name: impl AsRef<str>,
        email: impl AsRef<str>,
    ) -> Result<Self, GuestValidationError> {
        Ok(Self {
            id,
            name: normalize_name(name.as_ref())?,
            email: normalize_email(email.as_ref())?,
            confirmed: false,
            rsvp: false,
        })
    }

    /// Re-checks text invariants on an existing value.
    pub fn validate(&self) -> Result<(), GuestValidationError> {
        normalize_name(&self.name)?;
        normalize_email(&self.email)?;
        Ok(())
    }

    /// Advisory email shape check for UI hints. Never used to reject input.
    pub fn email_looks_valid(&self) -> bool {
        email_looks_valid(&self.email)
    }

    pub(crate) fn with_confirmed(&self, confirmed: bool) -> Self {
        Self {
            confirmed,
            ..self.clone()
        }
    }

    pub(crate) fn with_rsvp(&self, rsvp: bool) -> Self {
        Self {
            rsvp,
            ..self.clone()
        }
    }
}

/// Creation payload as submitted by a guest form.
///
/// Flag fields are accepted for shape compatibility with edit forms but are
/// ignored on add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGuest {
    pub name: String,
    pub email: String,
    pub confirmed: bool,
    pub rsvp: bool,
}

impl NewGuest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Partial update for name/email. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl GuestPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            email: None,
        }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self {
            name: None,
            email: Some(value.into()),
        }
    }

    /// Builds the patched record without touching `current`.
    ///
    /// # Invariants
    /// - `id`, `confirmed` and `rsvp` are copied unchanged.
    pub(crate) fn apply_to(
        &self,
        current: &GuestRecord,
    ) -> Result<GuestRecord, GuestValidationError> {
        let name = match &self.name {
            Some(value) => normalize_name(value)?,
            None => current.name.clone(),
        };
        let email = match &self.email {
            Some(value) => normalize_email(value)?,
            None => current.email.clone(),
        };
        Ok(GuestRecord {
            name,
            email,
            ..current.clone()
        })
    }

    pub(crate) fn validate(&self) -> Result<(), GuestValidationError> {
        if let Some(value) = &self.name {
            normalize_name(value)?;
        }
        if let Some(value) = &self.email {
            normalize_email(value)?;
        }
        Ok(())
    }
}

/// Trims a guest name, rejecting blank input.
pub fn normalize_name(value: &str) -> Result<String, GuestValidationError> {
    normalize_required(value).ok_or(GuestValidationError::EmptyName)
}

/// Trims a guest email, rejecting blank input.
pub fn normalize_email(value: &str) -> Result<String, GuestValidationError> {
    normalize_required(value).ok_or(GuestValidationError::EmptyEmail)
}

/// Returns whether `value` has a `local@domain.tld` shape.
pub fn email_looks_valid(value: &str) -> bool {
    EMAIL_SHAPE_RE.is_match(value.trim())
}

fn normalize_required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
