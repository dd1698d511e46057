//! Patients and doctors — the people the system administers.
//!
//! Entities are value-owned by the [`Directory`](crate::directory::Directory)
//! and identified by id, never by address. Cross-collection references
//! (a patient's record, a patient's latest appointment) are therefore plain
//! id back-references into the owning component's ledger.

use serde::{Deserialize, Serialize};

use crate::{records::RecordId, schedule::AppointmentId};

/// Identifier for any person. Patients and doctors draw from one shared
/// namespace, so the same id can never belong to both.
pub type PersonId = u32;

/// The capability surface common to everyone in the directory.
pub trait Person {
  fn id(&self) -> PersonId;
  fn name(&self) -> &str;
  /// Disabled people are hidden from lookup and listing; their historical
  /// appointments and records are retained.
  fn is_active(&self) -> bool;
}

// ─── Patient ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
  pub id:     PersonId,
  pub name:   String,
  pub active: bool,
  /// The patient's single medical record, if one has been opened.
  pub record: Option<RecordId>,
  /// The most recently booked appointment. Earlier bookings stay in the
  /// scheduler's ledger; only this pointer is overwritten.
  pub appointment: Option<AppointmentId>,
}

impl Patient {
  pub fn new(id: PersonId, name: impl Into<String>) -> Self {
    Self {
      id,
      name: name.into(),
      active: true,
      record: None,
      appointment: None,
    }
  }
}

impl Person for Patient {
  fn id(&self) -> PersonId { self.id }
  fn name(&self) -> &str { &self.name }
  fn is_active(&self) -> bool { self.active }
}

// ─── Doctor ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
  pub id:             PersonId,
  pub name:           String,
  pub active:         bool,
  /// Free-text label; drives doctor selection during booking.
  pub specialization: String,
  /// Whether the doctor is wired to the prescription service. Doctors
  /// created through the directory are; issuing with one that is not fails
  /// with [`Error::PrescribingUnavailable`](crate::Error).
  pub prescriber: bool,
}

impl Doctor {
  /// A doctor with no prescribing capability attached yet.
  pub fn new(
    id: PersonId,
    name: impl Into<String>,
    specialization: impl Into<String>,
  ) -> Self {
    Self {
      id,
      name: name.into(),
      active: true,
      specialization: specialization.into(),
      prescriber: false,
    }
  }
}

impl Person for Doctor {
  fn id(&self) -> PersonId { self.id }
  fn name(&self) -> &str { &self.name }
  fn is_active(&self) -> bool { self.active }
}
