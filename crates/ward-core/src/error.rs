//! Error types for `ward-core`.
//!
//! Every failure here is an expected, recoverable condition the session
//! layer reports and moves on from; nothing aborts the process.

use thiserror::Error;

use crate::person::PersonId;

#[derive(Debug, Error)]
pub enum Error {
  /// The id is already held by a patient or a doctor, active or not.
  #[error("id {0} is already in use")]
  DuplicateId(PersonId),

  #[error("no active patient with id {0}")]
  PatientNotFound(PersonId),

  #[error("no active doctor with id {0}")]
  DoctorNotFound(PersonId),

  /// The doctor's slot was no longer free at commit time.
  #[error("doctor {doctor} is already booked on {date} at {time}")]
  SlotTaken {
    doctor: PersonId,
    date:   String,
    time:   String,
  },

  /// The doctor is not wired to the prescription service.
  #[error("doctor {0} cannot issue prescriptions")]
  PrescribingUnavailable(PersonId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
