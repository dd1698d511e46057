//! Scheduler — the appointment ledger and its two non-collision invariants.
//!
//! A slot is a (doctor, date, time) triple. The scheduler guarantees that no
//! two appointments share a slot, and answers whether a patient already
//! holds any appointment at a given date and time. Dates are opaque
//! `YYYY-MM-DD` strings; the session layer decides which dates to offer.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  person::{Patient, PersonId},
};

/// Monotonically increasing, process-lifetime unique.
pub type AppointmentId = u32;

/// A bookable time label within a day, e.g. `"09:00"`.
pub type SlotLabel = String;

// ─── Slot grid ───────────────────────────────────────────────────────────────

/// Supplies the ordered grid of bookable time labels for one day.
///
/// The scheduler depends on this abstraction rather than an inline constant
/// so alternate grids (finer granularity, shorter days) can be swapped in at
/// construction without touching the booking logic.
pub trait SlotSource {
  fn slots(&self) -> Vec<SlotLabel>;
}

/// The standard grid: seven one-hour labels, 09:00 through 15:00.
#[derive(Debug, Default)]
pub struct HourlyDay;

impl SlotSource for HourlyDay {
  fn slots(&self) -> Vec<SlotLabel> {
    ["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00"]
      .iter()
      .map(|s| s.to_string())
      .collect()
  }
}

// ─── Appointment ─────────────────────────────────────────────────────────────

/// One committed booking. The ledger is append-only; there is no
/// cancellation or rescheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
  pub id:   AppointmentId,
  /// Calendar day, `YYYY-MM-DD`.
  pub date: String,
  pub time: SlotLabel,
  pub patient: PersonId,
  pub doctor:  PersonId,
}

// ─── Scheduler ───────────────────────────────────────────────────────────────

/// Owns the appointment ledger and enforces slot exclusivity at commit time.
pub struct Scheduler {
  grid:    Box<dyn SlotSource>,
  ledger:  Vec<Appointment>,
  next_id: AppointmentId,
}

impl Scheduler {
  pub fn new(grid: Box<dyn SlotSource>) -> Self {
    Self {
      grid,
      ledger: Vec::new(),
      next_id: 1,
    }
  }

  /// The grid labels still free for `doctor` on `date`, in grid order.
  pub fn available_slots(&self, doctor: PersonId, date: &str) -> Vec<SlotLabel> {
    self
      .grid
      .slots()
      .into_iter()
      .filter(|t| !self.is_doctor_slot_taken(doctor, date, t))
      .collect()
  }

  /// True iff an existing appointment has exactly this doctor, date, and
  /// time.
  pub fn is_doctor_slot_taken(
    &self,
    doctor: PersonId,
    date: &str,
    time: &str,
  ) -> bool {
    self
      .ledger
      .iter()
      .any(|a| a.doctor == doctor && a.date == date && a.time == time)
  }

  /// True iff `patient` already holds an appointment at (date, time) with
  /// any doctor. Callers run this before [`Scheduler::book`]; `book` itself
  /// re-checks only the doctor side.
  pub fn has_patient_conflict(
    &self,
    patient: PersonId,
    date: &str,
    time: &str,
  ) -> bool {
    self
      .ledger
      .iter()
      .any(|a| a.patient == patient && a.date == date && a.time == time)
  }

  /// Commit a booking if the doctor's slot is still free.
  ///
  /// The id comes from the scheduler's counter and is consumed only on
  /// success, so failed attempts leave no gaps. On success the patient's
  /// current-appointment pointer is overwritten with the new booking; a
  /// failed attempt mutates nothing.
  pub fn book(
    &mut self,
    patient: &mut Patient,
    doctor: PersonId,
    date: &str,
    time: &str,
  ) -> Result<&Appointment> {
    if self.is_doctor_slot_taken(doctor, date, time) {
      return Err(Error::SlotTaken {
        doctor,
        date: date.to_owned(),
        time: time.to_owned(),
      });
    }
    let id = self.next_id;
    self.next_id += 1;
    self.ledger.push(Appointment {
      id,
      date: date.to_owned(),
      time: time.to_owned(),
      patient: patient.id,
      doctor,
    });
    patient.appointment = Some(id);
    let idx = self.ledger.len() - 1;
    Ok(&self.ledger[idx])
  }

  /// All of `doctor`'s appointments in ledger order, whether or not the
  /// doctor or the patients are still active.
  pub fn doctor_appointments(&self, doctor: PersonId) -> Vec<&Appointment> {
    self.ledger.iter().filter(|a| a.doctor == doctor).collect()
  }

  pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
    self.ledger.iter().find(|a| a.id == id)
  }
}
