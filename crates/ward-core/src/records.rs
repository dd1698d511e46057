//! Prescriptions and medical records.
//!
//! Both collections are append-only ledgers. A patient has at most one
//! medical record; issuing a further prescription rewrites that record's
//! history and prescription pointer instead of opening a second record. The
//! superseded prescription stays in the ledger but is no longer reachable
//! from the record.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  person::{Doctor, Patient, PersonId},
};

pub type PrescriptionId = u32;
pub type RecordId = u32;

/// Immutable once issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
  pub id:       PrescriptionId,
  pub medicine: String,
  pub dosage:   String,
  pub doctor:   PersonId,
  pub patient:  PersonId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
  pub id:      RecordId,
  pub history: String,
  /// The most recent prescription issued against this record.
  pub prescription: PrescriptionId,
}

// ─── Issue outcome ───────────────────────────────────────────────────────────

/// How [`RecordKeeper::issue_prescription`] affected the patient's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
  /// A record was opened for the patient, consuming the next record id.
  Created(RecordId),
  /// The patient's existing record was rewritten in place; the record
  /// counter did not advance.
  Updated(RecordId),
}

/// Result of a successful [`RecordKeeper::issue_prescription`].
#[derive(Debug, Clone, Copy)]
pub struct Issued {
  pub prescription: PrescriptionId,
  pub record:       RecordOutcome,
}

// ─── RecordKeeper ────────────────────────────────────────────────────────────

/// Owns the prescription and record ledgers and both id counters.
#[derive(Debug)]
pub struct RecordKeeper {
  prescriptions: Vec<Prescription>,
  records:       Vec<MedicalRecord>,
  next_prescription: PrescriptionId,
  next_record:       RecordId,
}

impl Default for RecordKeeper {
  fn default() -> Self { Self::new() }
}

impl RecordKeeper {
  pub fn new() -> Self {
    Self {
      prescriptions: Vec::new(),
      records: Vec::new(),
      next_prescription: 1,
      next_record: 1,
    }
  }

  /// Issue a prescription from `doctor` to `patient`.
  ///
  /// Always appends a new prescription. If the patient has no record, one
  /// is opened with the given history; otherwise the existing record's
  /// history and prescription pointer are rewritten. Fails without mutating
  /// anything when the doctor is not a prescriber.
  pub fn issue_prescription(
    &mut self,
    doctor: &Doctor,
    patient: &mut Patient,
    medicine: impl Into<String>,
    dosage: impl Into<String>,
    history: impl Into<String>,
  ) -> Result<Issued> {
    if !doctor.prescriber {
      return Err(Error::PrescribingUnavailable(doctor.id));
    }

    let pres_id = self.next_prescription;
    self.next_prescription += 1;
    self.prescriptions.push(Prescription {
      id: pres_id,
      medicine: medicine.into(),
      dosage: dosage.into(),
      doctor: doctor.id,
      patient: patient.id,
    });

    let record = match patient.record {
      None => {
        let rec_id = self.next_record;
        self.next_record += 1;
        self.records.push(MedicalRecord {
          id: rec_id,
          history: history.into(),
          prescription: pres_id,
        });
        patient.record = Some(rec_id);
        RecordOutcome::Created(rec_id)
      }
      Some(rec_id) => {
        if let Some(rec) = self.records.iter_mut().find(|r| r.id == rec_id) {
          rec.history = history.into();
          rec.prescription = pres_id;
        }
        RecordOutcome::Updated(rec_id)
      }
    };

    Ok(Issued {
      prescription: pres_id,
      record,
    })
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn prescription(&self, id: PrescriptionId) -> Option<&Prescription> {
    self.prescriptions.iter().find(|p| p.id == id)
  }

  pub fn record(&self, id: RecordId) -> Option<&MedicalRecord> {
    self.records.iter().find(|r| r.id == id)
  }

  /// The patient's record, resolved through their back-reference.
  pub fn record_for(&self, patient: &Patient) -> Option<&MedicalRecord> {
    patient.record.and_then(|id| self.record(id))
  }

  pub fn prescriptions(&self) -> &[Prescription] { &self.prescriptions }

  pub fn records(&self) -> &[MedicalRecord] { &self.records }
}
