//! Console rendering for ledger entities.
//!
//! Names resolve through [`Directory::display_name`] rather than the active
//! lookups, so entries referencing a disabled patient or doctor still print.

use ward_core::{
  directory::Directory,
  person::PersonId,
  records::{MedicalRecord, Prescription, RecordKeeper},
  schedule::Appointment,
};

fn name(directory: &Directory, id: PersonId) -> String {
  directory.display_name(id).unwrap_or("Unknown").to_owned()
}

pub fn appointment(a: &Appointment, directory: &Directory) -> String {
  let mut line = format!(
    "Appt#{} | {} {} | Patient: {} | Doctor: {}",
    a.id,
    a.date,
    a.time,
    name(directory, a.patient),
    name(directory, a.doctor),
  );
  if let Some(spec) = directory.specialization_of(a.doctor) {
    line.push_str(&format!(" ({spec})"));
  }
  line
}

pub fn prescription(p: &Prescription, directory: &Directory) -> String {
  format!(
    "Prescription#{}: {} ({}) for {} by {}",
    p.id,
    p.medicine,
    p.dosage,
    name(directory, p.patient),
    name(directory, p.doctor),
  )
}

/// Renders the record header plus its current prescription, one per line.
pub fn record(
  r: &MedicalRecord,
  keeper: &RecordKeeper,
  directory: &Directory,
) -> String {
  let mut out = format!("Record#{} | History: {}", r.id, r.history);
  if let Some(p) = keeper.prescription(r.prescription) {
    out.push('\n');
    out.push_str(&prescription(p, directory));
  }
  out
}
