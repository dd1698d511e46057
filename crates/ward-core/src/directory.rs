//! Directory — identity management and active-entity lookup.

use crate::{
  Error, Result,
  person::{Doctor, Patient, PersonId},
};

/// Canonical owner of the patient and doctor collections.
///
/// Entities are never deleted. Disabling flips the active flag, which hides
/// the entity from `find_*` and the active listings but keeps its data (and
/// every ledger entry referencing it) intact.
#[derive(Debug, Default)]
pub struct Directory {
  patients: Vec<Patient>,
  doctors:  Vec<Doctor>,
}

impl Directory {
  pub fn new() -> Self { Self::default() }

  /// Install the three startup doctors.
  pub fn seed_doctors(&mut self) -> Result<()> {
    self.add_doctor(1001, "Dr. Ahmed", "Cardiology")?;
    self.add_doctor(1002, "Dr. Sara", "Pediatrics")?;
    self.add_doctor(1003, "Dr. Omar", "Orthopedics")?;
    Ok(())
  }

  // ── Registration ──────────────────────────────────────────────────────

  /// True if any patient or doctor, active or not, holds `id`.
  pub fn is_id_taken(&self, id: PersonId) -> bool {
    self.patients.iter().any(|p| p.id == id)
      || self.doctors.iter().any(|d| d.id == id)
  }

  pub fn register_patient(
    &mut self,
    id: PersonId,
    name: impl Into<String>,
  ) -> Result<&Patient> {
    if self.is_id_taken(id) {
      return Err(Error::DuplicateId(id));
    }
    let idx = self.patients.len();
    self.patients.push(Patient::new(id, name));
    Ok(&self.patients[idx])
  }

  pub fn add_doctor(
    &mut self,
    id: PersonId,
    name: impl Into<String>,
    specialization: impl Into<String>,
  ) -> Result<&Doctor> {
    if self.is_id_taken(id) {
      return Err(Error::DuplicateId(id));
    }
    let mut doctor = Doctor::new(id, name, specialization);
    // Directory-created doctors are wired to the prescription service.
    doctor.prescriber = true;
    let idx = self.doctors.len();
    self.doctors.push(doctor);
    Ok(&self.doctors[idx])
  }

  // ── Lookup ────────────────────────────────────────────────────────────

  /// The active patient with `id`, if any. Disabled patients are invisible
  /// here even though their data is retained.
  pub fn find_patient(&self, id: PersonId) -> Option<&Patient> {
    self.patients.iter().find(|p| p.id == id && p.active)
  }

  pub fn find_patient_mut(&mut self, id: PersonId) -> Option<&mut Patient> {
    self.patients.iter_mut().find(|p| p.id == id && p.active)
  }

  pub fn find_doctor(&self, id: PersonId) -> Option<&Doctor> {
    self.doctors.iter().find(|d| d.id == id && d.active)
  }

  // ── Disabling ─────────────────────────────────────────────────────────

  /// Hide a patient from lookup and listing. Reported as not found when the
  /// id does not resolve to an active patient (including one already
  /// disabled).
  pub fn disable_patient(&mut self, id: PersonId) -> Result<()> {
    match self.find_patient_mut(id) {
      Some(p) => {
        p.active = false;
        Ok(())
      }
      None => Err(Error::PatientNotFound(id)),
    }
  }

  pub fn disable_doctor(&mut self, id: PersonId) -> Result<()> {
    match self.doctors.iter_mut().find(|d| d.id == id && d.active) {
      Some(d) => {
        d.active = false;
        Ok(())
      }
      None => Err(Error::DoctorNotFound(id)),
    }
  }

  // ── Listings ──────────────────────────────────────────────────────────

  /// Active patients in insertion order.
  pub fn active_patients(&self) -> impl Iterator<Item = &Patient> {
    self.patients.iter().filter(|p| p.active)
  }

  /// Active doctors in insertion order.
  pub fn active_doctors(&self) -> impl Iterator<Item = &Doctor> {
    self.doctors.iter().filter(|d| d.active)
  }

  /// Distinct specializations of active doctors, in first-seen order.
  pub fn specializations(&self) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for d in self.active_doctors() {
      if !out.contains(&d.specialization.as_str()) {
        out.push(&d.specialization);
      }
    }
    out
  }

  /// Active doctors with the given specialization, in insertion order.
  pub fn doctors_in<'a>(
    &'a self,
    specialization: &'a str,
  ) -> impl Iterator<Item = &'a Doctor> + 'a {
    self
      .active_doctors()
      .filter(move |d| d.specialization == specialization)
  }

  // ── Historical display ────────────────────────────────────────────────

  /// Resolve a name regardless of the active flag, so historical
  /// appointments and prescriptions stay printable after a disable.
  pub fn display_name(&self, id: PersonId) -> Option<&str> {
    self
      .patients
      .iter()
      .find(|p| p.id == id)
      .map(|p| p.name.as_str())
      .or_else(|| {
        self
          .doctors
          .iter()
          .find(|d| d.id == id)
          .map(|d| d.name.as_str())
      })
  }

  /// Specialization lookup across all doctors, active or not.
  pub fn specialization_of(&self, id: PersonId) -> Option<&str> {
    self
      .doctors
      .iter()
      .find(|d| d.id == id)
      .map(|d| d.specialization.as_str())
  }
}
