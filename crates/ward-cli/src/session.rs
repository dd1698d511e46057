//! The interactive menu session — role selection and the per-role flows.
//!
//! This layer owns all console I/O and every cross-component step: it
//! resolves people through the directory, checks the patient side of a
//! booking before handing the commit to the scheduler, and routes
//! prescriptions to the record keeper. The core components never call one
//! another.

use anyhow::Result;
use chrono::{Duration, Local};
use tracing::{info, warn};

use ward_core::{
  directory::Directory,
  person::PersonId,
  records::{RecordKeeper, RecordOutcome},
  schedule::{HourlyDay, Scheduler},
};

use crate::{format, prompt};

/// `days` consecutive `YYYY-MM-DD` strings starting today.
fn booking_window(days: u32) -> Vec<String> {
  let today = Local::now().date_naive();
  (0..i64::from(days))
    .map(|i| (today + Duration::days(i)).format("%Y-%m-%d").to_string())
    .collect()
}

// ─── Hospital ─────────────────────────────────────────────────────────────────

/// Top-level state for one interactive session.
pub struct Hospital {
  directory: Directory,
  scheduler: Scheduler,
  keeper:    RecordKeeper,
  /// Length of the booking window offered to patients, in days.
  days: u32,
}

impl Hospital {
  pub fn new(days: u32) -> Result<Self> {
    let mut directory = Directory::new();
    directory.seed_doctors()?;
    Ok(Self {
      directory,
      scheduler: Scheduler::new(Box::new(HourlyDay)),
      keeper: RecordKeeper::new(),
      days,
    })
  }

  /// Run the top-level role menu until the user exits.
  pub fn run(&mut self) -> Result<()> {
    loop {
      println!("\n--- Hospital ---");
      println!("1) Admin");
      println!("2) Doctor");
      println!("3) Patient");
      println!("0) Exit");
      match prompt::read_u32("Choose: ")? {
        1 => self.admin_menu()?,
        2 => self.doctor_login()?,
        3 => self.patient_portal()?,
        0 => break,
        _ => println!("Invalid choice"),
      }
    }
    println!("Goodbye");
    Ok(())
  }

  // ── Admin ─────────────────────────────────────────────────────────────

  fn admin_menu(&mut self) -> Result<()> {
    info!("admin logged in");
    loop {
      println!("\n--- Admin ---");
      println!("1) Disable patient");
      println!("2) Disable doctor");
      println!("3) List patients");
      println!("4) List doctors");
      println!("5) Add doctor");
      println!("0) Logout");
      match prompt::read_u32("Choose: ")? {
        1 => {
          let id = prompt::read_u32("Patient id: ")?;
          match self.directory.disable_patient(id) {
            Ok(()) => {
              info!(id, "patient disabled");
              println!("Patient {id} disabled");
            }
            Err(e) => println!("{e}"),
          }
        }
        2 => {
          let id = prompt::read_u32("Doctor id: ")?;
          match self.directory.disable_doctor(id) {
            Ok(()) => {
              info!(id, "doctor disabled");
              println!("Doctor {id} disabled");
            }
            Err(e) => println!("{e}"),
          }
        }
        3 => {
          println!("--- Patients ---");
          for p in self.directory.active_patients() {
            println!("{} | {}", p.id, p.name);
          }
        }
        4 => {
          println!("--- Doctors ---");
          for d in self.directory.active_doctors() {
            println!("{} | {} | {}", d.id, d.name, d.specialization);
          }
        }
        5 => self.add_doctor()?,
        0 => break,
        _ => println!("Invalid choice"),
      }
    }
    info!("admin logged out");
    Ok(())
  }

  fn add_doctor(&mut self) -> Result<()> {
    let id = prompt::read_u32("New doctor id: ")?;
    let name = prompt::read_line("Name: ")?;
    let specialization = prompt::read_line("Specialization: ")?;
    match self.directory.add_doctor(id, name, specialization) {
      Ok(d) => {
        info!(id = d.id, "doctor added");
        println!("Doctor {} added", d.name);
      }
      Err(e) => println!("{e}"),
    }
    Ok(())
  }

  // ── Doctor ────────────────────────────────────────────────────────────

  fn doctor_login(&mut self) -> Result<()> {
    let id = prompt::read_u32("Doctor id: ")?;
    let Some(doctor) = self.directory.find_doctor(id) else {
      println!("Doctor not found or disabled");
      return Ok(());
    };
    let name = doctor.name.clone();
    info!(id, "doctor logged in");
    println!("{name} (Doctor) logged in");

    loop {
      println!("\n--- Doctor ({name}) ---");
      println!("1) My appointments");
      println!("2) Write prescription");
      println!("0) Logout");
      match prompt::read_u32("Choose: ")? {
        1 => {
          let list = self.scheduler.doctor_appointments(id);
          if list.is_empty() {
            println!("No appointments");
          } else {
            for a in list {
              println!("{}", format::appointment(a, &self.directory));
            }
          }
        }
        2 => self.write_prescription(id)?,
        0 => break,
        _ => println!("Invalid choice"),
      }
    }

    info!(id, "doctor logged out");
    println!("{name} logged out");
    Ok(())
  }

  fn write_prescription(&mut self, doctor_id: PersonId) -> Result<()> {
    let patient_id = prompt::read_u32("Patient id: ")?;
    if self.directory.find_patient(patient_id).is_none() {
      println!("Patient not found");
      return Ok(());
    }
    let medicine = prompt::read_line("Medicine: ")?;
    let dosage = prompt::read_line("Dosage: ")?;
    let history = prompt::read_line("History: ")?;

    // Clone the doctor so the patient can be borrowed mutably below.
    let Some(doctor) = self.directory.find_doctor(doctor_id).cloned() else {
      println!("Doctor not found or disabled");
      return Ok(());
    };
    let Some(patient) = self.directory.find_patient_mut(patient_id) else {
      println!("Patient not found");
      return Ok(());
    };

    match self
      .keeper
      .issue_prescription(&doctor, patient, medicine, dosage, history)
    {
      Ok(issued) => {
        info!(
          prescription = issued.prescription,
          doctor = doctor_id,
          patient = patient_id,
          "prescription issued"
        );
        match issued.record {
          RecordOutcome::Created(rec) => {
            println!(
              "Prescription #{} issued; record #{rec} opened",
              issued.prescription
            );
          }
          RecordOutcome::Updated(rec) => {
            println!(
              "Prescription #{} issued; record #{rec} updated",
              issued.prescription
            );
          }
        }
      }
      Err(e) => {
        warn!(doctor = doctor_id, error = %e, "prescription failed");
        println!("{e}");
      }
    }
    Ok(())
  }

  // ── Patient ───────────────────────────────────────────────────────────

  fn patient_portal(&mut self) -> Result<()> {
    loop {
      println!("\n--- Patient portal ---");
      println!("1) Register");
      println!("2) Login");
      println!("0) Back");
      match prompt::read_u32("Choose: ")? {
        1 => {
          let id = prompt::read_u32("Id: ")?;
          let name = prompt::read_line("Name: ")?;
          match self.directory.register_patient(id, name) {
            Ok(p) => {
              info!(id = p.id, "patient registered");
              println!("Registered {}", p.name);
            }
            Err(e) => println!("{e}"),
          }
        }
        2 => {
          let id = prompt::read_u32("Id: ")?;
          let Some(patient) = self.directory.find_patient(id) else {
            println!("Not found or disabled");
            continue;
          };
          let name = patient.name.clone();
          info!(id, "patient logged in");
          println!("{name} (Patient) logged in");
          self.patient_menu(id, &name)?;
          info!(id, "patient logged out");
          println!("{name} logged out");
        }
        0 => break,
        _ => println!("Invalid choice"),
      }
    }
    Ok(())
  }

  fn patient_menu(&mut self, id: PersonId, name: &str) -> Result<()> {
    loop {
      println!("\n--- Patient ({name}) ---");
      println!("1) Book appointment");
      println!("2) View appointment");
      println!("3) View record");
      println!("0) Logout");
      match prompt::read_u32("Choose: ")? {
        1 => self.book_appointment(id)?,
        2 => {
          let appt = self
            .directory
            .find_patient(id)
            .and_then(|p| p.appointment)
            .and_then(|aid| self.scheduler.appointment(aid));
          match appt {
            Some(a) => println!("{}", format::appointment(a, &self.directory)),
            None => println!("No appointment"),
          }
        }
        3 => {
          let record = self
            .directory
            .find_patient(id)
            .and_then(|p| self.keeper.record_for(p));
          match record {
            Some(r) => {
              println!("{}", format::record(r, &self.keeper, &self.directory));
            }
            None => println!("No medical record for {name}"),
          }
        }
        0 => break,
        _ => println!("Invalid choice"),
      }
    }
    Ok(())
  }

  /// The booking flow: specialization, doctor, date, slot — then the
  /// patient-side conflict check, then the scheduler's commit (which
  /// re-checks the doctor's slot).
  fn book_appointment(&mut self, patient_id: PersonId) -> Result<()> {
    let specializations: Vec<String> = self
      .directory
      .specializations()
      .iter()
      .map(|s| s.to_string())
      .collect();
    if specializations.is_empty() {
      println!("No doctors available");
      return Ok(());
    }
    println!("\nSpecializations:");
    for (i, s) in specializations.iter().enumerate() {
      println!("{i}) {s}");
    }
    let Some(si) = prompt::read_index("Choose: ", specializations.len())? else {
      println!("Invalid choice");
      return Ok(());
    };
    let specialization = &specializations[si];

    println!("\nDoctors in {specialization}:");
    for d in self.directory.doctors_in(specialization) {
      println!("{} - {}", d.id, d.name);
    }
    let doctor_id = prompt::read_u32("Doctor id: ")?;
    match self.directory.find_doctor(doctor_id) {
      Some(d) if d.specialization == *specialization => {}
      _ => {
        println!("Doctor not available");
        return Ok(());
      }
    }

    let dates = booking_window(self.days);
    println!("\nDates:");
    for (i, d) in dates.iter().enumerate() {
      println!("{i}) {d}");
    }
    let Some(di) = prompt::read_index("Choose date: ", dates.len())? else {
      println!("Invalid choice");
      return Ok(());
    };
    let date = &dates[di];

    let free = self.scheduler.available_slots(doctor_id, date);
    if free.is_empty() {
      println!("No free slots");
      return Ok(());
    }
    println!("\nFree slots:");
    for (i, t) in free.iter().enumerate() {
      println!("{i}) {t}");
    }
    let Some(ti) = prompt::read_index("Choose slot: ", free.len())? else {
      println!("Invalid choice");
      return Ok(());
    };
    let time = &free[ti];

    // Patient-side check first; the scheduler re-checks the doctor's slot
    // at commit.
    if self.scheduler.has_patient_conflict(patient_id, date, time) {
      println!("You already have an appointment at that time");
      return Ok(());
    }
    let Some(patient) = self.directory.find_patient_mut(patient_id) else {
      println!("Patient not found");
      return Ok(());
    };
    match self.scheduler.book(patient, doctor_id, date, time) {
      Ok(a) => {
        info!(
          appointment = a.id,
          doctor = doctor_id,
          patient = patient_id,
          %date,
          %time,
          "appointment booked"
        );
        println!("Booked:");
        println!("{}", format::appointment(a, &self.directory));
      }
      Err(e) => {
        warn!(doctor = doctor_id, error = %e, "booking conflict");
        println!("{e}");
      }
    }
    Ok(())
  }
}
