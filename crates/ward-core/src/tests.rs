//! Unit tests for the directory, scheduler, and record keeper.

use crate::{
  Error,
  directory::Directory,
  person::{Doctor, Person},
  records::{RecordKeeper, RecordOutcome},
  schedule::{HourlyDay, Scheduler, SlotLabel, SlotSource},
};

fn seeded_directory() -> Directory {
  let mut d = Directory::new();
  d.seed_doctors().unwrap();
  d
}

fn scheduler() -> Scheduler { Scheduler::new(Box::new(HourlyDay)) }

// ─── Directory ───────────────────────────────────────────────────────────────

#[test]
fn register_and_find_patient() {
  let mut dir = Directory::new();
  dir.register_patient(5, "Alice").unwrap();

  let p = dir.find_patient(5).unwrap();
  assert_eq!(p.name(), "Alice");
  assert!(p.is_active());
  assert!(p.record.is_none());
  assert!(p.appointment.is_none());
}

#[test]
fn find_patient_missing_returns_none() {
  let dir = Directory::new();
  assert!(dir.find_patient(42).is_none());
}

#[test]
fn ids_share_one_namespace_across_roles() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();

  assert!(dir.is_id_taken(5));
  assert!(dir.is_id_taken(1001));

  // A doctor cannot take a patient's id, nor vice versa.
  assert!(matches!(
    dir.add_doctor(5, "Dr. X", "Dermatology"),
    Err(Error::DuplicateId(5))
  ));
  assert!(matches!(
    dir.register_patient(1001, "Bob"),
    Err(Error::DuplicateId(1001))
  ));
  // And a second registration with the same id fails too.
  assert!(matches!(
    dir.register_patient(5, "Bob"),
    Err(Error::DuplicateId(5))
  ));
}

#[test]
fn seed_doctors_installs_three() {
  let dir = seeded_directory();

  let ids: Vec<_> = dir.active_doctors().map(|d| d.id).collect();
  assert_eq!(ids, vec![1001, 1002, 1003]);
  assert_eq!(dir.find_doctor(1002).unwrap().specialization, "Pediatrics");
  assert!(dir.active_doctors().all(|d| d.prescriber));
}

#[test]
fn disable_patient_hides_but_retains() {
  let mut dir = Directory::new();
  dir.register_patient(5, "Alice").unwrap();
  dir.register_patient(6, "Bob").unwrap();

  dir.disable_patient(5).unwrap();

  assert!(dir.find_patient(5).is_none());
  let listed: Vec<_> = dir.active_patients().map(|p| p.id).collect();
  assert_eq!(listed, vec![6]);
  // Historical rendering still resolves the name.
  assert_eq!(dir.display_name(5), Some("Alice"));
}

#[test]
fn disable_missing_or_already_disabled_reports_not_found() {
  let mut dir = Directory::new();
  dir.register_patient(5, "Alice").unwrap();

  assert!(matches!(
    dir.disable_patient(99),
    Err(Error::PatientNotFound(99))
  ));

  dir.disable_patient(5).unwrap();
  // A second disable no longer resolves to an active patient.
  assert!(matches!(
    dir.disable_patient(5),
    Err(Error::PatientNotFound(5))
  ));
}

#[test]
fn disable_doctor_hides_from_lookup_and_listing() {
  let mut dir = seeded_directory();
  dir.disable_doctor(1001).unwrap();

  assert!(dir.find_doctor(1001).is_none());
  let listed: Vec<_> = dir.active_doctors().map(|d| d.id).collect();
  assert_eq!(listed, vec![1002, 1003]);
  assert!(matches!(
    dir.disable_doctor(1001),
    Err(Error::DoctorNotFound(1001))
  ));
  // Name and specialization stay resolvable for the ledger.
  assert_eq!(dir.display_name(1001), Some("Dr. Ahmed"));
  assert_eq!(dir.specialization_of(1001), Some("Cardiology"));
}

#[test]
fn listings_preserve_insertion_order() {
  let mut dir = Directory::new();
  for (id, name) in [(9, "Carol"), (3, "Dave"), (7, "Erin")] {
    dir.register_patient(id, name).unwrap();
  }
  let ids: Vec<_> = dir.active_patients().map(|p| p.id).collect();
  assert_eq!(ids, vec![9, 3, 7]);
}

#[test]
fn specializations_distinct_first_seen_order() {
  let mut dir = seeded_directory();
  dir.add_doctor(1004, "Dr. Lina", "Cardiology").unwrap();
  dir.add_doctor(1005, "Dr. Hany", "Neurology").unwrap();

  assert_eq!(
    dir.specializations(),
    vec!["Cardiology", "Pediatrics", "Orthopedics", "Neurology"]
  );

  // Disabling the only pediatrician drops the specialization.
  dir.disable_doctor(1002).unwrap();
  assert_eq!(
    dir.specializations(),
    vec!["Cardiology", "Orthopedics", "Neurology"]
  );

  let cardio: Vec<_> = dir.doctors_in("Cardiology").map(|d| d.id).collect();
  assert_eq!(cardio, vec![1001, 1004]);
}

// ─── Scheduler ───────────────────────────────────────────────────────────────

#[test]
fn hourly_day_grid_in_order() {
  assert_eq!(
    HourlyDay.slots(),
    vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00"]
  );
}

#[test]
fn booking_marks_slot_taken_and_sets_patient_pointer() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  let mut sched = scheduler();

  let patient = dir.find_patient_mut(5).unwrap();
  let appt = sched.book(patient, 1001, "2024-01-01", "09:00").unwrap();
  assert_eq!(appt.id, 1);

  assert!(sched.is_doctor_slot_taken(1001, "2024-01-01", "09:00"));
  assert!(sched.has_patient_conflict(5, "2024-01-01", "09:00"));
  assert_eq!(dir.find_patient(5).unwrap().appointment, Some(1));
}

#[test]
fn double_booking_a_doctor_slot_fails() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  dir.register_patient(6, "Bob").unwrap();
  let mut sched = scheduler();

  let alice = dir.find_patient_mut(5).unwrap();
  sched.book(alice, 1001, "2024-01-01", "09:00").unwrap();

  let bob = dir.find_patient_mut(6).unwrap();
  let err = sched.book(bob, 1001, "2024-01-01", "09:00").unwrap_err();
  assert!(matches!(err, Error::SlotTaken { doctor: 1001, .. }));
  // The losing patient's state is untouched.
  assert!(bob.appointment.is_none());
}

#[test]
fn patient_conflict_is_doctor_agnostic() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  let mut sched = scheduler();

  let alice = dir.find_patient_mut(5).unwrap();
  sched.book(alice, 1001, "2024-01-01", "09:00").unwrap();

  // Same date and time with a different doctor still conflicts; the
  // session layer refuses before ever calling `book`.
  assert!(sched.has_patient_conflict(5, "2024-01-01", "09:00"));
  assert!(!sched.has_patient_conflict(5, "2024-01-01", "10:00"));
  assert!(!sched.has_patient_conflict(5, "2024-01-02", "09:00"));
}

#[test]
fn available_slots_shrink_in_grid_order() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  let mut sched = scheduler();

  assert_eq!(sched.available_slots(1001, "2024-01-01").len(), 7);

  let alice = dir.find_patient_mut(5).unwrap();
  sched.book(alice, 1001, "2024-01-01", "11:00").unwrap();

  let free = sched.available_slots(1001, "2024-01-01");
  assert_eq!(
    free,
    vec!["09:00", "10:00", "12:00", "13:00", "14:00", "15:00"]
  );
  // Another doctor's grid is unaffected.
  assert_eq!(sched.available_slots(1002, "2024-01-01").len(), 7);
}

#[test]
fn failed_bookings_leave_no_id_gaps() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  dir.register_patient(6, "Bob").unwrap();
  let mut sched = scheduler();

  let alice = dir.find_patient_mut(5).unwrap();
  assert_eq!(
    sched.book(alice, 1001, "2024-01-01", "09:00").unwrap().id,
    1
  );

  let bob = dir.find_patient_mut(6).unwrap();
  sched.book(bob, 1001, "2024-01-01", "09:00").unwrap_err();

  let bob = dir.find_patient_mut(6).unwrap();
  assert_eq!(
    sched.book(bob, 1001, "2024-01-01", "10:00").unwrap().id,
    2
  );
}

#[test]
fn rebooking_overwrites_pointer_but_keeps_ledger() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  let mut sched = scheduler();

  let alice = dir.find_patient_mut(5).unwrap();
  sched.book(alice, 1001, "2024-01-01", "09:00").unwrap();
  let alice = dir.find_patient_mut(5).unwrap();
  sched.book(alice, 1002, "2024-01-02", "10:00").unwrap();

  // The pointer tracks the most recent booking only.
  assert_eq!(dir.find_patient(5).unwrap().appointment, Some(2));
  // Both appointments survive in the ledger.
  assert!(sched.appointment(1).is_some());
  assert!(sched.appointment(2).is_some());
  assert_eq!(sched.doctor_appointments(1001).len(), 1);
  assert_eq!(sched.doctor_appointments(1002).len(), 1);
}

#[test]
fn doctor_appointments_in_ledger_order() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  dir.register_patient(6, "Bob").unwrap();
  let mut sched = scheduler();

  let alice = dir.find_patient_mut(5).unwrap();
  sched.book(alice, 1001, "2024-01-02", "10:00").unwrap();
  let bob = dir.find_patient_mut(6).unwrap();
  sched.book(bob, 1001, "2024-01-01", "09:00").unwrap();

  let ids: Vec<_> = sched.doctor_appointments(1001).iter().map(|a| a.id).collect();
  assert_eq!(ids, vec![1, 2]);
}

struct TwoSlots;

impl SlotSource for TwoSlots {
  fn slots(&self) -> Vec<SlotLabel> {
    vec!["08:30".to_string(), "09:30".to_string()]
  }
}

#[test]
fn alternate_slot_grid_is_honoured() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  let mut sched = Scheduler::new(Box::new(TwoSlots));

  assert_eq!(sched.available_slots(1001, "2024-01-01"), vec!["08:30", "09:30"]);

  let alice = dir.find_patient_mut(5).unwrap();
  sched.book(alice, 1001, "2024-01-01", "08:30").unwrap();
  assert_eq!(sched.available_slots(1001, "2024-01-01"), vec!["09:30"]);
}

// ─── RecordKeeper ────────────────────────────────────────────────────────────

#[test]
fn first_prescription_opens_a_record() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  let doctor = dir.find_doctor(1001).unwrap().clone();
  let mut keeper = RecordKeeper::new();

  let patient = dir.find_patient_mut(5).unwrap();
  let issued = keeper
    .issue_prescription(&doctor, patient, "Aspirin", "500mg", "flu")
    .unwrap();

  assert_eq!(issued.prescription, 1);
  assert_eq!(issued.record, RecordOutcome::Created(1));
  assert_eq!(patient.record, Some(1));

  let rec = keeper.record(1).unwrap();
  assert_eq!(rec.history, "flu");
  assert_eq!(rec.prescription, 1);
  assert_eq!(keeper.prescription(1).unwrap().medicine, "Aspirin");
}

#[test]
fn second_prescription_updates_the_same_record() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  let doctor = dir.find_doctor(1001).unwrap().clone();
  let mut keeper = RecordKeeper::new();

  let patient = dir.find_patient_mut(5).unwrap();
  keeper
    .issue_prescription(&doctor, patient, "Aspirin", "500mg", "flu")
    .unwrap();
  let issued = keeper
    .issue_prescription(&doctor, patient, "Ibuprofen", "200mg", "cold")
    .unwrap();

  assert_eq!(issued.prescription, 2);
  // The record keeps id 1; the next record id was not consumed.
  assert_eq!(issued.record, RecordOutcome::Updated(1));
  assert_eq!(keeper.records().len(), 1);

  let rec = keeper.record_for(patient).unwrap();
  assert_eq!(rec.id, 1);
  assert_eq!(rec.history, "cold");
  assert_eq!(rec.prescription, 2);

  // The superseded prescription stays in the ledger.
  assert_eq!(keeper.prescriptions().len(), 2);
  assert_eq!(keeper.prescription(1).unwrap().medicine, "Aspirin");

  // A third patient-record never appears.
  keeper
    .issue_prescription(&doctor, patient, "Paracetamol", "1g", "fever")
    .unwrap();
  assert_eq!(keeper.records().len(), 1);
}

#[test]
fn non_prescriber_doctor_is_rejected_without_side_effects() {
  let mut dir = Directory::new();
  dir.register_patient(5, "Alice").unwrap();
  // Constructed directly, so never wired to the prescription service.
  let locum = Doctor::new(2001, "Dr. Nour", "Cardiology");
  let mut keeper = RecordKeeper::new();

  let patient = dir.find_patient_mut(5).unwrap();
  let err = keeper
    .issue_prescription(&locum, patient, "Aspirin", "500mg", "flu")
    .unwrap_err();

  assert!(matches!(err, Error::PrescribingUnavailable(2001)));
  assert!(keeper.prescriptions().is_empty());
  assert!(keeper.records().is_empty());
  assert!(patient.record.is_none());

  // The next prescription still gets id 1.
  let doctor = {
    let mut d = Doctor::new(2002, "Dr. Omar", "Cardiology");
    d.prescriber = true;
    d
  };
  let patient = dir.find_patient_mut(5).unwrap();
  let issued = keeper
    .issue_prescription(&doctor, patient, "Aspirin", "500mg", "flu")
    .unwrap();
  assert_eq!(issued.prescription, 1);
}

// ─── Cross-component scenario ────────────────────────────────────────────────

#[test]
fn booking_scenario_from_registration_to_conflicts() {
  let mut dir = seeded_directory();
  dir.register_patient(5, "Alice").unwrap();
  dir.register_patient(6, "Bob").unwrap();
  let mut sched = scheduler();

  // Alice books the first slot of the day with Dr. Ahmed.
  let alice = dir.find_patient_mut(5).unwrap();
  let appt = sched.book(alice, 1001, "2024-01-01", "09:00").unwrap();
  assert_eq!(appt.id, 1);

  // Bob cannot take the same (doctor, date, time) slot.
  let bob = dir.find_patient_mut(6).unwrap();
  assert!(matches!(
    sched.book(bob, 1001, "2024-01-01", "09:00"),
    Err(Error::SlotTaken { .. })
  ));

  // Alice cannot hold a second appointment at that date and time even with
  // another doctor; the caller-side check catches it.
  assert!(sched.has_patient_conflict(5, "2024-01-01", "09:00"));

  // Disabling Dr. Ahmed afterwards leaves the appointment displayable.
  dir.disable_doctor(1001).unwrap();
  let appt = sched.appointment(1).unwrap();
  assert_eq!(dir.display_name(appt.doctor), Some("Dr. Ahmed"));
  assert_eq!(dir.display_name(appt.patient), Some("Alice"));
}
