#![no_std]

mod access;
mod events;
mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use events::{
    AppointmentBookedEvent, DoctorRegisteredEvent, NoteAddedEvent, PatientRegisteredEvent,
};
pub use types::{
    Appointment, AppointmentStatus, Doctor, Error, Note, Patient, Role, Stats, MAX_AGE,
    MAX_TEXT_LEN, MIN_AGE,
};

use access::{require_doctor, require_patient, require_unregistered, role_of};
use storage::*;
use validation::{check_age, check_text};

#[contract]
pub struct HealthcareRegistry;

/// Shared tail of both booking entry points. Both parties must already be
/// verified as registered.
fn book(
    env: &Env,
    patient: Address,
    doctor: Address,
    start_time: u64,
    reason: String,
) -> Result<u64, Error> {
    if start_time <= env.ledger().timestamp() {
        return Err(Error::StartTimeNotInFuture);
    }
    check_text(&reason)?;

    let id = next_appointment_id(env);
    let appt = Appointment {
        id,
        patient: patient.clone(),
        doctor: doctor.clone(),
        start_time,
        reason,
        status: AppointmentStatus::Booked,
        created_at: env.ledger().timestamp(),
    };

    save_new_appointment(env, &appt);
    bump_instance(env);

    events::publish_appointment_booked(env, id, patient.clone(), doctor.clone(), start_time);
    log!(env, "appointment booked", id, patient, doctor);

    Ok(id)
}

#[contractimpl]
impl HealthcareRegistry {
    // -------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------

    /// Registers the caller as a doctor. Doctors are approved immediately.
    pub fn register_doctor(
        env: Env,
        caller: Address,
        name: String,
        specialty: String,
        license_id: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        require_unregistered(&env, &caller, Role::Doctor)?;
        check_text(&name)?;
        check_text(&specialty)?;
        check_text(&license_id)?;

        let doctor = Doctor {
            addr: caller.clone(),
            name: name.clone(),
            specialty: specialty.clone(),
            license_id,
            exists: true,
            approved: true,
            created_at: env.ledger().timestamp(),
        };

        save_doctor(&env, &doctor);
        bump_instance(&env);

        events::publish_doctor_registered(&env, caller.clone(), name, specialty);
        log!(&env, "doctor registered", caller);

        Ok(())
    }

    /// Registers the caller as a patient aged `age`.
    pub fn register_patient(
        env: Env,
        caller: Address,
        name: String,
        age: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        require_unregistered(&env, &caller, Role::Patient)?;
        check_age(age)?;
        check_text(&name)?;

        let patient = Patient {
            addr: caller.clone(),
            name: name.clone(),
            age,
            exists: true,
            created_at: env.ledger().timestamp(),
        };

        save_patient(&env, &patient);
        bump_instance(&env);

        events::publish_patient_registered(&env, caller.clone(), name);
        log!(&env, "patient registered", caller);

        Ok(())
    }

    // -------------------------------------------------------------------
    // Appointments
    // -------------------------------------------------------------------

    /// Books an appointment with `doctor` on behalf of the calling patient.
    /// Returns the new appointment id.
    pub fn book_appointment(
        env: Env,
        caller: Address,
        doctor: Address,
        start_time: u64,
        reason: String,
    ) -> Result<u64, Error> {
        caller.require_auth();

        require_patient(&env, &caller)?;
        load_doctor(&env, &doctor).ok_or(Error::DoctorDoesNotExist)?;

        book(&env, caller, doctor, start_time, reason)
    }

    /// Books an appointment with the calling doctor for `patient`.
    pub fn book_appointment_for_patient(
        env: Env,
        caller: Address,
        patient: Address,
        start_time: u64,
        reason: String,
    ) -> Result<u64, Error> {
        caller.require_auth();

        require_doctor(&env, &caller)?;
        load_patient(&env, &patient).ok_or(Error::PatientDoesNotExist)?;

        book(&env, patient, caller, start_time, reason)
    }

    // -------------------------------------------------------------------
    // Notes
    // -------------------------------------------------------------------

    /// Writes the note for an appointment the caller is the doctor on.
    /// An existing note is overwritten and keeps its original `created_at`.
    pub fn add_or_update_note(
        env: Env,
        caller: Address,
        appointment_id: u64,
        diagnosis: String,
        prescription: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        require_doctor(&env, &caller)?;

        let appt = load_appointment(&env, appointment_id).ok_or(Error::AppointmentNotFound)?;
        if appt.doctor != caller {
            return Err(Error::NotYourAppointment);
        }

        check_text(&diagnosis)?;
        check_text(&prescription)?;

        let now = env.ledger().timestamp();
        let created_at = load_note(&env, appointment_id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let note = Note {
            exists: true,
            appointment_id,
            doctor: caller.clone(),
            diagnosis,
            prescription,
            created_at,
            updated_at: now,
        };

        save_note(&env, &note);
        bump_instance(&env);

        events::publish_note_added(&env, appointment_id, caller.clone());
        log!(&env, "note written", appointment_id, caller);

        Ok(())
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// All doctors in registration order.
    ///
    /// Reads one entry per doctor, so the result is bounded by the host's
    /// read-footprint limits.
    pub fn list_doctors(env: Env) -> Vec<Doctor> {
        load_doctor_list(&env)
    }

    /// All patients in registration order. Bounded like `list_doctors`.
    pub fn list_patients(env: Env) -> Vec<Patient> {
        load_patient_list(&env)
    }

    pub fn get_doctor(env: Env, addr: Address) -> Result<Doctor, Error> {
        load_doctor(&env, &addr).ok_or(Error::DoctorDoesNotExist)
    }

    pub fn get_patient(env: Env, addr: Address) -> Result<Patient, Error> {
        load_patient(&env, &addr).ok_or(Error::PatientDoesNotExist)
    }

    pub fn get_appointment(env: Env, appointment_id: u64) -> Result<Appointment, Error> {
        load_appointment(&env, appointment_id).ok_or(Error::AppointmentNotFound)
    }

    /// Appointments booked for the calling patient, oldest first.
    pub fn get_my_appointments_as_patient(
        env: Env,
        caller: Address,
    ) -> Result<Vec<Appointment>, Error> {
        caller.require_auth();
        require_patient(&env, &caller)?;
        Ok(load_patient_appointments(&env, &caller))
    }

    /// Appointments booked with the calling doctor, oldest first.
    pub fn get_my_appointments_as_doctor(
        env: Env,
        caller: Address,
    ) -> Result<Vec<Appointment>, Error> {
        caller.require_auth();
        require_doctor(&env, &caller)?;
        Ok(load_doctor_appointments(&env, &caller))
    }

    /// Every appointment in id order.
    pub fn get_all_appointments(env: Env) -> Vec<Appointment> {
        load_all_appointments(&env)
    }

    /// The note on an appointment, `None` if none has been written.
    pub fn get_note(env: Env, appointment_id: u64) -> Option<Note> {
        load_note(&env, appointment_id)
    }

    pub fn stats(env: Env) -> Stats {
        load_stats(&env)
    }

    pub fn is_doctor(env: Env, addr: Address) -> bool {
        role_of(&env, &addr) == Role::Doctor
    }

    pub fn is_patient(env: Env, addr: Address) -> bool {
        role_of(&env, &addr) == Role::Patient
    }

    pub fn get_role(env: Env, addr: Address) -> Role {
        role_of(&env, &addr)
    }
}
