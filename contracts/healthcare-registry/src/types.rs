use soroban_sdk::{contracterror, contracttype, Address, String};

/// Longest accepted free-text field, in bytes.
pub const MAX_TEXT_LEN: u32 = 120;
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 150;

/// Failure reasons for every registry operation.
///
/// Codes 1-3 are identity conflicts, 4-5 and 10 are input validation,
/// 6-7 and 12 are authorization failures, 8-9 and 11 are missing entities.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    DoctorAlreadyRegistered = 1,
    PatientAlreadyRegistered = 2,
    CannotBeBothRoles = 3,
    InvalidStringLength = 4,
    InvalidAge = 5,
    NotARegisteredPatient = 6,
    NotARegisteredDoctor = 7,
    DoctorDoesNotExist = 8,
    PatientDoesNotExist = 9,
    StartTimeNotInFuture = 10,
    AppointmentNotFound = 11,
    NotYourAppointment = 12,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub addr: Address,
    pub name: String,
    pub specialty: String,
    pub license_id: String,
    pub exists: bool,
    /// Doctors self-approve on registration.
    pub approved: bool,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub addr: Address,
    pub name: String,
    pub age: u32,
    pub exists: bool,
    pub created_at: u64,
}

/// What an address is registered as. One entry per address, so an
/// address can never hold both roles.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Member {
    Doctor(Doctor),
    Patient(Patient),
}

/// Role derived from the member entry of an address.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    None,
    Doctor,
    Patient,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppointmentStatus {
    Booked,
    Completed,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Appointment {
    pub id: u64,
    pub patient: Address,
    pub doctor: Address,
    pub start_time: u64,
    pub reason: String,
    pub status: AppointmentStatus,
    pub created_at: u64,
}

/// Diagnosis and prescription attached to a single appointment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub exists: bool,
    pub appointment_id: u64,
    pub doctor: Address,
    pub diagnosis: String,
    pub prescription: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub total_doctors: u64,
    pub total_patients: u64,
    pub total_appointments: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Running counters (instance storage).
    Stats,
    /// Last issued appointment id (instance storage).
    AppointmentCounter,
    /// address -> Member
    Member(Address),
    /// Vec<Address> of doctors in registration order
    DoctorList,
    /// Vec<Address> of patients in registration order
    PatientList,
    /// appointment_id -> Appointment
    Appointment(u64),
    /// patient -> Vec<u64> (appointment ids)
    PatientAppointments(Address),
    /// doctor -> Vec<u64> (appointment ids)
    DoctorAppointments(Address),
    /// appointment_id -> Note
    Note(u64),
}
