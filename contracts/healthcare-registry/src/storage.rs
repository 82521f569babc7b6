use soroban_sdk::{Address, Env, Vec};

use crate::types::{Appointment, DataKey, Doctor, Member, Note, Patient, Stats};

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BUMP_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn push_address(env: &Env, key: DataKey, addr: &Address) {
    let mut list: Vec<Address> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    list.push_back(addr.clone());
    env.storage().persistent().set(&key, &list);
    bump(env, &key);
}

fn push_id(env: &Env, key: DataKey, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&key, &ids);
    bump(env, &key);
}

// -----------------------------------------------------------------------
// Counters
// -----------------------------------------------------------------------

pub fn load_stats(env: &Env) -> Stats {
    env.storage()
        .instance()
        .get(&DataKey::Stats)
        .unwrap_or_default()
}

fn save_stats(env: &Env, stats: &Stats) {
    env.storage().instance().set(&DataKey::Stats, stats);
}

pub fn next_appointment_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::AppointmentCounter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage()
        .instance()
        .set(&DataKey::AppointmentCounter, &next);
    next
}

pub fn last_appointment_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AppointmentCounter)
        .unwrap_or(0)
}

// -----------------------------------------------------------------------
// Members
// -----------------------------------------------------------------------

pub fn load_member(env: &Env, addr: &Address) -> Option<Member> {
    env.storage()
        .persistent()
        .get(&DataKey::Member(addr.clone()))
}

pub fn load_doctor(env: &Env, addr: &Address) -> Option<Doctor> {
    match load_member(env, addr) {
        Some(Member::Doctor(doctor)) => Some(doctor),
        _ => None,
    }
}

pub fn load_patient(env: &Env, addr: &Address) -> Option<Patient> {
    match load_member(env, addr) {
        Some(Member::Patient(patient)) => Some(patient),
        _ => None,
    }
}

pub fn save_doctor(env: &Env, doctor: &Doctor) {
    let key = DataKey::Member(doctor.addr.clone());
    env.storage()
        .persistent()
        .set(&key, &Member::Doctor(doctor.clone()));
    bump(env, &key);

    push_address(env, DataKey::DoctorList, &doctor.addr);

    let mut stats = load_stats(env);
    stats.total_doctors += 1;
    save_stats(env, &stats);
}

pub fn save_patient(env: &Env, patient: &Patient) {
    let key = DataKey::Member(patient.addr.clone());
    env.storage()
        .persistent()
        .set(&key, &Member::Patient(patient.clone()));
    bump(env, &key);

    push_address(env, DataKey::PatientList, &patient.addr);

    let mut stats = load_stats(env);
    stats.total_patients += 1;
    save_stats(env, &stats);
}

pub fn load_doctor_list(env: &Env) -> Vec<Doctor> {
    let addrs: Vec<Address> = env
        .storage()
        .persistent()
        .get(&DataKey::DoctorList)
        .unwrap_or(Vec::new(env));

    let mut doctors = Vec::new(env);
    for addr in addrs.iter() {
        if let Some(doctor) = load_doctor(env, &addr) {
            doctors.push_back(doctor);
        }
    }
    doctors
}

pub fn load_patient_list(env: &Env) -> Vec<Patient> {
    let addrs: Vec<Address> = env
        .storage()
        .persistent()
        .get(&DataKey::PatientList)
        .unwrap_or(Vec::new(env));

    let mut patients = Vec::new(env);
    for addr in addrs.iter() {
        if let Some(patient) = load_patient(env, &addr) {
            patients.push_back(patient);
        }
    }
    patients
}

// -----------------------------------------------------------------------
// Appointments
// -----------------------------------------------------------------------

/// Stores a newly booked appointment and indexes it under both parties.
pub fn save_new_appointment(env: &Env, appt: &Appointment) {
    let key = DataKey::Appointment(appt.id);
    env.storage().persistent().set(&key, appt);
    bump(env, &key);

    push_id(env, DataKey::PatientAppointments(appt.patient.clone()), appt.id);
    push_id(env, DataKey::DoctorAppointments(appt.doctor.clone()), appt.id);

    let mut stats = load_stats(env);
    stats.total_appointments += 1;
    save_stats(env, &stats);
}

pub fn load_appointment(env: &Env, id: u64) -> Option<Appointment> {
    env.storage().persistent().get(&DataKey::Appointment(id))
}

fn load_appointments_by(env: &Env, key: DataKey) -> Vec<Appointment> {
    let ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));

    let mut appointments = Vec::new(env);
    for id in ids.iter() {
        if let Some(appt) = load_appointment(env, id) {
            appointments.push_back(appt);
        }
    }
    appointments
}

pub fn load_patient_appointments(env: &Env, patient: &Address) -> Vec<Appointment> {
    load_appointments_by(env, DataKey::PatientAppointments(patient.clone()))
}

pub fn load_doctor_appointments(env: &Env, doctor: &Address) -> Vec<Appointment> {
    load_appointments_by(env, DataKey::DoctorAppointments(doctor.clone()))
}

pub fn load_all_appointments(env: &Env) -> Vec<Appointment> {
    let mut appointments = Vec::new(env);
    for id in 1..=last_appointment_id(env) {
        if let Some(appt) = load_appointment(env, id) {
            appointments.push_back(appt);
        }
    }
    appointments
}

// -----------------------------------------------------------------------
// Notes
// -----------------------------------------------------------------------

pub fn save_note(env: &Env, note: &Note) {
    let key = DataKey::Note(note.appointment_id);
    env.storage().persistent().set(&key, note);
    bump(env, &key);
}

pub fn load_note(env: &Env, appointment_id: u64) -> Option<Note> {
    env.storage()
        .persistent()
        .get(&DataKey::Note(appointment_id))
}
