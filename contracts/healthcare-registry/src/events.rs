use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Event published when a doctor registers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorRegisteredEvent {
    pub doctor: Address,
    pub name: String,
    pub specialty: String,
    pub timestamp: u64,
}

/// Event published when a patient registers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub name: String,
    pub timestamp: u64,
}

/// Event published for every booking, whichever party initiated it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppointmentBookedEvent {
    pub appointment_id: u64,
    pub patient: Address,
    pub doctor: Address,
    pub start_time: u64,
}

/// Event published when a note is created or overwritten.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoteAddedEvent {
    pub appointment_id: u64,
    pub doctor: Address,
    pub timestamp: u64,
}

pub fn publish_doctor_registered(env: &Env, doctor: Address, name: String, specialty: String) {
    let topics = (symbol_short!("DOC_REG"), doctor.clone());
    let data = DoctorRegisteredEvent {
        doctor,
        name,
        specialty,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_registered(env: &Env, patient: Address, name: String) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        name,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_appointment_booked(
    env: &Env,
    appointment_id: u64,
    patient: Address,
    doctor: Address,
    start_time: u64,
) {
    let topics = (symbol_short!("APPT_BKD"), appointment_id);
    let data = AppointmentBookedEvent {
        appointment_id,
        patient,
        doctor,
        start_time,
    };
    env.events().publish(topics, data);
}

pub fn publish_note_added(env: &Env, appointment_id: u64, doctor: Address) {
    let topics = (symbol_short!("NOTE_ADD"), appointment_id);
    let data = NoteAddedEvent {
        appointment_id,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
