use soroban_sdk::{Address, Env};

use crate::storage::{load_doctor, load_member, load_patient};
use crate::types::{Doctor, Error, Member, Patient, Role};

pub fn role_of(env: &Env, addr: &Address) -> Role {
    match load_member(env, addr) {
        Some(Member::Doctor(_)) => Role::Doctor,
        Some(Member::Patient(_)) => Role::Patient,
        None => Role::None,
    }
}

/// Rejects an address that already holds a role. Registering the same role
/// twice and crossing roles are reported differently.
pub fn require_unregistered(env: &Env, addr: &Address, wanted: Role) -> Result<(), Error> {
    match (role_of(env, addr), wanted) {
        (Role::None, _) => Ok(()),
        (Role::Doctor, Role::Doctor) => Err(Error::DoctorAlreadyRegistered),
        (Role::Patient, Role::Patient) => Err(Error::PatientAlreadyRegistered),
        _ => Err(Error::CannotBeBothRoles),
    }
}

/// The caller of a doctor-only operation.
pub fn require_doctor(env: &Env, caller: &Address) -> Result<Doctor, Error> {
    load_doctor(env, caller).ok_or(Error::NotARegisteredDoctor)
}

/// The caller of a patient-only operation.
pub fn require_patient(env: &Env, caller: &Address) -> Result<Patient, Error> {
    load_patient(env, caller).ok_or(Error::NotARegisteredPatient)
}
