use soroban_sdk::String;

use crate::types::{Error, MAX_AGE, MAX_TEXT_LEN, MIN_AGE};

/// Free-text fields must be non-empty and at most `MAX_TEXT_LEN` bytes.
pub fn check_text(text: &String) -> Result<(), Error> {
    let len = text.len();
    if len == 0 || len > MAX_TEXT_LEN {
        return Err(Error::InvalidStringLength);
    }
    Ok(())
}

pub fn check_age(age: u32) -> Result<(), Error> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Error::InvalidAge);
    }
    Ok(())
}
