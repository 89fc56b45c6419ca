use soroban_sdk::{Env, String};

use crate::error::SchedulerError;
use crate::storage;

/// Maximum length of consultation notes, in characters
pub const MAX_NOTES_LEN: u32 = 500;

// A UTF-8 character is at most four bytes
const MAX_NOTES_BYTES: usize = MAX_NOTES_LEN as usize * 4;

/// Validate that a slot ends strictly after it starts
pub fn validate_time_range(start_time: u64, end_time: u64) -> Result<(), SchedulerError> {
    if end_time <= start_time {
        return Err(SchedulerError::InvalidRange);
    }
    Ok(())
}

/// Validate consultation notes. `String::len` counts bytes, so characters are
/// counted from the raw UTF-8.
pub fn validate_notes(notes: &String) -> Result<(), SchedulerError> {
    let len = notes.len() as usize;
    if len <= MAX_NOTES_LEN as usize {
        return Ok(());
    }
    if len > MAX_NOTES_BYTES {
        return Err(SchedulerError::NotesTooLong);
    }

    let mut buf = [0u8; MAX_NOTES_BYTES];
    let bytes = &mut buf[..len];
    notes.copy_into_slice(bytes);

    if count_chars(bytes) > MAX_NOTES_LEN as usize {
        return Err(SchedulerError::NotesTooLong);
    }
    Ok(())
}

/// Number of characters in UTF-8 bytes: every byte except continuation bytes
fn count_chars(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| (**b & 0xC0) != 0x80).count()
}

pub fn require_initialized(env: &Env) -> Result<(), SchedulerError> {
    if !storage::is_initialized(env) {
        return Err(SchedulerError::NotInitialized);
    }
    storage::extend_instance(env);
    Ok(())
}
