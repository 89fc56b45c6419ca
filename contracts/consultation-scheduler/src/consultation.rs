use soroban_sdk::{log, Address, Env, String, Vec};

use crate::error::SchedulerError;
use crate::events;
use crate::storage;
use crate::types::{Consultation, ConsultationStatus};
use crate::utils::{require_initialized, validate_notes};

/// Claim a free slot and open a Scheduled consultation for the caller.
pub fn book_consultation(
    env: &Env,
    caller: Address,
    provider: Address,
    slot_id: u64,
    notes: String,
) -> Result<u64, SchedulerError> {
    require_initialized(env)?;
    caller.require_auth();

    let mut slot = storage::get_slot(env, &provider, slot_id).ok_or(SchedulerError::NotFound)?;
    if slot.is_booked {
        log!(env, "slot already booked", provider, slot_id);
        return Err(SchedulerError::AlreadyBooked);
    }
    validate_notes(&notes)?;

    // Slots are never released, not even on cancellation.
    slot.is_booked = true;
    storage::set_slot(env, &slot);

    let consultation = Consultation {
        consultation_id: storage::next_consultation_id(env),
        provider,
        patient: caller,
        slot_id,
        timestamp: slot.start_time,
        duration: slot.end_time - slot.start_time,
        status: ConsultationStatus::Scheduled,
        notes,
    };
    storage::set_consultation(env, &consultation);
    storage::index_consultation(env, &consultation);

    events::emit_consultation_booked(env, &consultation);
    Ok(consultation.consultation_id)
}

/// Only the consultation's provider may mark it Completed.
pub fn complete_consultation(
    env: &Env,
    caller: Address,
    consultation_id: u64,
) -> Result<(), SchedulerError> {
    require_initialized(env)?;
    caller.require_auth();

    let consultation = load(env, consultation_id)?;
    if caller != consultation.provider {
        log!(env, "complete rejected", caller, consultation_id);
        return Err(SchedulerError::Forbidden);
    }

    transition(env, consultation, caller, ConsultationStatus::Completed)
}

/// Either party to the consultation may cancel it.
pub fn cancel_consultation(
    env: &Env,
    caller: Address,
    consultation_id: u64,
) -> Result<(), SchedulerError> {
    require_initialized(env)?;
    caller.require_auth();

    let consultation = load(env, consultation_id)?;
    if caller != consultation.provider && caller != consultation.patient {
        log!(env, "cancel rejected", caller, consultation_id);
        return Err(SchedulerError::Forbidden);
    }

    transition(env, consultation, caller, ConsultationStatus::Cancelled)
}

pub fn get_consultation(env: &Env, consultation_id: u64) -> Option<Consultation> {
    storage::get_consultation(env, consultation_id)
}

pub fn get_patient_consultations(env: &Env, patient: Address) -> Vec<u64> {
    storage::get_patient_consultations(env, &patient)
}

pub fn get_provider_consultations(env: &Env, provider: Address) -> Vec<u64> {
    storage::get_provider_consultations(env, &provider)
}

fn load(env: &Env, consultation_id: u64) -> Result<Consultation, SchedulerError> {
    storage::get_consultation(env, consultation_id).ok_or(SchedulerError::NotFound)
}

fn transition(
    env: &Env,
    mut consultation: Consultation,
    actor: Address,
    next: ConsultationStatus,
) -> Result<(), SchedulerError> {
    let old_status = consultation.status;
    if !old_status.can_transition_to(next, storage::get_policy(env)) {
        return Err(SchedulerError::InvalidTransition);
    }

    consultation.status = next;
    storage::set_consultation(env, &consultation);

    events::emit_status_changed(env, consultation.consultation_id, actor, old_status, next);
    Ok(())
}
