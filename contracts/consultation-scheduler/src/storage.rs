use soroban_sdk::{Address, Env, Vec};

use crate::types::{Consultation, DataKey, Slot, TransitionPolicy};

// Roughly 30 and 60 days at 5s ledgers
const DAY_IN_LEDGERS: u32 = 17_280;
pub const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS;

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// Configuration

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_policy(env: &Env) -> TransitionPolicy {
    env.storage()
        .instance()
        .get(&DataKey::Policy)
        .unwrap_or(TransitionPolicy::Permissive)
}

pub fn set_policy(env: &Env, policy: TransitionPolicy) {
    env.storage().instance().set(&DataKey::Policy, &policy);
}

// Counters. Each returns the current value and advances it.

pub fn next_slot_id(env: &Env) -> u64 {
    let current = slot_count(env);
    env.storage()
        .instance()
        .set(&DataKey::NextSlotId, &(current + 1));
    current
}

pub fn next_consultation_id(env: &Env) -> u64 {
    let current = consultation_count(env);
    env.storage()
        .instance()
        .set(&DataKey::NextConsultationId, &(current + 1));
    current
}

pub fn slot_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextSlotId)
        .unwrap_or(0u64)
}

pub fn consultation_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextConsultationId)
        .unwrap_or(0u64)
}

// Slots

pub fn get_slot(env: &Env, provider: &Address, slot_id: u64) -> Option<Slot> {
    let key = DataKey::Slot(provider.clone(), slot_id);
    env.storage().persistent().get(&key)
}

pub fn set_slot(env: &Env, slot: &Slot) {
    let key = DataKey::Slot(slot.provider.clone(), slot.slot_id);
    env.storage().persistent().set(&key, slot);
    extend_persistent(env, &key);
}

// Consultations

pub fn get_consultation(env: &Env, consultation_id: u64) -> Option<Consultation> {
    let key = DataKey::Consultation(consultation_id);
    env.storage().persistent().get(&key)
}

pub fn set_consultation(env: &Env, consultation: &Consultation) {
    let key = DataKey::Consultation(consultation.consultation_id);
    env.storage().persistent().set(&key, consultation);
    extend_persistent(env, &key);
}

pub fn get_patient_consultations(env: &Env, patient: &Address) -> Vec<u64> {
    let key = DataKey::PatientConsultations(patient.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn get_provider_consultations(env: &Env, provider: &Address) -> Vec<u64> {
    let key = DataKey::ProviderConsultations(provider.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn index_consultation(env: &Env, consultation: &Consultation) {
    let mut by_patient = get_patient_consultations(env, &consultation.patient);
    by_patient.push_back(consultation.consultation_id);
    let patient_key = DataKey::PatientConsultations(consultation.patient.clone());
    env.storage().persistent().set(&patient_key, &by_patient);
    extend_persistent(env, &patient_key);

    let mut by_provider = get_provider_consultations(env, &consultation.provider);
    by_provider.push_back(consultation.consultation_id);
    let provider_key = DataKey::ProviderConsultations(consultation.provider.clone());
    env.storage().persistent().set(&provider_key, &by_provider);
    extend_persistent(env, &provider_key);
}
