#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod admin;
mod availability;
mod consultation;
mod error;
mod events;
mod storage;
mod types;
mod utils;

#[cfg(test)]
mod tests; // scenario suites: availability, booking, lifecycle, admin, properties

pub use error::SchedulerError;
pub use events::*;
pub use types::{Consultation, ConsultationStatus, Slot, TransitionPolicy};
pub use utils::MAX_NOTES_LEN;

#[contract]
pub struct ConsultationScheduler;

#[contractimpl]
impl ConsultationScheduler {
    /// Initialize the scheduler with its admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), SchedulerError> {
        admin::initialize(&env, admin)
    }

    /// Publish an availability slot owned by the caller
    pub fn add_availability_slot(
        env: Env,
        caller: Address,
        start_time: u64,
        end_time: u64,
    ) -> Result<u64, SchedulerError> {
        availability::add_availability_slot(&env, caller, start_time, end_time)
    }

    /// Book a provider's slot as the calling patient
    pub fn book_consultation(
        env: Env,
        caller: Address,
        provider: Address,
        slot_id: u64,
        notes: String,
    ) -> Result<u64, SchedulerError> {
        consultation::book_consultation(&env, caller, provider, slot_id, notes)
    }

    /// Mark a consultation completed (provider only)
    pub fn complete_consultation(
        env: Env,
        caller: Address,
        consultation_id: u64,
    ) -> Result<(), SchedulerError> {
        consultation::complete_consultation(&env, caller, consultation_id)
    }

    /// Cancel a consultation (provider or patient)
    pub fn cancel_consultation(
        env: Env,
        caller: Address,
        consultation_id: u64,
    ) -> Result<(), SchedulerError> {
        consultation::cancel_consultation(&env, caller, consultation_id)
    }

    /// Get consultation details
    pub fn get_consultation(env: Env, consultation_id: u64) -> Option<Consultation> {
        consultation::get_consultation(&env, consultation_id)
    }

    /// Get a provider's slot
    pub fn get_provider_availability(env: Env, provider: Address, slot_id: u64) -> Option<Slot> {
        availability::get_provider_availability(&env, provider, slot_id)
    }

    /// Hand the admin role to another identity
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), SchedulerError> {
        admin::transfer_admin(&env, caller, new_admin)
    }

    /// Get the current admin
    pub fn get_admin(env: Env) -> Result<Address, SchedulerError> {
        admin::get_admin(&env)
    }

    /// Choose how strictly consultation status changes are checked (admin only)
    pub fn set_transition_policy(
        env: Env,
        caller: Address,
        policy: TransitionPolicy,
    ) -> Result<(), SchedulerError> {
        admin::set_transition_policy(&env, caller, policy)
    }

    /// Get the active consultation status transition policy
    pub fn get_transition_policy(env: Env) -> TransitionPolicy {
        storage::get_policy(&env)
    }

    /// Consultation ids booked by a patient, oldest first
    pub fn get_patient_consultations(env: Env, patient: Address) -> Vec<u64> {
        consultation::get_patient_consultations(&env, patient)
    }

    /// Consultation ids booked against a provider, oldest first
    pub fn get_provider_consultations(env: Env, provider: Address) -> Vec<u64> {
        consultation::get_provider_consultations(&env, provider)
    }

    /// Number of slots created so far
    pub fn get_slot_count(env: Env) -> u64 {
        storage::slot_count(&env)
    }

    /// Number of consultations booked so far
    pub fn get_consultation_count(env: Env) -> u64 {
        storage::consultation_count(&env)
    }
}
