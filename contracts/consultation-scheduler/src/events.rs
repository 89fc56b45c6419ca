use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{Consultation, ConsultationStatus, Slot, TransitionPolicy};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotAddedEvent {
    pub provider: Address,
    pub slot_id: u64,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationBookedEvent {
    pub consultation_id: u64,
    pub provider: Address,
    pub patient: Address,
    pub slot_id: u64,
    pub timestamp: u64,
    pub duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusChangedEvent {
    pub consultation_id: u64,
    pub actor: Address,
    pub old_status: ConsultationStatus,
    pub new_status: ConsultationStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEvent {
    pub old_admin: Address,
    pub new_admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyChangedEvent {
    pub admin: Address,
    pub policy: TransitionPolicy,
}

pub fn emit_initialized(env: &Env, admin: Address) {
    let event = InitializedEvent { admin: admin.clone() };
    env.events().publish((symbol_short!("init"), admin), event);
}

pub fn emit_slot_added(env: &Env, slot: &Slot) {
    let event = SlotAddedEvent {
        provider: slot.provider.clone(),
        slot_id: slot.slot_id,
        start_time: slot.start_time,
        end_time: slot.end_time,
    };
    env.events()
        .publish((symbol_short!("slot_add"), slot.provider.clone()), event);
}

pub fn emit_consultation_booked(env: &Env, consultation: &Consultation) {
    let event = ConsultationBookedEvent {
        consultation_id: consultation.consultation_id,
        provider: consultation.provider.clone(),
        patient: consultation.patient.clone(),
        slot_id: consultation.slot_id,
        timestamp: consultation.timestamp,
        duration: consultation.duration,
    };
    env.events()
        .publish((symbol_short!("booked"), consultation.patient.clone()), event);
}

pub fn emit_status_changed(
    env: &Env,
    consultation_id: u64,
    actor: Address,
    old_status: ConsultationStatus,
    new_status: ConsultationStatus,
) {
    let event = StatusChangedEvent {
        consultation_id,
        actor: actor.clone(),
        old_status,
        new_status,
    };
    env.events().publish((symbol_short!("status"), actor), event);
}

pub fn emit_admin_transferred(env: &Env, old_admin: Address, new_admin: Address) {
    let event = AdminTransferredEvent {
        old_admin: old_admin.clone(),
        new_admin,
    };
    env.events()
        .publish((symbol_short!("adm_xfer"), old_admin), event);
}

pub fn emit_policy_changed(env: &Env, admin: Address, policy: TransitionPolicy) {
    let event = PolicyChangedEvent {
        admin: admin.clone(),
        policy,
    };
    env.events().publish((symbol_short!("policy"), admin), event);
}
