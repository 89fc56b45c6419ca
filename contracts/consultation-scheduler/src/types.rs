use soroban_sdk::{contracttype, Address, String};

/// A block of time a provider offers for booking.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slot {
    pub provider: Address,
    pub slot_id: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub is_booked: bool,
}

/// Lifecycle of a booked consultation
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ConsultationStatus {
    Scheduled = 0,
    Completed = 1,
    Cancelled = 2,
}

/// How strictly status changes are checked once a consultation exists.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TransitionPolicy {
    /// Completed and Cancelled may overwrite any status.
    Permissive = 0,
    /// Only Scheduled -> Completed and Scheduled -> Cancelled.
    Guarded = 1,
}

impl ConsultationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConsultationStatus::Completed | ConsultationStatus::Cancelled)
    }

    /// Transition table. Scheduled is only ever entered by booking.
    pub fn can_transition_to(&self, next: ConsultationStatus, policy: TransitionPolicy) -> bool {
        if !next.is_terminal() {
            return false;
        }

        match policy {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Guarded => *self == ConsultationStatus::Scheduled,
        }
    }
}

/// A booked appointment derived from exactly one slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Consultation {
    pub consultation_id: u64,
    pub provider: Address,
    pub patient: Address,
    pub slot_id: u64,
    pub timestamp: u64,
    pub duration: u64,
    pub status: ConsultationStatus,
    pub notes: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    // Instance storage
    Initialized,
    Admin,
    Policy,
    NextSlotId,
    NextConsultationId,

    // Persistent storage
    Slot(Address, u64),                 // (provider, slot_id)
    Consultation(u64),                  // consultation_id
    PatientConsultations(Address),      // patient -> Vec<consultation_id>
    ProviderConsultations(Address),     // provider -> Vec<consultation_id>
}
