use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SchedulerError {
    // Slot errors
    InvalidRange = 1,
    NotFound = 2,
    AlreadyBooked = 3,

    // Authorization errors
    Forbidden = 4,

    // Initialization errors
    AlreadyInitialized = 5,
    NotInitialized = 6,

    // Validation errors
    NotesTooLong = 7,
    InvalidTransition = 8,
}
