use soroban_sdk::{log, Address, Env};

use crate::error::SchedulerError;
use crate::events;
use crate::storage;
use crate::types::Slot;
use crate::utils::{require_initialized, validate_time_range};

/// Register a new unbooked slot under the caller's own provider namespace.
///
/// No overlap or duplicate check is made: a provider may publish identical
/// slots and each receives its own identifier.
pub fn add_availability_slot(
    env: &Env,
    caller: Address,
    start_time: u64,
    end_time: u64,
) -> Result<u64, SchedulerError> {
    require_initialized(env)?;
    caller.require_auth();

    if let Err(err) = validate_time_range(start_time, end_time) {
        log!(env, "rejected slot range", start_time, end_time);
        return Err(err);
    }

    let slot = Slot {
        provider: caller,
        slot_id: storage::next_slot_id(env),
        start_time,
        end_time,
        is_booked: false,
    };
    storage::set_slot(env, &slot);

    events::emit_slot_added(env, &slot);
    Ok(slot.slot_id)
}

pub fn get_provider_availability(env: &Env, provider: Address, slot_id: u64) -> Option<Slot> {
    storage::get_slot(env, &provider, slot_id)
}
