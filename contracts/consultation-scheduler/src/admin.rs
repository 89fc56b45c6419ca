use soroban_sdk::{log, Address, Env};

use crate::error::SchedulerError;
use crate::events;
use crate::storage;
use crate::types::TransitionPolicy;
use crate::utils::require_initialized;

pub fn initialize(env: &Env, admin: Address) -> Result<(), SchedulerError> {
    if storage::is_initialized(env) {
        return Err(SchedulerError::AlreadyInitialized);
    }
    admin.require_auth();

    storage::set_admin(env, &admin);
    storage::set_policy(env, TransitionPolicy::Permissive);
    storage::set_initialized(env);
    storage::extend_instance(env);

    events::emit_initialized(env, admin);
    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, SchedulerError> {
    storage::get_admin(env).ok_or(SchedulerError::NotInitialized)
}

/// Capability check for admin-gated operations.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, SchedulerError> {
    let admin = get_admin(env)?;
    if *caller != admin {
        log!(env, "admin check failed", caller.clone());
        return Err(SchedulerError::Forbidden);
    }
    Ok(admin)
}

pub fn transfer_admin(env: &Env, caller: Address, new_admin: Address) -> Result<(), SchedulerError> {
    require_initialized(env)?;
    caller.require_auth();

    let old_admin = require_admin(env, &caller)?;
    storage::set_admin(env, &new_admin);

    events::emit_admin_transferred(env, old_admin, new_admin);
    Ok(())
}

pub fn set_transition_policy(
    env: &Env,
    caller: Address,
    policy: TransitionPolicy,
) -> Result<(), SchedulerError> {
    require_initialized(env)?;
    caller.require_auth();

    let admin = require_admin(env, &caller)?;
    storage::set_policy(env, policy);

    events::emit_policy_changed(env, admin, policy);
    Ok(())
}
