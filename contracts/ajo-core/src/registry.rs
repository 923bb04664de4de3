use soroban_sdk::{Address, Env, String};

use crate::admin;
use crate::errors::ContractError;
use crate::storage;
use crate::types::{AjoAgent, Member};

/// Reputation every participant starts with.
pub const DEFAULT_REPUTATION: u32 = 75;

/// Minimum reputation required to register as an ajo agent.
pub const MIN_AGENT_REPUTATION: u32 = 50;

const MAX_NAME_LEN: u32 = 50;

pub fn register_user(env: &Env, caller: Address, name: String) -> Result<(), ContractError> {
    caller.require_auth();
    admin::require_not_paused(env)?;

    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(ContractError::InvalidName);
    }

    if storage::get_member(env, &caller).is_some() {
        return Err(ContractError::AlreadyRegistered);
    }

    let member = Member {
        name,
        reputation_score: DEFAULT_REPUTATION,
        registered_at: env.ledger().timestamp(),
    };
    storage::set_member(env, &caller, &member);

    env.events()
        .publish((crate::symbol_short!("usr_reg"),), caller);

    Ok(())
}

pub fn register_as_ajo_agent(
    env: &Env,
    caller: Address,
    agent_name: String,
    contact_info: String,
) -> Result<(), ContractError> {
    caller.require_auth();
    admin::require_not_paused(env)?;

    let member = storage::get_member(env, &caller).ok_or(ContractError::NotRegistered)?;

    if storage::get_agent(env, &caller).is_some() {
        return Err(ContractError::AlreadyAgent);
    }

    if member.reputation_score < MIN_AGENT_REPUTATION {
        return Err(ContractError::InsufficientReputation);
    }

    let agent = AjoAgent {
        name: agent_name,
        contact_info,
        is_active: true,
        registered_at: env.ledger().timestamp(),
    };
    storage::set_agent(env, &caller, &agent);

    env.events()
        .publish((crate::symbol_short!("agt_reg"),), caller);

    Ok(())
}

pub fn is_user_registered(env: &Env, address: &Address) -> bool {
    storage::get_member(env, address).is_some()
}

pub fn get_user_name(env: &Env, address: &Address) -> Result<String, ContractError> {
    storage::get_member(env, address)
        .map(|m| m.name)
        .ok_or(ContractError::NotRegistered)
}

pub fn get_reputation(env: &Env, address: &Address) -> Result<u32, ContractError> {
    storage::get_member(env, address)
        .map(|m| m.reputation_score)
        .ok_or(ContractError::NotRegistered)
}

pub fn get_member_info(env: &Env, address: &Address) -> Result<Member, ContractError> {
    storage::get_member(env, address).ok_or(ContractError::NotRegistered)
}

pub fn is_active_agent(env: &Env, address: &Address) -> bool {
    storage::get_agent(env, address)
        .map(|a| a.is_active)
        .unwrap_or(false)
}

pub fn get_ajo_agent_info(env: &Env, address: &Address) -> Result<AjoAgent, ContractError> {
    storage::get_agent(env, address).ok_or(ContractError::NotAgent)
}
