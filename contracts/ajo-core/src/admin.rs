use soroban_sdk::{Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::storage;

/// Hard cap on the platform fee: 10% in basis points.
const MAX_FEE_BPS: u32 = 1000;

pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if storage::is_paused(env) {
        return Err(ContractError::SystemPaused);
    }
    Ok(())
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != storage::get_owner(env) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn pause(env: &Env, caller: Address) -> Result<(), ContractError> {
    require_owner(env, &caller)?;
    storage::set_paused(env, true);

    env.events().publish((crate::symbol_short!("paused"),), ());

    Ok(())
}

pub fn unpause(env: &Env, caller: Address) -> Result<(), ContractError> {
    require_owner(env, &caller)?;
    storage::set_paused(env, false);

    env.events()
        .publish((crate::symbol_short!("unpaused"),), ());

    Ok(())
}

pub fn set_platform_fee(env: &Env, caller: Address, fee_bps: u32) -> Result<(), ContractError> {
    require_owner(env, &caller)?;

    if fee_bps > MAX_FEE_BPS {
        return Err(ContractError::FeeTooHigh);
    }
    storage::set_platform_fee_bps(env, fee_bps);

    env.events()
        .publish((crate::symbol_short!("fee_set"),), fee_bps);

    Ok(())
}

pub fn add_supported_token(
    env: &Env,
    caller: Address,
    token: Address,
    name: String,
) -> Result<(), ContractError> {
    require_owner(env, &caller)?;

    let mut tokens = storage::get_supported_tokens(env);
    tokens.set(token.clone(), name);
    storage::set_supported_tokens(env, &tokens);

    env.events()
        .publish((crate::symbol_short!("tok_add"),), token);

    Ok(())
}

pub fn remove_supported_token(
    env: &Env,
    caller: Address,
    token: Address,
) -> Result<(), ContractError> {
    require_owner(env, &caller)?;

    let mut tokens = storage::get_supported_tokens(env);
    if tokens.remove(token.clone()).is_none() {
        return Err(ContractError::TokenNotSupported);
    }
    storage::set_supported_tokens(env, &tokens);

    env.events()
        .publish((crate::symbol_short!("tok_rem"),), token);

    Ok(())
}

pub fn get_supported_tokens(env: &Env) -> (Vec<Address>, Vec<String>) {
    let tokens = storage::get_supported_tokens(env);
    (tokens.keys(), tokens.values())
}

pub fn add_trusted_contract(
    env: &Env,
    caller: Address,
    contract: Address,
) -> Result<(), ContractError> {
    require_owner(env, &caller)?;

    let mut trusted = storage::get_trusted_contracts(env);
    trusted.set(contract.clone(), true);
    storage::set_trusted_contracts(env, &trusted);

    env.events()
        .publish((crate::symbol_short!("trust_add"),), contract);

    Ok(())
}

pub fn remove_trusted_contract(
    env: &Env,
    caller: Address,
    contract: Address,
) -> Result<(), ContractError> {
    require_owner(env, &caller)?;

    let mut trusted = storage::get_trusted_contracts(env);
    trusted.remove(contract.clone());
    storage::set_trusted_contracts(env, &trusted);

    env.events()
        .publish((crate::symbol_short!("trust_rem"),), contract);

    Ok(())
}
