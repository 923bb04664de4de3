use soroban_sdk::{Address, Env};

use crate::admin;
use crate::errors::ContractError;
use crate::group;
use crate::storage;
use crate::types::{GroupStatus, RoundInfo};

pub fn contribute(env: &Env, member: Address, group_id: u64) -> Result<(), ContractError> {
    member.require_auth();
    admin::require_not_paused(env)?;

    // Self-service path: the member funds their own contribution.
    record_contribution(env, &member, &member, group_id)
}

/// Trusted-caller path: an authorized contract (e.g. the multi-currency
/// wrapper) contributes on behalf of `member`, funding the transfer from its
/// own balance after converting whatever the member paid in.
pub fn contribute_for(
    env: &Env,
    caller: Address,
    member: Address,
    group_id: u64,
) -> Result<(), ContractError> {
    caller.require_auth();
    admin::require_not_paused(env)?;

    if !storage::is_trusted_contract(env, &caller) {
        return Err(ContractError::NotTrusted);
    }

    record_contribution(env, &member, &caller, group_id)
}

fn record_contribution(
    env: &Env,
    member: &Address,
    funder: &Address,
    group_id: u64,
) -> Result<(), ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if group.status != GroupStatus::Active {
        return Err(ContractError::GroupNotActive);
    }

    if !group::is_member(&group, member) {
        return Err(ContractError::NotMember);
    }

    let mut round_info = storage::get_round(env, group_id, group.current_round)
        .ok_or(ContractError::RoundNotActive)?;

    if round_info.contributions.contains_key(member.clone()) {
        return Err(ContractError::AlreadyContributed);
    }

    // All checks passed; pull the tokens, then commit the flag.
    let token_client = soroban_sdk::token::Client::new(env, &group.token);
    token_client.transfer(
        funder,
        &env.current_contract_address(),
        &group.contribution_amount,
    );

    round_info.contributions.set(member.clone(), true);
    round_info.total_contributed += group.contribution_amount;

    if round_info.contributions.len() == group.members.len() {
        round_info.is_complete = true;
    }

    storage::set_round(env, group_id, &round_info);

    env.events().publish(
        (crate::symbol_short!("contrib"),),
        (group_id, member.clone(), group.contribution_amount),
    );

    Ok(())
}

pub fn get_round_status(env: &Env, group_id: u64, round: u32) -> Result<RoundInfo, ContractError> {
    storage::get_round(env, group_id, round).ok_or(ContractError::RoundNotActive)
}

pub fn get_user_contribution_status(
    env: &Env,
    group_id: u64,
    member: Address,
) -> Result<bool, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    match storage::get_round(env, group_id, group.current_round) {
        Some(round_info) => Ok(round_info.contributions.contains_key(member)),
        None => Ok(false),
    }
}
