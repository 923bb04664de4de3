use soroban_sdk::{Address, Env, Map, Vec};

use crate::admin;
use crate::errors::ContractError;
use crate::storage;
use crate::types::{GroupStatus, RoundInfo};

const BPS_DENOMINATOR: i128 = 10_000;

/// Pay the pooled contributions for the current round out to its designated
/// recipient, net of the platform fee, then advance the round.
///
/// The round advance is committed before any token movement, so a re-entered
/// call observes `RoundIncomplete` (or `GroupNotActive` on the final round)
/// and aborts.
pub fn claim_payout(env: &Env, caller: Address, group_id: u64) -> Result<(), ContractError> {
    caller.require_auth();
    admin::require_not_paused(env)?;

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if group.status != GroupStatus::Active {
        return Err(ContractError::GroupNotActive);
    }

    let round_info = storage::get_round(env, group_id, group.current_round)
        .ok_or(ContractError::RoundNotActive)?;

    if !round_info.is_complete {
        return Err(ContractError::RoundIncomplete);
    }

    if caller != round_info.recipient {
        return Err(ContractError::NotRecipient);
    }

    let gross = round_info.total_contributed;
    // Floor division; the remainder stays in the recipient's favor.
    let fee = gross * storage::get_platform_fee_bps(env) as i128 / BPS_DENOMINATOR;
    let net = gross - fee;

    let token = group.token.clone();

    // Advance to the next round or complete the group before any token
    // movement, invalidating the claim. One payout per member: after
    // max_members rounds there is nothing left to rotate.
    if group.current_round >= group.max_members {
        group.status = GroupStatus::Completed;
        storage::set_group(env, &group);

        env.events()
            .publish((crate::symbol_short!("grp_comp"),), group_id);
    } else {
        group.current_round += 1;
        let next_recipient = group.payout_order.get(group.current_round - 1).unwrap();

        let new_round = RoundInfo {
            round_number: group.current_round,
            recipient: next_recipient,
            contributions: Map::new(env),
            total_contributed: 0,
            is_complete: false,
            deadline: env.ledger().timestamp() + group.contribution_frequency,
        };

        storage::set_round(env, group_id, &new_round);
        storage::set_group(env, &group);

        env.events().publish(
            (crate::symbol_short!("rnd_new"),),
            (group_id, group.current_round),
        );
    }

    let token_client = soroban_sdk::token::Client::new(env, &token);
    let contract_addr = env.current_contract_address();
    token_client.transfer(&contract_addr, &caller, &net);
    if fee > 0 {
        token_client.transfer(&contract_addr, &storage::get_owner(env), &fee);
    }

    env.events().publish(
        (crate::symbol_short!("payout"),),
        (group_id, caller, net, fee),
    );

    Ok(())
}

pub fn get_payout_order(env: &Env, group_id: u64) -> Result<Vec<Address>, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;
    Ok(group.payout_order)
}

pub fn get_current_recipient(env: &Env, group_id: u64) -> Result<Address, ContractError> {
    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if group.status != GroupStatus::Active {
        return Err(ContractError::GroupNotActive);
    }

    let round_info = storage::get_round(env, group_id, group.current_round)
        .ok_or(ContractError::RoundNotActive)?;

    Ok(round_info.recipient)
}
