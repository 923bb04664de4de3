use soroban_sdk::{Address, Env, Map, String, Vec};

use crate::admin;
use crate::errors::ContractError;
use crate::invite;
use crate::registry;
use crate::storage;
use crate::types::{AjoGroup, GroupStatus, GroupSummary, RoundInfo};

const MIN_GROUP_MEMBERS: u32 = 2;
const MAX_GROUP_MEMBERS: u32 = 20;

pub fn create_group(
    env: &Env,
    creator: Address,
    name: String,
    description: String,
    token: Address,
    contribution_amount: i128,
    contribution_frequency: u64,
    max_members: u32,
) -> Result<u64, ContractError> {
    creator.require_auth();
    admin::require_not_paused(env)?;

    if !registry::is_active_agent(env, &creator) {
        return Err(ContractError::NotAgent);
    }
    if contribution_amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if !(MIN_GROUP_MEMBERS..=MAX_GROUP_MEMBERS).contains(&max_members) {
        return Err(ContractError::InvalidMemberCount);
    }
    if !storage::is_token_supported(env, &token) {
        return Err(ContractError::TokenNotSupported);
    }

    let group_id = storage::get_group_counter(env) + 1;
    storage::set_group_counter(env, group_id);

    let mut members = Vec::new(env);
    members.push_back(creator.clone());

    let group = AjoGroup {
        id: group_id,
        name,
        description,
        creator: creator.clone(),
        token,
        contribution_amount,
        contribution_frequency,
        max_members,
        members,
        payout_order: Vec::new(env),
        current_round: 0,
        status: GroupStatus::Forming,
        created_at: env.ledger().timestamp(),
    };

    storage::set_group(env, &group);
    storage::add_member_group(env, &creator, group_id);

    env.events()
        .publish((crate::symbol_short!("grp_creat"),), group_id);

    Ok(group_id)
}

pub fn join_group_with_code(
    env: &Env,
    member: Address,
    group_id: u64,
    code: String,
) -> Result<(), ContractError> {
    member.require_auth();
    admin::require_not_paused(env)?;

    if !registry::is_user_registered(env, &member) {
        return Err(ContractError::NotRegistered);
    }

    let mut group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if group.status != GroupStatus::Forming {
        return Err(ContractError::GroupFull);
    }

    if is_member(&group, &member) {
        return Err(ContractError::AlreadyMember);
    }

    // Membership checks pass before the code is consumed, so a rejected
    // join never burns a use.
    invite::redeem(env, &code, group_id)?;

    group.members.push_back(member.clone());
    storage::add_member_group(env, &member, group_id);

    if group.members.len() == group.max_members {
        activate_group(env, &mut group);
    }

    storage::set_group(env, &group);

    env.events()
        .publish((crate::symbol_short!("grp_join"),), (group_id, member));

    Ok(())
}

/// The group reached capacity: fix the payout order to the join order and
/// open round 1. The order is never reshuffled afterwards.
fn activate_group(env: &Env, group: &mut AjoGroup) {
    group.payout_order = group.members.clone();
    group.current_round = 1;
    group.status = GroupStatus::Active;

    let first_recipient = group.payout_order.get(0).unwrap();
    let round_info = RoundInfo {
        round_number: 1,
        recipient: first_recipient,
        contributions: Map::new(env),
        total_contributed: 0,
        is_complete: false,
        deadline: env.ledger().timestamp() + group.contribution_frequency,
    };
    storage::set_round(env, group.id, &round_info);

    env.events()
        .publish((crate::symbol_short!("grp_actv"),), group.id);
}

pub fn is_member(group: &AjoGroup, address: &Address) -> bool {
    for m in group.members.iter() {
        if m == *address {
            return true;
        }
    }
    false
}

// --- Views ---

pub fn get_group(env: &Env, group_id: u64) -> Result<AjoGroup, ContractError> {
    storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)
}

pub fn get_group_summary(env: &Env, group_id: u64) -> Result<GroupSummary, ContractError> {
    let group = get_group(env, group_id)?;
    Ok(summarize(&group))
}

pub fn get_joinable_groups(env: &Env) -> Vec<GroupSummary> {
    let mut result = Vec::new(env);
    for group_id in 1..=storage::get_group_counter(env) {
        if let Some(group) = storage::get_group(env, group_id) {
            if group.status == GroupStatus::Forming && group.members.len() < group.max_members {
                result.push_back(summarize(&group));
            }
        }
    }
    result
}

pub fn get_all_active_groups(env: &Env) -> Vec<GroupSummary> {
    let mut result = Vec::new(env);
    for group_id in 1..=storage::get_group_counter(env) {
        if let Some(group) = storage::get_group(env, group_id) {
            if group.status == GroupStatus::Active {
                result.push_back(summarize(&group));
            }
        }
    }
    result
}

pub fn get_member_groups(env: &Env, member: Address) -> Vec<u64> {
    storage::get_member_groups(env, &member)
}

fn summarize(group: &AjoGroup) -> GroupSummary {
    GroupSummary {
        id: group.id,
        name: group.name.clone(),
        creator: group.creator.clone(),
        token: group.token.clone(),
        contribution_amount: group.contribution_amount,
        max_members: group.max_members,
        current_members: group.members.len(),
        is_active: group.status == GroupStatus::Active,
        is_completed: group.status == GroupStatus::Completed,
        current_round: group.current_round,
    }
}
