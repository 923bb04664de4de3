use soroban_sdk::{Address, Bytes, Env, String};

use crate::admin;
use crate::errors::ContractError;
use crate::storage;
use crate::types::{GroupStatus, InviteCode};

const SECONDS_PER_DAY: u64 = 86_400;

/// Unambiguous base-32 alphabet (no 0/O, 1/I) for human-shareable codes.
const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const CODE_PREFIX: &[u8; 4] = b"AJO-";
const CODE_SUFFIX_LEN: usize = 8;

pub fn generate_invite_code(
    env: &Env,
    caller: Address,
    group_id: u64,
    max_uses: u32,
    validity_days: u32,
) -> Result<String, ContractError> {
    caller.require_auth();
    admin::require_not_paused(env)?;

    let group = storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)?;

    if caller != group.creator {
        return Err(ContractError::Unauthorized);
    }

    if group.status != GroupStatus::Forming {
        return Err(ContractError::GroupFull);
    }

    if max_uses == 0 || validity_days == 0 {
        return Err(ContractError::InvalidInviteParams);
    }

    let code = derive_code(env, group_id, storage::next_invite_nonce(env));

    let invite = InviteCode {
        code: code.clone(),
        group_id,
        created_by: caller,
        max_uses,
        uses_remaining: max_uses,
        expires_at: env.ledger().timestamp() + validity_days as u64 * SECONDS_PER_DAY,
        is_active: true,
    };
    storage::set_invite(env, &invite);

    env.events()
        .publish((crate::symbol_short!("inv_gen"),), (group_id, code.clone()));

    Ok(code)
}

/// Validate and consume one use of an invite code for the given group.
/// Called from the join path; never exposed as an entry point on its own.
pub fn redeem(env: &Env, code: &String, group_id: u64) -> Result<(), ContractError> {
    let mut invite = storage::get_invite(env, code).ok_or(ContractError::InviteNotActive)?;

    if invite.group_id != group_id {
        return Err(ContractError::InviteNotActive);
    }
    if invite.uses_remaining == 0 {
        return Err(ContractError::InviteExhausted);
    }
    if !invite.is_active {
        return Err(ContractError::InviteNotActive);
    }
    if env.ledger().timestamp() > invite.expires_at {
        return Err(ContractError::InviteExpired);
    }

    invite.uses_remaining -= 1;
    if invite.uses_remaining == 0 {
        invite.is_active = false;
    }
    storage::set_invite(env, &invite);

    Ok(())
}

pub fn get_invite_code_info(env: &Env, code: &String) -> Result<InviteCode, ContractError> {
    storage::get_invite(env, code).ok_or(ContractError::InviteNotActive)
}

/// Derive a unique "AJO-XXXXXXXX" code from the group id, a monotonic nonce,
/// and the ledger timestamp.
fn derive_code(env: &Env, group_id: u64, nonce: u64) -> String {
    let mut seed = [0u8; 24];
    seed[..8].copy_from_slice(&group_id.to_be_bytes());
    seed[8..16].copy_from_slice(&nonce.to_be_bytes());
    seed[16..].copy_from_slice(&env.ledger().timestamp().to_be_bytes());

    let digest = env.crypto().sha256(&Bytes::from_array(env, &seed)).to_array();

    let mut buf = [0u8; CODE_PREFIX.len() + CODE_SUFFIX_LEN];
    buf[..CODE_PREFIX.len()].copy_from_slice(CODE_PREFIX);
    for i in 0..CODE_SUFFIX_LEN {
        buf[CODE_PREFIX.len() + i] = CODE_ALPHABET[(digest[i] & 31) as usize];
    }

    String::from_bytes(env, &buf)
}
