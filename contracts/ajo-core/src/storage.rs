use soroban_sdk::{Address, Env, Map, String, Vec};

use crate::types::{AjoAgent, AjoGroup, DataKey, InviteCode, Member, RoundInfo};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Owner / pause / fee ---

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    extend_instance_ttl(env);
}

pub fn get_platform_fee_bps(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PlatformFeeBps)
        .unwrap_or(0)
}

pub fn set_platform_fee_bps(env: &Env, bps: u32) {
    env.storage().instance().set(&DataKey::PlatformFeeBps, &bps);
    extend_instance_ttl(env);
}

// --- Supported tokens ---

pub fn get_supported_tokens(env: &Env) -> Map<Address, String> {
    env.storage()
        .instance()
        .get(&DataKey::SupportedTokens)
        .unwrap_or(Map::new(env))
}

pub fn set_supported_tokens(env: &Env, tokens: &Map<Address, String>) {
    env.storage()
        .instance()
        .set(&DataKey::SupportedTokens, tokens);
    extend_instance_ttl(env);
}

pub fn is_token_supported(env: &Env, token: &Address) -> bool {
    get_supported_tokens(env).contains_key(token.clone())
}

// --- Trusted contracts ---

pub fn get_trusted_contracts(env: &Env) -> Map<Address, bool> {
    env.storage()
        .instance()
        .get(&DataKey::TrustedContracts)
        .unwrap_or(Map::new(env))
}

pub fn set_trusted_contracts(env: &Env, trusted: &Map<Address, bool>) {
    env.storage()
        .instance()
        .set(&DataKey::TrustedContracts, trusted);
    extend_instance_ttl(env);
}

pub fn is_trusted_contract(env: &Env, caller: &Address) -> bool {
    get_trusted_contracts(env)
        .get(caller.clone())
        .unwrap_or(false)
}

// --- Counters ---

pub fn get_group_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::GroupCounter)
        .unwrap_or(0)
}

pub fn set_group_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&DataKey::GroupCounter, &counter);
    extend_instance_ttl(env);
}

pub fn next_invite_nonce(env: &Env) -> u64 {
    let nonce: u64 = env
        .storage()
        .instance()
        .get(&DataKey::InviteNonce)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::InviteNonce, &nonce);
    extend_instance_ttl(env);
    nonce
}

// --- Members ---

pub fn get_member(env: &Env, address: &Address) -> Option<Member> {
    let key = DataKey::Member(address.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_member(env: &Env, address: &Address, member: &Member) {
    let key = DataKey::Member(address.clone());
    env.storage().persistent().set(&key, member);
    extend_persistent_ttl(env, &key);
}

// --- Agents ---

pub fn get_agent(env: &Env, address: &Address) -> Option<AjoAgent> {
    let key = DataKey::Agent(address.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_agent(env: &Env, address: &Address, agent: &AjoAgent) {
    let key = DataKey::Agent(address.clone());
    env.storage().persistent().set(&key, agent);
    extend_persistent_ttl(env, &key);
}

// --- Groups ---

pub fn get_group(env: &Env, group_id: u64) -> Option<AjoGroup> {
    let key = DataKey::Group(group_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_group(env: &Env, group: &AjoGroup) {
    let key = DataKey::Group(group.id);
    env.storage().persistent().set(&key, group);
    extend_persistent_ttl(env, &key);
}

// --- Rounds ---

pub fn get_round(env: &Env, group_id: u64, round: u32) -> Option<RoundInfo> {
    let key = DataKey::Round(group_id, round);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_round(env: &Env, group_id: u64, round_info: &RoundInfo) {
    let key = DataKey::Round(group_id, round_info.round_number);
    env.storage().persistent().set(&key, round_info);
    extend_persistent_ttl(env, &key);
}

// --- Invite codes ---

pub fn get_invite(env: &Env, code: &String) -> Option<InviteCode> {
    let key = DataKey::Invite(code.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_invite(env: &Env, invite: &InviteCode) {
    let key = DataKey::Invite(invite.code.clone());
    env.storage().persistent().set(&key, invite);
    extend_persistent_ttl(env, &key);
}

// --- Member groups ---

pub fn get_member_groups(env: &Env, member: &Address) -> Vec<u64> {
    let key = DataKey::MemberGroups(member.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_member_group(env: &Env, member: &Address, group_id: u64) {
    let key = DataKey::MemberGroups(member.clone());
    let mut groups = get_member_groups(env, member);
    groups.push_back(group_id);
    env.storage().persistent().set(&key, &groups);
    extend_persistent_ttl(env, &key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
