#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Map, String, Vec};

mod admin;
mod contribution;
mod errors;
mod group;
mod invite;
mod payout;
mod registry;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::*;

/// Default platform fee: 1% in basis points. Owner-adjustable up to 10%.
const DEFAULT_FEE_BPS: u32 = 100;

#[contract]
pub struct AjoSavingsContract;

#[contractimpl]
impl AjoSavingsContract {
    /// Initialize the engine with a protocol owner (also the fee sink) and
    /// the initial supported-token registry.
    pub fn __constructor(env: Env, owner: Address, tokens: Vec<Address>, token_names: Vec<String>) {
        if storage::has_owner(&env) {
            panic!("already initialized");
        }
        if tokens.len() != token_names.len() {
            panic!("token list length mismatch");
        }
        storage::set_owner(&env, &owner);
        storage::set_platform_fee_bps(&env, DEFAULT_FEE_BPS);

        let mut registry = Map::new(&env);
        for i in 0..tokens.len() {
            registry.set(tokens.get(i).unwrap(), token_names.get(i).unwrap());
        }
        storage::set_supported_tokens(&env, &registry);
    }

    // ─── Identity & Agents ──────────────────────────────────────────

    /// Register the caller as a participant with a 1..=50 char display name.
    pub fn register_user(env: Env, caller: Address, name: String) -> Result<(), ContractError> {
        registry::register_user(&env, caller, name)
    }

    /// Promote a registered participant to ajo agent (group creator).
    pub fn register_as_ajo_agent(
        env: Env,
        caller: Address,
        agent_name: String,
        contact_info: String,
    ) -> Result<(), ContractError> {
        registry::register_as_ajo_agent(&env, caller, agent_name, contact_info)
    }

    pub fn is_user_registered(env: Env, address: Address) -> bool {
        registry::is_user_registered(&env, &address)
    }

    pub fn get_user_name(env: Env, address: Address) -> Result<String, ContractError> {
        registry::get_user_name(&env, &address)
    }

    pub fn get_reputation(env: Env, address: Address) -> Result<u32, ContractError> {
        registry::get_reputation(&env, &address)
    }

    pub fn get_member_info(env: Env, address: Address) -> Result<Member, ContractError> {
        registry::get_member_info(&env, &address)
    }

    pub fn is_active_agent(env: Env, address: Address) -> bool {
        registry::is_active_agent(&env, &address)
    }

    pub fn get_ajo_agent_info(env: Env, address: Address) -> Result<AjoAgent, ContractError> {
        registry::get_ajo_agent_info(&env, &address)
    }

    // ─── Group Lifecycle ────────────────────────────────────────────

    /// Create a new ajo group. The caller must be an active agent and
    /// becomes the first member.
    pub fn create_group(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        token: Address,
        contribution_amount: i128,
        contribution_frequency: u64,
        max_members: u32,
    ) -> Result<u64, ContractError> {
        group::create_group(
            &env,
            creator,
            name,
            description,
            token,
            contribution_amount,
            contribution_frequency,
            max_members,
        )
    }

    /// Join a forming group using an invite code. The join that fills the
    /// group activates it and opens round 1.
    pub fn join_group_with_code(
        env: Env,
        member: Address,
        group_id: u64,
        code: String,
    ) -> Result<(), ContractError> {
        group::join_group_with_code(&env, member, group_id, code)
    }

    pub fn get_group(env: Env, group_id: u64) -> Result<AjoGroup, ContractError> {
        group::get_group(&env, group_id)
    }

    pub fn get_group_summary(env: Env, group_id: u64) -> Result<GroupSummary, ContractError> {
        group::get_group_summary(&env, group_id)
    }

    pub fn get_joinable_groups(env: Env) -> Vec<GroupSummary> {
        group::get_joinable_groups(&env)
    }

    pub fn get_all_active_groups(env: Env) -> Vec<GroupSummary> {
        group::get_all_active_groups(&env)
    }

    /// Get all group IDs a member belongs to.
    pub fn get_member_groups(env: Env, member: Address) -> Vec<u64> {
        group::get_member_groups(&env, member)
    }

    // ─── Invite Codes ───────────────────────────────────────────────

    /// Generate a bounded-use, time-limited invite code for a forming group.
    /// Only the group's creator may issue codes. Returns the code string.
    pub fn generate_invite_code(
        env: Env,
        caller: Address,
        group_id: u64,
        max_uses: u32,
        validity_days: u32,
    ) -> Result<String, ContractError> {
        invite::generate_invite_code(&env, caller, group_id, max_uses, validity_days)
    }

    pub fn get_invite_code_info(env: Env, code: String) -> Result<InviteCode, ContractError> {
        invite::get_invite_code_info(&env, &code)
    }

    // ─── Contributions ──────────────────────────────────────────────

    /// Contribute to the current round of a group.
    pub fn contribute(env: Env, member: Address, group_id: u64) -> Result<(), ContractError> {
        contribution::contribute(&env, member, group_id)
    }

    /// Contribute on behalf of a member. Restricted to trusted contracts;
    /// the settlement tokens are pulled from the caller.
    pub fn contribute_for(
        env: Env,
        caller: Address,
        member: Address,
        group_id: u64,
    ) -> Result<(), ContractError> {
        contribution::contribute_for(&env, caller, member, group_id)
    }

    /// Get the status of a specific round.
    pub fn get_round_status(
        env: Env,
        group_id: u64,
        round: u32,
    ) -> Result<RoundInfo, ContractError> {
        contribution::get_round_status(&env, group_id, round)
    }

    /// Whether the member has contributed in the group's current round.
    pub fn get_user_contribution_status(
        env: Env,
        group_id: u64,
        member: Address,
    ) -> Result<bool, ContractError> {
        contribution::get_user_contribution_status(&env, group_id, member)
    }

    // ─── Payouts ────────────────────────────────────────────────────

    /// Claim the pooled pot for the current round. Only the designated
    /// recipient may claim, and only once every member has contributed.
    pub fn claim_payout(env: Env, caller: Address, group_id: u64) -> Result<(), ContractError> {
        payout::claim_payout(&env, caller, group_id)
    }

    /// Get the payout rotation for a group (fixed at activation).
    pub fn get_payout_order(env: Env, group_id: u64) -> Result<Vec<Address>, ContractError> {
        payout::get_payout_order(&env, group_id)
    }

    /// Get the current round's recipient.
    pub fn get_current_recipient(env: Env, group_id: u64) -> Result<Address, ContractError> {
        payout::get_current_recipient(&env, group_id)
    }

    // ─── Admin / Governance ─────────────────────────────────────────

    pub fn add_supported_token(
        env: Env,
        caller: Address,
        token: Address,
        name: String,
    ) -> Result<(), ContractError> {
        admin::add_supported_token(&env, caller, token, name)
    }

    pub fn remove_supported_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        admin::remove_supported_token(&env, caller, token)
    }

    pub fn get_supported_tokens(env: Env) -> (Vec<Address>, Vec<String>) {
        admin::get_supported_tokens(&env)
    }

    /// Set the platform fee in basis points. Capped at 1000 (10%).
    pub fn set_platform_fee(env: Env, caller: Address, fee_bps: u32) -> Result<(), ContractError> {
        admin::set_platform_fee(&env, caller, fee_bps)
    }

    pub fn get_platform_fee(env: Env) -> u32 {
        storage::get_platform_fee_bps(&env)
    }

    /// Engage the process-wide pause switch. Mutating entry points fail
    /// with `SystemPaused` until `unpause`; reads stay available.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        admin::pause(&env, caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        admin::unpause(&env, caller)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Grant a contract the right to contribute on behalf of members.
    pub fn add_trusted_contract(
        env: Env,
        caller: Address,
        contract: Address,
    ) -> Result<(), ContractError> {
        admin::add_trusted_contract(&env, caller, contract)
    }

    pub fn remove_trusted_contract(
        env: Env,
        caller: Address,
        contract: Address,
    ) -> Result<(), ContractError> {
        admin::remove_trusted_contract(&env, caller, contract)
    }

    pub fn is_trusted_contract(env: Env, contract: Address) -> bool {
        storage::is_trusted_contract(&env, &contract)
    }
}
