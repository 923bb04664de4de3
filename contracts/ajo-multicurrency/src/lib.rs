#![no_std]

//! Multi-currency façade over the ajo core engine. Members contribute in a
//! currency of their choice; the wrapper converts through an external swap
//! contract and forwards a settlement-currency contribution to the core as a
//! trusted caller.

use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    contract, contractimpl, symbol_short, token, vec, Address, Env, IntoVal, String, Symbol, Vec,
};

mod errors;
mod storage;
mod swap;
mod types;

pub use errors::ContractError;
pub use swap::{SwapClient, SwapInterface};
pub use types::*;

use ajo_core::AjoSavingsContractClient;

#[contract]
pub struct MultiCurrencyAjoContract;

#[contractimpl]
impl MultiCurrencyAjoContract {
    /// Initialize the wrapper with the core engine and swap collaborator
    /// addresses. The wrapper must additionally be registered as a trusted
    /// contract on the core before contributions can flow through it.
    pub fn __constructor(env: Env, core: Address, swap: Address) {
        if storage::has_core(&env) {
            panic!("already initialized");
        }
        storage::set_core(&env, &core);
        storage::set_swap(&env, &swap);
    }

    /// Create an ajo group settled in `base_token`. Delegates to the core
    /// (the caller must be an active agent there) and records the wrapper
    /// mapping.
    pub fn create_multi_currency_group(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        base_token: Address,
        contribution_amount: i128,
        contribution_frequency: u64,
        max_members: u32,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        let core = AjoSavingsContractClient::new(&env, &storage::get_core(&env));
        let ajo_group_id = core.create_group(
            &caller,
            &name,
            &description,
            &base_token,
            &contribution_amount,
            &contribution_frequency,
            &max_members,
        );

        let wrapper_group_id = storage::get_group_counter(&env) + 1;
        storage::set_group_counter(&env, wrapper_group_id);

        let mut members = Vec::new(&env);
        members.push_back(caller);

        let group = WrapperGroup {
            ajo_group_id,
            base_token,
            members,
            total_members: max_members,
        };
        storage::set_wrapper_group(&env, wrapper_group_id, &group);

        env.events().publish(
            (symbol_short!("mc_creat"),),
            (wrapper_group_id, ajo_group_id),
        );

        Ok(wrapper_group_id)
    }

    /// Join the underlying ajo group with an invite code and mirror the
    /// member on the wrapper side.
    pub fn join_multi_currency_group(
        env: Env,
        member: Address,
        wrapper_group_id: u64,
        code: String,
    ) -> Result<(), ContractError> {
        member.require_auth();

        let mut group = storage::get_wrapper_group(&env, wrapper_group_id)
            .ok_or(ContractError::GroupNotFound)?;

        let core = AjoSavingsContractClient::new(&env, &storage::get_core(&env));
        core.join_group_with_code(&member, &group.ajo_group_id, &code);

        group.members.push_back(member.clone());
        storage::set_wrapper_group(&env, wrapper_group_id, &group);

        env.events()
            .publish((symbol_short!("mc_join"),), (wrapper_group_id, member));

        Ok(())
    }

    /// Contribute in `source_token`. The wrapper pulls the funds, converts
    /// them through the swap collaborator when the source differs from the
    /// group's settlement currency, refunds any surplus, and forwards the
    /// contribution to the core as a trusted caller.
    pub fn contribute_multi_currency(
        env: Env,
        caller: Address,
        wrapper_group_id: u64,
        source_token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let group = storage::get_wrapper_group(&env, wrapper_group_id)
            .ok_or(ContractError::GroupNotFound)?;

        let core_addr = storage::get_core(&env);
        let core = AjoSavingsContractClient::new(&env, &core_addr);
        let needed = core.get_group_summary(&group.ajo_group_id).contribution_amount;

        let this = env.current_contract_address();
        token::Client::new(&env, &source_token).transfer(&caller, &this, &amount);

        let available = if source_token == group.base_token {
            amount
        } else {
            let swap_addr = storage::get_swap(&env);
            authorize_transfer(&env, &source_token, &this, &swap_addr, amount);
            SwapClient::new(&env, &swap_addr).swap(&this, &source_token, &group.base_token, &amount)
        };

        if available < needed {
            return Err(ContractError::SwapShortfall);
        }

        let base_client = token::Client::new(&env, &group.base_token);
        if available > needed {
            base_client.transfer(&this, &caller, &(available - needed));
        }

        // The core pulls the settlement amount from us inside contribute_for;
        // pre-authorize exactly that sub-invocation.
        authorize_transfer(&env, &group.base_token, &this, &core_addr, needed);
        core.contribute_for(&this, &caller, &group.ajo_group_id);

        env.events().publish(
            (symbol_short!("mc_contr"),),
            (wrapper_group_id, caller, source_token, amount),
        );

        Ok(())
    }

    // ─── Views ──────────────────────────────────────────────────────

    pub fn get_supported_currencies(env: Env) -> (Vec<Address>, Vec<String>) {
        let core = AjoSavingsContractClient::new(&env, &storage::get_core(&env));
        core.get_supported_tokens()
    }

    pub fn get_multi_currency_group_details(
        env: Env,
        wrapper_group_id: u64,
    ) -> Result<MultiCurrencyGroupDetails, ContractError> {
        let group = storage::get_wrapper_group(&env, wrapper_group_id)
            .ok_or(ContractError::GroupNotFound)?;

        let core = AjoSavingsContractClient::new(&env, &storage::get_core(&env));
        let summary = core.get_group_summary(&group.ajo_group_id);

        Ok(MultiCurrencyGroupDetails {
            wrapper_group_id,
            ajo_group_id: group.ajo_group_id,
            base_token: group.base_token,
            name: summary.name,
            contribution_amount: summary.contribution_amount,
            max_members: summary.max_members,
            current_members: summary.current_members,
            is_active: summary.is_active,
            is_completed: summary.is_completed,
            current_round: summary.current_round,
        })
    }

    pub fn get_core_address(env: Env) -> Address {
        storage::get_core(&env)
    }

    pub fn get_swap_address(env: Env) -> Address {
        storage::get_swap(&env)
    }
}

/// Pre-authorize a token transfer sub-invocation performed by a contract we
/// are about to call, spending from our own balance.
fn authorize_transfer(env: &Env, token: &Address, from: &Address, spender: &Address, amount: i128) {
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(env, "transfer"),
                args: (from.clone(), spender.clone(), amount).into_val(env),
            },
            sub_invocations: vec![env],
        }),
    ]);
}
