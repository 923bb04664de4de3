use soroban_sdk::{contractclient, Address, Env};

/// Price-conversion collaborator. An implementation pulls `amount` of
/// `from_token` from `from`, credits the converted `to_token` amount back to
/// `from`, and returns that amount.
#[contractclient(name = "SwapClient")]
pub trait SwapInterface {
    fn swap(env: Env, from: Address, from_token: Address, to_token: Address, amount: i128)
        -> i128;
}
