use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    GroupNotFound = 1,
    InvalidAmount = 2,
    SwapShortfall = 3,
}
