use soroban_sdk::{contracttype, Address, String, Vec};

/// Mapping from a wrapper group to its underlying ajo group, plus the
/// mirrored membership for wrapper-side reads.
#[contracttype]
#[derive(Clone, Debug)]
pub struct WrapperGroup {
    pub ajo_group_id: u64,
    pub base_token: Address,
    pub members: Vec<Address>,
    pub total_members: u32,
}

/// Combined wrapper-plus-core view of a multi-currency group.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultiCurrencyGroupDetails {
    pub wrapper_group_id: u64,
    pub ajo_group_id: u64,
    pub base_token: Address,
    pub name: String,
    pub contribution_amount: i128,
    pub max_members: u32,
    pub current_members: u32,
    pub is_active: bool,
    pub is_completed: bool,
    pub current_round: u32,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Core,
    Swap,
    GroupCounter,
    Group(u64),
}
