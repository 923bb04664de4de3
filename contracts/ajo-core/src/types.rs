use soroban_sdk::{contracttype, Address, Map, String, Vec};

/// Status of an ajo group throughout its lifecycle.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum GroupStatus {
    Forming,   // Accepting members, not yet at capacity
    Active,    // Rounds in progress
    Completed, // Every member has received one payout
}

/// A registered participant.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Member {
    pub name: String,
    pub reputation_score: u32,
    pub registered_at: u64,
}

/// A registered participant promoted to ajo agent (group creator).
#[contracttype]
#[derive(Clone, Debug)]
pub struct AjoAgent {
    pub name: String,
    pub contact_info: String,
    pub is_active: bool,
    pub registered_at: u64,
}

/// Core ajo group configuration and state.
#[contracttype]
#[derive(Clone, Debug)]
pub struct AjoGroup {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub creator: Address,
    pub token: Address,
    pub contribution_amount: i128,
    pub contribution_frequency: u64,
    pub max_members: u32,
    pub members: Vec<Address>,
    pub payout_order: Vec<Address>,
    pub current_round: u32,
    pub status: GroupStatus,
    pub created_at: u64,
}

/// Tracks contributions and the recipient for a single round.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RoundInfo {
    pub round_number: u32,
    pub recipient: Address,
    pub contributions: Map<Address, bool>,
    pub total_contributed: i128,
    pub is_complete: bool,
    pub deadline: u64,
}

/// Bounded-use, time-limited admission token scoped to one group.
#[contracttype]
#[derive(Clone, Debug)]
pub struct InviteCode {
    pub code: String,
    pub group_id: u64,
    pub created_by: Address,
    pub max_uses: u32,
    pub uses_remaining: u32,
    pub expires_at: u64,
    pub is_active: bool,
}

/// Flattened group view returned by the summary and listing entry points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupSummary {
    pub id: u64,
    pub name: String,
    pub creator: Address,
    pub token: Address,
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
    Owner,
    Paused,
    PlatformFeeBps,
    GroupCounter,
    InviteNonce,
    SupportedTokens,
    TrustedContracts,
    Member(Address),
    Agent(Address),
    Group(u64),
    Round(u64, u32),
    Invite(String),
    MemberGroups(Address),
}
