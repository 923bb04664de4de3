use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    SystemPaused = 2,
    InvalidName = 3,
    AlreadyRegistered = 4,
    NotRegistered = 5,
    AlreadyAgent = 6,
    NotAgent = 7,
    InsufficientReputation = 8,
    GroupNotFound = 9,
    GroupFull = 10,
    AlreadyMember = 11,
    NotMember = 12,
    GroupNotActive = 13,
    AlreadyContributed = 14,
    RoundNotActive = 15,
    RoundIncomplete = 16,
    NotRecipient = 17,
    InvalidAmount = 18,
    InvalidMemberCount = 19,
    TokenNotSupported = 20,
    InviteNotActive = 21,
    InviteExpired = 22,
    InviteExhausted = 23,
    InvalidInviteParams = 24,
    FeeTooHigh = 25,
    NotTrusted = 26,
}
