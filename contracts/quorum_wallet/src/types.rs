use soroban_sdk::{contracttype, Address, Bytes};

/// Upper bound on the opaque payload carried by a transfer proposal.
pub const MAX_PAYLOAD_BYTES: u32 = 1024;

/// Upper bound on the number of proposals one batch confirmation may touch.
pub const MAX_BATCH_CONFIRMATIONS: u32 = 10;

// Proposals must stay open for at least 1 hour and at most 30 days.
pub const MIN_EXPIRY_SECS: u64 = 3_600;
pub const MAX_EXPIRY_SECS: u64 = 2_592_000;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    Threshold,
    NativeAsset,
    ProposalCount,
    Proposal(u64),
    Confirmation(u64, Address),
}

/// What an executed proposal does. Decoded once at submission; the
/// dispatcher never re-parses bytes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalAction {
    Transfer,
    AddOwner(Address),
    RemoveOwner(Address),
    SetThreshold(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub action: ProposalAction,
    pub asset: Option<Address>, // None = the native asset set at initialization
    pub target: Address,
    pub amount: i128,
    pub payload: Bytes,
    pub confirmations: u32,
    pub created_at: u64,
    pub expires_at: u64,
    pub executed: bool,
}
