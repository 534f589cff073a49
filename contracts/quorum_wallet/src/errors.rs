use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    EmptyOwnerSet = 3,
    DuplicateOwner = 4,
    InvalidOwner = 5,
    UnknownOwner = 6,
    NotOwner = 7,
    ThresholdOutOfRange = 8,
    ThresholdExceedsOwners = 9,
    ThresholdUnchanged = 10,
    UnknownProposal = 11,
    AlreadyExecuted = 12,
    AlreadyConfirmed = 13,
    NotConfirmed = 14,
    ProposalExpired = 15,
    QuorumNotMet = 16,
    InsufficientBalance = 17,
    ExternalCallFailed = 18,
    InvalidTarget = 19,
    PayloadTooLarge = 20,
    BatchTooLarge = 21,
    InvalidExpiry = 22,
    InvalidAmount = 23,
    InvalidProposal = 24,
}
