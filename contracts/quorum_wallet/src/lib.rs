#![no_std]

mod confirmations;
mod errors;
mod events;
mod ledger;
mod quorum;
mod registry;
mod types;
mod wallet;

pub use crate::errors::WalletError;
pub use crate::types::{
    DataKey, Proposal, ProposalAction, MAX_BATCH_CONFIRMATIONS, MAX_EXPIRY_SECS,
    MAX_PAYLOAD_BYTES, MIN_EXPIRY_SECS,
};
pub use crate::wallet::{QuorumWallet, QuorumWalletClient};
