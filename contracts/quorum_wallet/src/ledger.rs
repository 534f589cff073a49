//! Append-only proposal store. Ids are 1-based, assigned in submission
//! order, and never reused; entries are never deleted.

use soroban_sdk::Env;

use crate::errors::WalletError;
use crate::types::{DataKey, Proposal};

pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

pub fn next_id(env: &Env) -> u64 {
    count(env) + 1
}

/// Records a freshly built proposal under its id and advances the counter.
pub fn append(env: &Env, proposal: &Proposal) -> u64 {
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &proposal.id);
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
    proposal.id
}

pub fn load(env: &Env, id: u64) -> Result<Proposal, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id))
        .ok_or(WalletError::UnknownProposal)
}

pub fn store(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}
