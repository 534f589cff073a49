//! Per-owner confirmation flags.
//!
//! The flag and the proposal's confirmation counter always move together:
//! after every call the counter equals the number of flags set for that
//! proposal. Callers persist the updated proposal themselves.

use soroban_sdk::{Address, Env};

use crate::errors::WalletError;
use crate::types::{DataKey, Proposal};

pub fn is_confirmed(env: &Env, id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Confirmation(id, owner.clone()))
}

pub fn record(env: &Env, proposal: &mut Proposal, owner: &Address) -> Result<(), WalletError> {
    if is_confirmed(env, proposal.id, owner) {
        return Err(WalletError::AlreadyConfirmed);
    }
    env.storage()
        .persistent()
        .set(&DataKey::Confirmation(proposal.id, owner.clone()), &true);
    proposal.confirmations += 1;
    Ok(())
}

pub fn clear(env: &Env, proposal: &mut Proposal, owner: &Address) -> Result<(), WalletError> {
    if !is_confirmed(env, proposal.id, owner) {
        return Err(WalletError::NotConfirmed);
    }
    env.storage()
        .persistent()
        .remove(&DataKey::Confirmation(proposal.id, owner.clone()));
    proposal.confirmations -= 1;
    Ok(())
}
