//! Owner set and confirmation threshold.
//!
//! Mutations arrive here twice: once as submission-time pre-checks and again
//! when an approved proposal is applied. The registry may have changed in
//! between, so the apply-time path always re-validates against current state.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

pub fn init(env: &Env, owners: &Vec<Address>, threshold: u32) -> Result<(), WalletError> {
    if owners.is_empty() {
        return Err(WalletError::EmptyOwnerSet);
    }
    if threshold == 0 {
        return Err(WalletError::ThresholdOutOfRange);
    }
    if threshold > owners.len() {
        return Err(WalletError::ThresholdExceedsOwners);
    }
    let own_address = env.current_contract_address();
    for i in 0..owners.len() {
        let candidate = owners.get_unchecked(i);
        if candidate == own_address {
            return Err(WalletError::InvalidOwner);
        }
        for j in (i + 1)..owners.len() {
            if candidate == owners.get_unchecked(j) {
                return Err(WalletError::DuplicateOwner);
            }
        }
    }
    env.storage().instance().set(&DataKey::Owners, owners);
    env.storage().instance().set(&DataKey::Threshold, &threshold);
    Ok(())
}

pub fn owners(env: &Env) -> Vec<Address> {
    env.storage().instance().get(&DataKey::Owners).unwrap()
}

pub fn owner_count(env: &Env) -> u32 {
    owners(env).len()
}

pub fn is_owner(env: &Env, who: &Address) -> bool {
    owners(env).contains(who)
}

pub fn require_owner(env: &Env, who: &Address) -> Result<(), WalletError> {
    if !is_owner(env, who) {
        return Err(WalletError::NotOwner);
    }
    Ok(())
}

pub fn threshold(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Threshold).unwrap()
}

pub fn validate_new_owner(env: &Env, owner: &Address) -> Result<(), WalletError> {
    if *owner == env.current_contract_address() {
        return Err(WalletError::InvalidOwner);
    }
    if is_owner(env, owner) {
        return Err(WalletError::DuplicateOwner);
    }
    Ok(())
}

pub fn validate_removal(env: &Env, owner: &Address) -> Result<(), WalletError> {
    if !is_owner(env, owner) {
        return Err(WalletError::UnknownOwner);
    }
    if owner_count(env) - 1 < threshold(env) {
        return Err(WalletError::ThresholdExceedsOwners);
    }
    Ok(())
}

pub fn validate_threshold(env: &Env, new_threshold: u32) -> Result<(), WalletError> {
    if new_threshold == 0 || new_threshold > owner_count(env) {
        return Err(WalletError::ThresholdOutOfRange);
    }
    if new_threshold == threshold(env) {
        return Err(WalletError::ThresholdUnchanged);
    }
    Ok(())
}

pub fn add_owner(env: &Env, owner: &Address) -> Result<(), WalletError> {
    validate_new_owner(env, owner)?;
    let mut list = owners(env);
    list.push_back(owner.clone());
    env.storage().instance().set(&DataKey::Owners, &list);
    Ok(())
}

// Swap-remove: the freed slot takes the last element, so the list does not
// keep insertion order.
pub fn remove_owner(env: &Env, owner: &Address) -> Result<(), WalletError> {
    validate_removal(env, owner)?;
    let mut list = owners(env);
    let idx = list.iter().position(|o| o == *owner).unwrap() as u32;
    let last = list.len() - 1;
    if idx != last {
        list.set(idx, list.get_unchecked(last));
    }
    list.pop_back();
    env.storage().instance().set(&DataKey::Owners, &list);
    Ok(())
}

pub fn set_threshold(env: &Env, new_threshold: u32) -> Result<(), WalletError> {
    validate_threshold(env, new_threshold)?;
    env.storage().instance().set(&DataKey::Threshold, &new_threshold);
    Ok(())
}
