use soroban_sdk::{symbol_short, Address, Bytes, Env, Symbol, Vec};

const INITIALIZED: Symbol = symbol_short!("init");
const SUBMITTED: Symbol = symbol_short!("submitted");
const CONFIRMED: Symbol = symbol_short!("confirmed");
const REVOKED: Symbol = symbol_short!("revoked");
const EXECUTED: Symbol = symbol_short!("executed");
const OWNER_ADDED: Symbol = symbol_short!("owner_add");
const OWNER_REMOVED: Symbol = symbol_short!("owner_rem");
const THRESHOLD_CHANGED: Symbol = symbol_short!("threshold");
const DEPOSITED: Symbol = symbol_short!("deposit");

pub fn initialized(env: &Env, owners: &Vec<Address>, threshold: u32) {
    env.events()
        .publish((INITIALIZED,), (owners.clone(), threshold));
}

pub fn submitted(
    env: &Env,
    id: u64,
    proposer: &Address,
    asset: &Option<Address>,
    target: &Address,
    amount: i128,
    payload: &Bytes,
    expires_at: u64,
) {
    env.events().publish(
        (SUBMITTED, id),
        (
            proposer.clone(),
            asset.clone(),
            target.clone(),
            amount,
            payload.clone(),
            expires_at,
        ),
    );
}

pub fn confirmed(env: &Env, id: u64, owner: &Address, confirmations: u32) {
    env.events()
        .publish((CONFIRMED, id), (owner.clone(), confirmations));
}

pub fn revoked(env: &Env, id: u64, owner: &Address, confirmations: u32) {
    env.events()
        .publish((REVOKED, id), (owner.clone(), confirmations));
}

pub fn executed(env: &Env, id: u64, target: &Address, amount: i128) {
    env.events()
        .publish((EXECUTED, id), (target.clone(), amount));
}

pub fn owner_added(env: &Env, id: u64, owner: &Address) {
    env.events().publish((OWNER_ADDED, id), owner.clone());
}

pub fn owner_removed(env: &Env, id: u64, owner: &Address) {
    env.events().publish((OWNER_REMOVED, id), owner.clone());
}

pub fn threshold_changed(env: &Env, id: u64, old: u32, new: u32) {
    env.events().publish((THRESHOLD_CHANGED, id), (old, new));
}

pub fn deposited(env: &Env, from: &Address, asset: &Option<Address>, amount: i128) {
    env.events()
        .publish((DEPOSITED,), (from.clone(), asset.clone(), amount));
}
