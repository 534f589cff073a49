use soroban_sdk::{contract, contractimpl, token, Address, Bytes, Env, Vec};

use crate::confirmations;
use crate::errors::WalletError;
use crate::events;
use crate::ledger;
use crate::quorum;
use crate::registry;
use crate::types::{
    DataKey, Proposal, ProposalAction, MAX_BATCH_CONFIRMATIONS, MAX_EXPIRY_SECS,
    MAX_PAYLOAD_BYTES, MIN_EXPIRY_SECS,
};

#[contract]
pub struct QuorumWallet;

#[contractimpl]
impl QuorumWallet {
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        threshold: u32,
        native_asset: Address,
    ) -> Result<(), WalletError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::AlreadyInitialized);
        }

        registry::init(&env, &owners, threshold)?;
        env.storage()
            .instance()
            .set(&DataKey::NativeAsset, &native_asset);
        env.storage().instance().set(&DataKey::Initialized, &true);

        events::initialized(&env, &owners, threshold);
        Ok(())
    }

    pub fn submit_transfer(
        env: Env,
        proposer: Address,
        asset: Option<Address>,
        target: Address,
        amount: i128,
        payload: Bytes,
        expires_in: u64,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        proposer.require_auth();
        registry::require_owner(&env, &proposer)?;
        let expires_at = Self::expiry_from_offset(&env, expires_in)?;

        // Self-addressed proposals are reserved for administration.
        if target == env.current_contract_address() {
            return Err(WalletError::InvalidTarget);
        }
        if amount < 0 {
            return Err(WalletError::InvalidAmount);
        }
        if payload.len() > MAX_PAYLOAD_BYTES {
            return Err(WalletError::PayloadTooLarge);
        }

        Self::submit(
            &env,
            proposer,
            ProposalAction::Transfer,
            asset,
            target,
            amount,
            payload,
            expires_at,
        )
    }

    pub fn submit_add_owner(
        env: Env,
        proposer: Address,
        new_owner: Address,
        expires_in: u64,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        proposer.require_auth();
        registry::require_owner(&env, &proposer)?;
        let expires_at = Self::expiry_from_offset(&env, expires_in)?;

        registry::validate_new_owner(&env, &new_owner)?;
        Self::submit_administration(&env, proposer, ProposalAction::AddOwner(new_owner), expires_at)
    }

    pub fn submit_remove_owner(
        env: Env,
        proposer: Address,
        owner: Address,
        expires_in: u64,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        proposer.require_auth();
        registry::require_owner(&env, &proposer)?;
        let expires_at = Self::expiry_from_offset(&env, expires_in)?;

        registry::validate_removal(&env, &owner)?;
        Self::submit_administration(&env, proposer, ProposalAction::RemoveOwner(owner), expires_at)
    }

    pub fn submit_set_threshold(
        env: Env,
        proposer: Address,
        new_threshold: u32,
        expires_in: u64,
    ) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        proposer.require_auth();
        registry::require_owner(&env, &proposer)?;
        let expires_at = Self::expiry_from_offset(&env, expires_in)?;

        registry::validate_threshold(&env, new_threshold)?;
        Self::submit_administration(
            &env,
            proposer,
            ProposalAction::SetThreshold(new_threshold),
            expires_at,
        )
    }

    pub fn confirm(env: Env, owner: Address, proposal_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        registry::require_owner(&env, &owner)?;
        Self::confirm_one(&env, &owner, proposal_id)
    }

    pub fn confirm_batch(
        env: Env,
        owner: Address,
        proposal_ids: Vec<u64>,
    ) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        registry::require_owner(&env, &owner)?;

        if proposal_ids.len() > MAX_BATCH_CONFIRMATIONS {
            return Err(WalletError::BatchTooLarge);
        }

        // All-or-nothing: the first failing entry aborts the call and the
        // host discards the confirmations recorded before it.
        for proposal_id in proposal_ids.iter() {
            Self::confirm_one(&env, &owner, proposal_id)?;
        }
        Ok(())
    }

    pub fn revoke(env: Env, owner: Address, proposal_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        owner.require_auth();
        registry::require_owner(&env, &owner)?;

        let mut proposal = ledger::load(&env, proposal_id)?;
        quorum::require_active(&proposal, env.ledger().timestamp())?;
        confirmations::clear(&env, &mut proposal, &owner)?;
        ledger::store(&env, &proposal);

        events::revoked(&env, proposal_id, &owner, proposal.confirmations);
        Ok(())
    }

    pub fn execute(env: Env, caller: Address, proposal_id: u64) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        registry::require_owner(&env, &caller)?;

        let mut proposal = ledger::load(&env, proposal_id)?;
        let now = env.ledger().timestamp();
        quorum::require_executable(&proposal, registry::threshold(&env), now)?;

        // Committed before the effect: a reentrant execute of the same id
        // now fails with AlreadyExecuted, and any failure below makes the
        // host discard this write with the rest of the invocation.
        proposal.executed = true;
        ledger::store(&env, &proposal);

        match proposal.action.clone() {
            ProposalAction::Transfer => {
                Self::pay_out(&env, &proposal)?;
            }
            ProposalAction::AddOwner(owner) => {
                Self::require_administration(&env, &proposal)?;
                registry::add_owner(&env, &owner)?;
                events::owner_added(&env, proposal_id, &owner);
            }
            ProposalAction::RemoveOwner(owner) => {
                Self::require_administration(&env, &proposal)?;
                registry::remove_owner(&env, &owner)?;
                events::owner_removed(&env, proposal_id, &owner);
            }
            ProposalAction::SetThreshold(new_threshold) => {
                Self::require_administration(&env, &proposal)?;
                let old = registry::threshold(&env);
                registry::set_threshold(&env, new_threshold)?;
                events::threshold_changed(&env, proposal_id, old, new_threshold);
            }
        }

        events::executed(&env, proposal_id, &proposal.target, proposal.amount);
        Ok(())
    }

    pub fn deposit(
        env: Env,
        from: Address,
        asset: Option<Address>,
        amount: i128,
    ) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let token_address = Self::resolve_asset(&env, &asset);
        token::Client::new(&env, &token_address).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        events::deposited(&env, &from, &asset, amount);
        Ok(())
    }

    pub fn owners(env: Env) -> Result<Vec<Address>, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::owners(&env))
    }

    pub fn owner_count(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::owner_count(&env))
    }

    pub fn threshold(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::threshold(&env))
    }

    pub fn is_owner(env: Env, who: Address) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        Ok(registry::is_owner(&env, &who))
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, WalletError> {
        Self::require_initialized(&env)?;
        ledger::load(&env, proposal_id)
    }

    pub fn get_proposal_count(env: Env) -> Result<u64, WalletError> {
        Self::require_initialized(&env)?;
        Ok(ledger::count(&env))
    }

    pub fn is_confirmed(env: Env, proposal_id: u64, owner: Address) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        Ok(confirmations::is_confirmed(&env, proposal_id, &owner))
    }

    fn require_initialized(env: &Env) -> Result<(), WalletError> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::NotInitialized);
        }
        Ok(())
    }

    fn expiry_from_offset(env: &Env, expires_in: u64) -> Result<u64, WalletError> {
        if expires_in < MIN_EXPIRY_SECS || expires_in > MAX_EXPIRY_SECS {
            return Err(WalletError::InvalidExpiry);
        }
        Ok(env.ledger().timestamp() + expires_in)
    }

    fn submit(
        env: &Env,
        proposer: Address,
        action: ProposalAction,
        asset: Option<Address>,
        target: Address,
        amount: i128,
        payload: Bytes,
        expires_at: u64,
    ) -> Result<u64, WalletError> {
        let proposal = Proposal {
            id: ledger::next_id(env),
            proposer: proposer.clone(),
            action,
            asset: asset.clone(),
            target: target.clone(),
            amount,
            payload: payload.clone(),
            confirmations: 0,
            created_at: env.ledger().timestamp(),
            expires_at,
            executed: false,
        };
        let id = ledger::append(env, &proposal);

        events::submitted(env, id, &proposer, &asset, &target, amount, &payload, expires_at);
        Ok(id)
    }

    fn submit_administration(
        env: &Env,
        proposer: Address,
        action: ProposalAction,
        expires_at: u64,
    ) -> Result<u64, WalletError> {
        Self::submit(
            env,
            proposer,
            action,
            None,
            env.current_contract_address(),
            0,
            Bytes::new(env),
            expires_at,
        )
    }

    fn confirm_one(env: &Env, owner: &Address, proposal_id: u64) -> Result<(), WalletError> {
        let mut proposal = ledger::load(env, proposal_id)?;
        quorum::require_active(&proposal, env.ledger().timestamp())?;
        confirmations::record(env, &mut proposal, owner)?;
        ledger::store(env, &proposal);

        events::confirmed(env, proposal_id, owner, proposal.confirmations);
        Ok(())
    }

    // Administration actions are only valid as the self-addressed,
    // zero-value proposals built by submit_administration.
    fn require_administration(env: &Env, proposal: &Proposal) -> Result<(), WalletError> {
        if proposal.target != env.current_contract_address() || proposal.amount != 0 {
            return Err(WalletError::InvalidProposal);
        }
        Ok(())
    }

    fn resolve_asset(env: &Env, asset: &Option<Address>) -> Address {
        match asset {
            Some(token_address) => token_address.clone(),
            None => env.storage().instance().get(&DataKey::NativeAsset).unwrap(),
        }
    }

    fn pay_out(env: &Env, proposal: &Proposal) -> Result<(), WalletError> {
        let token_address = Self::resolve_asset(env, &proposal.asset);
        let client = token::Client::new(env, &token_address);

        let held = client.balance(&env.current_contract_address());
        if held < proposal.amount {
            return Err(WalletError::InsufficientBalance);
        }

        match client.try_transfer(
            &env.current_contract_address(),
            &proposal.target,
            &proposal.amount,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(WalletError::ExternalCallFailed),
        }
    }
}
