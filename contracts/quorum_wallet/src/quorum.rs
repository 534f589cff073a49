//! Proposal state guards.
//!
//! Guard order is fixed so every operation reports the same error for the
//! same state: expiry first, then executed, then quorum. Existence is
//! covered by the ledger load that precedes these checks. A proposal is
//! still active at the instant `now == expires_at`.

use crate::errors::WalletError;
use crate::types::Proposal;

pub fn require_active(proposal: &Proposal, now: u64) -> Result<(), WalletError> {
    if now > proposal.expires_at {
        return Err(WalletError::ProposalExpired);
    }
    if proposal.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    Ok(())
}

pub fn require_executable(
    proposal: &Proposal,
    threshold: u32,
    now: u64,
) -> Result<(), WalletError> {
    require_active(proposal, now)?;
    if proposal.confirmations < threshold {
        return Err(WalletError::QuorumNotMet);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Bytes, Env};

    use super::*;
    use crate::types::ProposalAction;

    fn sample(env: &Env, confirmations: u32, expires_at: u64, executed: bool) -> Proposal {
        Proposal {
            id: 1,
            proposer: Address::generate(env),
            action: ProposalAction::Transfer,
            asset: None,
            target: Address::generate(env),
            amount: 100,
            payload: Bytes::new(env),
            confirmations,
            created_at: 0,
            expires_at,
            executed,
        }
    }

    #[test]
    fn active_through_deadline_inclusive() {
        let env = Env::default();
        let proposal = sample(&env, 0, 100, false);
        assert_eq!(require_active(&proposal, 100), Ok(()));
        assert_eq!(
            require_active(&proposal, 101),
            Err(WalletError::ProposalExpired)
        );
    }

    #[test]
    fn expired_reported_before_executed() {
        let env = Env::default();
        let proposal = sample(&env, 5, 100, true);
        assert_eq!(
            require_active(&proposal, 101),
            Err(WalletError::ProposalExpired)
        );
        assert_eq!(
            require_active(&proposal, 100),
            Err(WalletError::AlreadyExecuted)
        );
    }

    #[test]
    fn quorum_met_exactly_at_threshold() {
        let env = Env::default();
        let proposal = sample(&env, 2, 100, false);
        assert_eq!(
            require_executable(&proposal, 3, 50),
            Err(WalletError::QuorumNotMet)
        );
        assert_eq!(require_executable(&proposal, 2, 50), Ok(()));
    }
}
