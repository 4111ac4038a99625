//! Anti-bot transfer guard.
//!
//! While protection is active, a transfer must involve at least one
//! whitelisted party and stay within the per-transaction and per-wallet
//! limits. The check is a pure function over values read from storage right
//! before the transfer it gates, so it never sees stale balances.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Owner-tunable guard thresholds, stored as a single value.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct GuardConfig {
    /// Largest amount a single transfer may move.
    pub transaction_limit: u128,
    /// Largest balance a recipient may hold once the transfer lands.
    pub wallet_balance_limit: u128,
    /// Master switch for the whitelist and both limits.
    pub anti_bot_enabled: bool,
}

/// What the guard needs to know about a pending transfer.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub struct TransferSnapshot {
    pub sender_whitelisted: bool,
    pub recipient_whitelisted: bool,
    /// Recipient balance before the transfer.
    pub recipient_balance: u128,
    pub amount: u128,
}

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum GuardError {
    /// Neither party is whitelisted.
    TransactionsDisabled,
    /// Amount is above the transaction limit.
    TransactionLimitExceeded,
    /// Recipient would end up above the wallet balance limit.
    WalletBalanceLimitExceeded,
}

impl GuardConfig {
    /// Evaluate the guard for one transfer.
    ///
    /// Limits are inclusive: moving exactly `transaction_limit`, or landing
    /// exactly on `wallet_balance_limit`, is allowed. Whitelisting either
    /// party only lifts the blanket rejection; both limits still apply.
    pub fn check_transfer(&self, transfer: &TransferSnapshot) -> Result<(), GuardError> {
        if !self.anti_bot_enabled {
            return Ok(());
        }
        if !transfer.sender_whitelisted && !transfer.recipient_whitelisted {
            return Err(GuardError::TransactionsDisabled);
        }
        if transfer.amount > self.transaction_limit {
            return Err(GuardError::TransactionLimitExceeded);
        }
        match transfer.recipient_balance.checked_add(transfer.amount) {
            Some(resulting) if resulting <= self.wallet_balance_limit => Ok(()),
            _ => Err(GuardError::WalletBalanceLimitExceeded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVE: GuardConfig =
        GuardConfig { transaction_limit: 50, wallet_balance_limit: 500, anti_bot_enabled: true };

    fn snapshot(sender: bool, recipient: bool, balance: u128, amount: u128) -> TransferSnapshot {
        TransferSnapshot {
            sender_whitelisted: sender,
            recipient_whitelisted: recipient,
            recipient_balance: balance,
            amount,
        }
    }

    #[test]
    fn disabled_guard_allows_everything() {
        let config = GuardConfig { anti_bot_enabled: false, ..ACTIVE };
        assert_eq!(config.check_transfer(&snapshot(false, false, u128::MAX, u128::MAX)), Ok(()));
    }

    #[test]
    fn rejects_when_neither_party_is_whitelisted() {
        for amount in [0, 1, 50, 51, u128::MAX] {
            assert_eq!(
                ACTIVE.check_transfer(&snapshot(false, false, 0, amount)),
                Err(GuardError::TransactionsDisabled)
            );
        }
    }

    #[test]
    fn either_party_opens_the_gate() {
        assert_eq!(ACTIVE.check_transfer(&snapshot(true, false, 0, 10)), Ok(()));
        assert_eq!(ACTIVE.check_transfer(&snapshot(false, true, 0, 10)), Ok(()));
        assert_eq!(ACTIVE.check_transfer(&snapshot(true, true, 0, 10)), Ok(()));
    }

    #[test]
    fn transaction_limit_is_inclusive() {
        assert_eq!(ACTIVE.check_transfer(&snapshot(true, true, 0, 50)), Ok(()));
        assert_eq!(
            ACTIVE.check_transfer(&snapshot(true, true, 0, 51)),
            Err(GuardError::TransactionLimitExceeded)
        );
    }

    #[test]
    fn whitelisting_does_not_lift_limits() {
        assert_eq!(
            ACTIVE.check_transfer(&snapshot(true, true, 0, 1_000)),
            Err(GuardError::TransactionLimitExceeded)
        );
        assert_eq!(
            ACTIVE.check_transfer(&snapshot(true, true, 490, 20)),
            Err(GuardError::WalletBalanceLimitExceeded)
        );
    }

    #[test]
    fn wallet_limit_is_inclusive() {
        assert_eq!(ACTIVE.check_transfer(&snapshot(true, false, 450, 50)), Ok(()));
        assert_eq!(
            ACTIVE.check_transfer(&snapshot(true, false, 451, 50)),
            Err(GuardError::WalletBalanceLimitExceeded)
        );
    }

    #[test]
    fn transaction_limit_is_checked_before_wallet_limit() {
        assert_eq!(
            ACTIVE.check_transfer(&snapshot(true, true, 500, 51)),
            Err(GuardError::TransactionLimitExceeded)
        );
    }

    #[test]
    fn overflowing_recipient_balance_exceeds_wallet_limit() {
        let config = GuardConfig {
            transaction_limit: u128::MAX,
            wallet_balance_limit: u128::MAX,
            anti_bot_enabled: true,
        };
        assert_eq!(
            config.check_transfer(&snapshot(true, true, u128::MAX, 1)),
            Err(GuardError::WalletBalanceLimitExceeded)
        );
    }
}
