use log::info;

use super::{Account, AccountKind, AccountReport, WithdrawalError};
use crate::config;
use crate::registry::{AccountRegistry, Registration};

/// Checking account: withdrawals may push the balance negative, down to
/// `-overdraft_limit` and no further.
#[derive(Debug)]
pub struct CheckingAccount {
    owner: String,
    balance: f64,
    overdraft_limit: f64,
    _registration: Registration,
}

impl CheckingAccount {
    /// Open a checking account. `overdraft_limit` must be non-negative.
    pub fn new(
        registry: &AccountRegistry,
        owner: &str,
        initial_balance: f64,
        overdraft_limit: f64,
    ) -> Self {
        debug_assert!(overdraft_limit >= 0.0);
        let registration = registry.register(owner);
        info!(
            "Opened checking account for {} with balance {}",
            owner, initial_balance
        );
        Self {
            owner: owner.to_string(),
            balance: initial_balance,
            overdraft_limit,
            _registration: registration,
        }
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }
}

impl Account for CheckingAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn report(&self) -> AccountReport {
        AccountReport {
            kind: AccountKind::Checking,
            owner: self.owner.clone(),
            balance: self.balance,
            currency: config::get_config().currency,
            overdraft_limit: Some(self.overdraft_limit),
            interest_rate_percent: None,
            credit_limit: None,
        }
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), WithdrawalError> {
        if amount > 0.0 && amount <= self.balance + self.overdraft_limit {
            self.balance -= amount;
            info!(
                "Withdrew {} from {}'s checking account, balance is now {}",
                amount, self.owner, self.balance
            );
            Ok(())
        } else {
            Err(WithdrawalError::OverdraftExceeded)
        }
    }
}
