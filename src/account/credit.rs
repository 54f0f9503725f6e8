use log::info;

use super::{Account, AccountKind, AccountReport, WithdrawalError};
use crate::config;
use crate::registry::{AccountRegistry, Registration};

/// Credit account: withdrawals may push the balance negative, down to
/// `-credit_limit`. The interest rate is informational and only shows up
/// in the balance report.
#[derive(Debug)]
pub struct CreditAccount {
    owner: String,
    balance: f64,
    interest_rate_percent: f64,
    credit_limit: f64,
    _registration: Registration,
}

impl CreditAccount {
    /// Open a credit account. `interest_rate_percent` and `credit_limit`
    /// must be non-negative.
    pub fn new(
        registry: &AccountRegistry,
        owner: &str,
        initial_balance: f64,
        interest_rate_percent: f64,
        credit_limit: f64,
    ) -> Self {
        debug_assert!(interest_rate_percent >= 0.0);
        debug_assert!(credit_limit >= 0.0);
        let registration = registry.register(owner);
        info!(
            "Opened credit account for {} with balance {}",
            owner, initial_balance
        );
        Self {
            owner: owner.to_string(),
            balance: initial_balance,
            interest_rate_percent,
            credit_limit,
            _registration: registration,
        }
    }

    pub fn interest_rate_percent(&self) -> f64 {
        self.interest_rate_percent
    }

    pub fn credit_limit(&self) -> f64 {
        self.credit_limit
    }
}

impl Account for CreditAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Credit
    }

    fn report(&self) -> AccountReport {
        AccountReport {
            kind: AccountKind::Credit,
            owner: self.owner.clone(),
            balance: self.balance,
            currency: config::get_config().currency,
            overdraft_limit: None,
            interest_rate_percent: Some(self.interest_rate_percent),
            credit_limit: Some(self.credit_limit),
        }
    }

    // Limit violations report the generic kind, not a dedicated one.
    fn withdraw(&mut self, amount: f64) -> Result<(), WithdrawalError> {
        if amount > 0.0 && amount <= self.balance + self.credit_limit {
            self.balance -= amount;
            info!(
                "Withdrew {} from {}'s credit account, balance is now {}",
                amount, self.owner, self.balance
            );
            Ok(())
        } else {
            Err(WithdrawalError::IllegalWithdrawal)
        }
    }
}
