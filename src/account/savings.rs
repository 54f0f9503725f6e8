use log::info;

use super::{Account, AccountKind, AccountReport, WithdrawalError};
use crate::config;
use crate::registry::{AccountRegistry, Registration};

/// Savings account: base withdrawal rule (no negative balance), plus
/// compounding interest applied on demand.
#[derive(Debug)]
pub struct SavingsAccount {
    owner: String,
    balance: f64,
    interest_rate_percent: f64,
    _registration: Registration,
}

impl SavingsAccount {
    /// Open a savings account. `interest_rate_percent` must be
    /// non-negative.
    pub fn new(
        registry: &AccountRegistry,
        owner: &str,
        initial_balance: f64,
        interest_rate_percent: f64,
    ) -> Self {
        debug_assert!(interest_rate_percent >= 0.0);
        let registration = registry.register(owner);
        info!(
            "Opened savings account for {} with balance {}",
            owner, initial_balance
        );
        Self {
            owner: owner.to_string(),
            balance: initial_balance,
            interest_rate_percent,
            _registration: registration,
        }
    }

    pub fn interest_rate_percent(&self) -> f64 {
        self.interest_rate_percent
    }

    /// Credit one period of interest to the balance and return the new
    /// balance. Repeated calls compound.
    pub fn apply_interest(&mut self) -> f64 {
        let earned = self.balance * (self.interest_rate_percent / 100.0);
        self.balance += earned;
        info!(
            "Applied {}% interest for {}, balance is now {}",
            self.interest_rate_percent, self.owner, self.balance
        );
        self.balance
    }
}

impl Account for SavingsAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> f64 {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn report(&self) -> AccountReport {
        AccountReport {
            kind: AccountKind::Savings,
            owner: self.owner.clone(),
            balance: self.balance,
            currency: config::get_config().currency,
            overdraft_limit: None,
            interest_rate_percent: Some(self.interest_rate_percent),
            credit_limit: None,
        }
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), WithdrawalError> {
        if amount > 0.0 && amount <= self.balance {
            self.balance -= amount;
            info!(
                "Withdrew {} from {}'s savings account, balance is now {}",
                amount, self.owner, self.balance
            );
            Ok(())
        } else {
            Err(WithdrawalError::IllegalWithdrawal)
        }
    }

    fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        Some(self)
    }
}
