// Account variants module
// This module provides the account capability set shared by all variants,
// the concrete checking/savings/credit account types and the
// variant-conditional balance operation.

mod checking;
mod credit;
mod savings;

pub use checking::CheckingAccount;
pub use credit::CreditAccount;
pub use savings::SavingsAccount;

use serde::Serialize;
use std::fmt;

/// Withdrawal rejection kinds. Both mean the withdrawal was refused and the
/// balance is unchanged; neither is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WithdrawalError {
    /// Amount non-positive, or beyond what the variant's rule permits
    #[error("Illegal withdrawal")]
    IllegalWithdrawal,

    /// Amount beyond balance plus overdraft limit on a checking account
    #[error("Overdraft limit exceeded")]
    OverdraftExceeded,
}

/// Variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
}

impl AccountKind {
    pub fn as_str(&self) -> &str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
            AccountKind::Credit => "credit",
        }
    }

    fn label(&self) -> &str {
        match self {
            AccountKind::Checking => "Checking",
            AccountKind::Savings => "Savings",
            AccountKind::Credit => "Credit",
        }
    }
}

/// Read-only snapshot of an account: owner, balance and whatever extra
/// fields the variant carries. Backs `display_balance` and the `--json`
/// report dump; fields a variant doesn't have are omitted from JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AccountReport {
    pub kind: AccountKind,
    pub owner: String,
    pub balance: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdraft_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
}

impl fmt::Display for AccountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} balance for {} is {} {}",
            self.kind.label(),
            self.owner,
            self.balance,
            self.currency
        )?;
        if let Some(limit) = self.overdraft_limit {
            write!(f, "\nOverdraft limit: {} {}", limit, self.currency)?;
        }
        if let Some(rate) = self.interest_rate_percent {
            write!(f, "\nInterest rate: {}%", rate)?;
        }
        if let Some(limit) = self.credit_limit {
            write!(f, "\nCredit limit: {} {}", limit, self.currency)?;
        }
        Ok(())
    }
}

/// Capability set shared by all account variants.
pub trait Account {
    /// Account holder's display name.
    fn owner(&self) -> &str;

    /// Current balance.
    fn balance(&self) -> f64;

    /// Variant tag.
    fn kind(&self) -> AccountKind;

    /// Read-only snapshot of the account.
    fn report(&self) -> AccountReport;

    /// Print the balance report to stdout.
    fn display_balance(&self) {
        println!("{}", self.report());
    }

    /// Withdraw `amount` under the variant's rule. On rejection the
    /// balance is left unchanged.
    fn withdraw(&mut self, amount: f64) -> Result<(), WithdrawalError>;

    /// Capability query used by [`balance_operation`]: only the savings
    /// variant answers with itself.
    fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        None
    }
}

/// Variant-conditional operation: apply interest if the account is a
/// savings account, otherwise print its balance report. A single type test
/// against one variant, not a dispatch table.
pub fn balance_operation(account: &mut dyn Account) {
    if let Some(savings) = account.as_savings_mut() {
        savings.apply_interest();
    } else {
        account.display_balance();
    }
}
