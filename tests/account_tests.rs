use bank_account_variants::account::{
    balance_operation, Account, AccountKind, CheckingAccount, CreditAccount, SavingsAccount,
    WithdrawalError,
};
use bank_account_variants::registry::AccountRegistry;
use rstest::rstest;

#[test]
fn checking_withdrawal_within_overdraft() {
    let registry = AccountRegistry::new();
    let mut checking = CheckingAccount::new(&registry, "Popescu Ioan", 1000.0, 500.0);

    checking.withdraw(800.0).unwrap();

    assert_eq!(checking.balance(), 200.0);
}

#[test]
fn savings_interest_application() {
    let registry = AccountRegistry::new();
    let mut savings = SavingsAccount::new(&registry, "Ionescu Mihai", 2000.0, 2.5);

    savings.apply_interest();

    assert!((savings.balance() - 2050.0).abs() < 1e-9);
}

#[test]
fn credit_withdrawal_beyond_limit_is_illegal() {
    let registry = AccountRegistry::new();
    let mut credit = CreditAccount::new(&registry, "Alice", 1500.0, 2.0, 1000.0);

    let err = credit.withdraw(3000.0).unwrap_err();

    assert_eq!(err, WithdrawalError::IllegalWithdrawal);
    assert_eq!(credit.balance(), 1500.0);
}

#[test]
fn active_count_follows_scope() {
    let registry = AccountRegistry::new();
    {
        let _checking = CheckingAccount::new(&registry, "Popescu Ioan", 1000.0, 500.0);
        let _savings = SavingsAccount::new(&registry, "Ionescu Mihai", 2000.0, 2.5);
        let _credit = CreditAccount::new(&registry, "Alice", 1500.0, 2.0, 1000.0);
        assert_eq!(registry.active_accounts(), 3);
    }
    assert_eq!(registry.active_accounts(), 0);
}

#[rstest]
#[case(500.0, true)]
#[case(1500.0, true)]
#[case(1500.01, false)]
#[case(0.0, false)]
#[case(-100.0, false)]
fn checking_withdrawal_bound(#[case] amount: f64, #[case] allowed: bool) {
    let registry = AccountRegistry::new();
    let mut checking = CheckingAccount::new(&registry, "Popescu Ioan", 1000.0, 500.0);

    let result = checking.withdraw(amount);

    if allowed {
        result.unwrap();
        assert_eq!(checking.balance(), 1000.0 - amount);
        assert!(checking.balance() >= -checking.overdraft_limit());
    } else {
        assert_eq!(result.unwrap_err(), WithdrawalError::OverdraftExceeded);
        assert_eq!(checking.balance(), 1000.0);
    }
}

#[rstest]
#[case(2500.0, true)]
#[case(2500.01, false)]
#[case(0.0, false)]
fn credit_withdrawal_bound(#[case] amount: f64, #[case] allowed: bool) {
    let registry = AccountRegistry::new();
    let mut credit = CreditAccount::new(&registry, "Alice", 1500.0, 2.0, 1000.0);

    let result = credit.withdraw(amount);

    if allowed {
        result.unwrap();
        assert_eq!(credit.balance(), 1500.0 - amount);
    } else {
        assert_eq!(result.unwrap_err(), WithdrawalError::IllegalWithdrawal);
        assert_eq!(credit.balance(), 1500.0);
    }
}

#[test]
fn dispatch_mutates_only_savings() {
    let registry = AccountRegistry::new();
    let mut checking = CheckingAccount::new(&registry, "Popescu Ioan", 1000.0, 500.0);
    let mut savings = SavingsAccount::new(&registry, "Ionescu Mihai", 2000.0, 2.5);
    let mut credit = CreditAccount::new(&registry, "Alice", 1500.0, 2.0, 1000.0);

    let accounts: [&mut dyn Account; 3] = [&mut checking, &mut savings, &mut credit];
    for account in accounts {
        balance_operation(account);
    }

    assert_eq!(checking.balance(), 1000.0);
    assert!((savings.balance() - 2050.0).abs() < 1e-9);
    assert_eq!(credit.balance(), 1500.0);
}

// The demonstration sequence from the driver, end to end: the counter
// reads 2 mid-run, 3 once the credit account exists and 0 after the
// scenario scope closes.
#[test]
fn demonstration_sequence() {
    let registry = AccountRegistry::new();

    let result: Result<(), WithdrawalError> = (|| {
        let mut checking = CheckingAccount::new(&registry, "Popescu Ioan", 1000.0, 500.0);
        balance_operation(&mut checking);

        let mut savings = SavingsAccount::new(&registry, "Ionescu Mihai", 2000.0, 2.5);
        balance_operation(&mut savings);

        assert_eq!(registry.active_accounts(), 2);

        let mut credit = CreditAccount::new(&registry, "Alice", 1500.0, 2.0, 1000.0);
        balance_operation(&mut credit);

        assert_eq!(registry.active_accounts(), 3);

        checking.withdraw(800.0)?;
        assert_eq!(checking.balance(), 200.0);
        Ok(())
    })();

    result.unwrap();
    assert_eq!(registry.active_accounts(), 0);
}

#[test]
fn reports_carry_the_variant_tag() {
    let registry = AccountRegistry::new();
    let checking = CheckingAccount::new(&registry, "Popescu Ioan", 1000.0, 500.0);
    let savings = SavingsAccount::new(&registry, "Ionescu Mihai", 2000.0, 2.5);
    let credit = CreditAccount::new(&registry, "Alice", 1500.0, 2.0, 1000.0);

    assert_eq!(checking.report().kind, AccountKind::Checking);
    assert_eq!(savings.report().kind, AccountKind::Savings);
    assert_eq!(credit.report().kind, AccountKind::Credit);
    assert_eq!(checking.kind().as_str(), "checking");
}
