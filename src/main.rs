use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::error;
use std::process;

use bank_account_variants::account::{
    balance_operation, Account, CheckingAccount, CreditAccount, SavingsAccount,
};
use bank_account_variants::config;
use bank_account_variants::registry::AccountRegistry;

/// Bank Account Variants - polymorphic balance display and withdrawal rules
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Sets the configuration file
    #[clap(short, long, value_name = "FILE", default_value = "config.toml")]
    config: String,

    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Dump the account reports as JSON at the end of the run
    #[clap(long)]
    json: bool,
}

fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    let level = match cli.debug {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(e) = config::load_config(&cli.config) {
        error!("Failed to load configuration: {}", e);
        process::exit(1);
    }

    let registry = AccountRegistry::new();

    // A rejected withdrawal is reported, not fatal; the run still ends
    // with the final active-account count.
    if let Err(e) = run_scenario(&registry, cli.json) {
        error!("Scenario aborted: {}", e);
    }

    println!("Total active accounts: {}", registry.active_accounts());
}

/// The demonstration sequence: one account of each variant, a balance
/// operation dispatched on each, a mid-run active-count query and a
/// withdrawal from the checking account. All accounts drop when this
/// returns.
fn run_scenario(registry: &AccountRegistry, json: bool) -> Result<()> {
    let cfg = config::get_config();

    let mut checking = CheckingAccount::new(
        registry,
        &cfg.demo.checking.owner,
        cfg.demo.checking.initial_balance,
        cfg.demo.checking.overdraft_limit,
    );
    balance_operation(&mut checking);

    let mut savings = SavingsAccount::new(
        registry,
        &cfg.demo.savings.owner,
        cfg.demo.savings.initial_balance,
        cfg.demo.savings.interest_rate_percent,
    );
    balance_operation(&mut savings);

    println!("Total active accounts: {}", registry.active_accounts());

    let mut credit = CreditAccount::new(
        registry,
        &cfg.demo.credit.owner,
        cfg.demo.credit.initial_balance,
        cfg.demo.credit.interest_rate_percent,
        cfg.demo.credit.credit_limit,
    );
    balance_operation(&mut credit);

    checking.withdraw(cfg.demo.withdrawal_amount)?;

    if json {
        let reports = [checking.report(), savings.report(), credit.report()];
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
