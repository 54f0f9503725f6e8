use anyhow::{Context, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::RwLock;

/// Parameters for the checking account in the demonstration scenario
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckingParams {
    /// Account holder's display name
    pub owner: String,
    /// Opening balance
    pub initial_balance: f64,
    /// How far below zero the balance may go
    pub overdraft_limit: f64,
}

/// Parameters for the savings account in the demonstration scenario
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SavingsParams {
    /// Account holder's display name
    pub owner: String,
    /// Opening balance
    pub initial_balance: f64,
    /// Interest credited per application, as a percentage of the balance
    pub interest_rate_percent: f64,
}

/// Parameters for the credit account in the demonstration scenario
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreditParams {
    /// Account holder's display name
    pub owner: String,
    /// Opening balance
    pub initial_balance: f64,
    /// Informational interest rate shown in the balance report
    pub interest_rate_percent: f64,
    /// How far below zero the balance may go
    pub credit_limit: f64,
}

/// Demonstration scenario configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DemoConfig {
    pub checking: CheckingParams,
    pub savings: SavingsParams,
    pub credit: CreditParams,
    /// Amount withdrawn from the checking account at the end of the run
    pub withdrawal_amount: f64,
}

/// Global application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Application version
    pub version: String,
    /// Currency label used in balance reports
    pub currency: String,
    /// Demonstration scenario parameters
    pub demo: DemoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Bank Account Variants".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            currency: "RON".to_string(),
            demo: DemoConfig {
                checking: CheckingParams {
                    owner: "Popescu Ioan".to_string(),
                    initial_balance: 1000.0,
                    overdraft_limit: 500.0,
                },
                savings: SavingsParams {
                    owner: "Ionescu Mihai".to_string(),
                    initial_balance: 2000.0,
                    interest_rate_percent: 2.5,
                },
                credit: CreditParams {
                    owner: "Alice".to_string(),
                    initial_balance: 1500.0,
                    interest_rate_percent: 2.0,
                    credit_limit: 1000.0,
                },
                withdrawal_amount: 800.0,
            },
        }
    }
}

// Global configuration instance
lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

/// Load configuration from file
pub fn load_config(path: &str) -> Result<()> {
    // Check if file exists
    if !Path::new(path).exists() {
        // If not, create default config and save it
        let default_config = Config::default();
        save_config(path, &default_config)?;
        *CONFIG.write().unwrap() = default_config;
        return Ok(());
    }

    // Read the config file
    let mut file = File::open(path).context(format!("Failed to open config file: {}", path))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .context("Failed to read config file")?;

    // Parse the config file
    let config: Config = match path.ends_with(".toml") {
        true => toml::from_str(&contents).context("Failed to parse TOML config")?,
        false => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    // Update the global config
    *CONFIG.write().unwrap() = config;

    Ok(())
}

/// Save configuration to file
pub fn save_config(path: &str, config: &Config) -> Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
    }

    // Serialize the config
    let serialized = match path.ends_with(".toml") {
        true => toml::to_string_pretty(config).context("Failed to serialize config to TOML")?,
        false => serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")?,
    };

    // Write to file
    std::fs::write(path, serialized)
        .context(format!("Failed to write config to file: {}", path))?;

    Ok(())
}

/// Get a reference to the current config
pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

/// Update the current config
pub fn update_config(config: Config) -> Result<()> {
    *CONFIG.write().unwrap() = config;
    Ok(())
}
