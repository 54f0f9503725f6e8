// Bank account variants library
// Core account type hierarchy (checking, savings, credit) with the
// withdrawal/overdraft/interest rules and the process-scoped
// active-account registry.

pub mod account;
pub mod config;
pub mod registry;
