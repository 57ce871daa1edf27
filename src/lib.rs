pub mod base;
pub mod chain;
pub mod cli;
pub mod constants;
pub mod export;
pub mod ledger;
pub mod snapshot;
