//! Points ledger module - the per-user running points total.

mod ledger_service;

#[cfg(test)]
mod ledger_service_tests;

pub use ledger_service::{LedgerService, LedgerServiceTrait};
