//! # Types
//!
//! A wallet transaction is stored as an immutable [`TransactionConfig`]
//! written by `submit` plus a small [`TransactionState`] rewritten by
//! `confirm`, `revoke` and `execute`. Queries return the combined
//! [`Transaction`].
//!
//! ```text
//! Pending ──confirm/revoke──► Pending ──execute──► Executed
//! ```
//!
//! `Executed` is terminal: no further confirm, revoke or execute succeeds.

use soroban_sdk::{contracttype, Address, Bytes};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionConfig {
    pub id: u64,
    pub submitter: Address,
    pub destination: Address,
    /// Value-token amount paid to `destination` on execution.
    pub value: i128,
    /// Opaque payload recorded with the transaction and echoed in the
    /// execution event.
    pub data: Bytes,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionState {
    pub executed: bool,
    /// Number of owners currently confirming.
    pub confirmations: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub submitter: Address,
    pub destination: Address,
    pub value: i128,
    pub data: Bytes,
    pub executed: bool,
    pub confirmations: u32,
}

impl Transaction {
    pub(crate) fn from_parts(config: TransactionConfig, state: TransactionState) -> Self {
        Transaction {
            id: config.id,
            submitter: config.submitter,
            destination: config.destination,
            value: config.value,
            data: config.data,
            executed: state.executed,
            confirmations: state.confirmations,
        }
    }
}
