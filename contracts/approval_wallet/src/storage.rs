//! # Storage
//!
//! Owner-set keys live in [`crate::owners`]. This module covers the value
//! token and the transaction records.
//!
//! ## Instance storage
//!
//! | Key       | Type      | Description                 |
//! |-----------|-----------|-----------------------------|
//! | `Token`   | `Address` | Value token paid out        |
//! | `TxCount` | `u64`     | Next transaction ID         |
//!
//! ## Persistent storage
//!
//! | Key                       | Type                |
//! |---------------------------|---------------------|
//! | `TxConfig(id)`            | `TransactionConfig` |
//! | `TxState(id)`             | `TransactionState`  |
//! | `Confirmation(id, owner)` | `bool`              |

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Transaction, TransactionConfig, TransactionState};
use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Token,
    TxCount,
    TxConfig(u64),
    TxState(u64),
    Confirmation(u64, Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Token ────────────────────────────────────────────────────────────

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

// ── Transactions ─────────────────────────────────────────────────────

pub fn transaction_count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::TxCount).unwrap_or(0)
}

pub fn get_and_increment_tx_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = transaction_count(env);
    env.storage()
        .instance()
        .set(&DataKey::TxCount, &(current + 1));
    current
}

/// Write a new transaction in the `Pending` state with no confirmations.
pub fn save_transaction(env: &Env, config: &TransactionConfig) {
    let config_key = DataKey::TxConfig(config.id);
    let state_key = DataKey::TxState(config.id);
    let state = TransactionState {
        executed: false,
        confirmations: 0,
    };
    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

pub fn load_transaction_config(env: &Env, id: u64) -> Result<TransactionConfig, Error> {
    let key = DataKey::TxConfig(id);
    let config: TransactionConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownTransaction)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_transaction_state(env: &Env, id: u64) -> Result<TransactionState, Error> {
    let key = DataKey::TxState(id);
    let state: TransactionState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownTransaction)?;
    bump_persistent(env, &key);
    Ok(state)
}

pub fn load_transaction(env: &Env, id: u64) -> Result<Transaction, Error> {
    let config = load_transaction_config(env, id)?;
    let state = load_transaction_state(env, id)?;
    Ok(Transaction::from_parts(config, state))
}

pub fn save_transaction_state(env: &Env, id: u64, state: &TransactionState) {
    let key = DataKey::TxState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Confirmations ────────────────────────────────────────────────────

pub fn is_confirmed(env: &Env, id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Confirmation(id, owner.clone()))
}

pub fn set_confirmation(env: &Env, id: u64, owner: &Address) {
    let key = DataKey::Confirmation(id, owner.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn clear_confirmation(env: &Env, id: u64, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Confirmation(id, owner.clone()));
}
