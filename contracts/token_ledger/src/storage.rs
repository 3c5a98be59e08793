//! # Storage
//!
//! ## Instance storage
//!
//! | Key           | Type            | Description                 |
//! |---------------|-----------------|-----------------------------|
//! | `Owner`       | `Address`       | Deploy-time owner           |
//! | `Metadata`    | `TokenMetadata` | Name, symbol, decimals      |
//! | `TotalSupply` | `i128`          | Sum of every balance        |
//!
//! ## Persistent storage
//!
//! | Key                        | Type   |
//! |----------------------------|--------|
//! | `Balance(addr)`            | `i128` |
//! | `Allowance(owner, spender)`| `i128` |
//!
//! Missing balance and allowance entries read as zero.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::TokenMetadata;
use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
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

// ── Configuration ────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn init_config(env: &Env, owner: &Address, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage().instance().set(&DataKey::Metadata, metadata);
    env.storage().instance().set(&DataKey::TotalSupply, &0i128);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

// ── Supply ───────────────────────────────────────────────────────────

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    bump_instance(env);
}

// ── Balances ─────────────────────────────────────────────────────────

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, account: &Address, balance: i128) {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

// ── Allowances ───────────────────────────────────────────────────────

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    match env.storage().persistent().get(&key) {
        Some(allowance) => {
            bump_persistent(env, &key);
            allowance
        }
        None => 0,
    }
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
