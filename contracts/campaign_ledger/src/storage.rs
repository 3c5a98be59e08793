//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the campaign
//! ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                         |
//! |-----------------|-----------|-------------------------------------|
//! | `Admin`         | `Address` | Account that configured the ledger  |
//! | `Token`         | `Address` | Value token pledges are paid in     |
//! | `CampaignCount` | `u64`     | Auto-increment campaign ID counter  |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                       | Type             | Description                  |
//! |---------------------------|------------------|------------------------------|
//! | `Config(id)`              | `CampaignConfig` | Immutable campaign config    |
//! | `State(id)`               | `CampaignState`  | Collected total and counters |
//! | `Contribution(id, addr)`  | `i128`           | Running total per pledger    |
//! | `ContributorAt(id, n)`    | `Address`        | `n`-th distinct pledger        |
//!
//! Pledgers are stored one entry per index, so a first pledge writes a single
//! address whatever the campaign's size. The index range is
//! `0..CampaignState::contributor_count`.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Campaign, CampaignConfig, CampaignState, Contribution};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Account that ran `init` (Instance).
    Admin,
    /// Value token address (Instance).
    Token,
    /// Next campaign ID (Instance).
    CampaignCount,
    /// Immutable campaign configuration (Persistent).
    Config(u64),
    /// Mutable campaign accounting (Persistent).
    State(u64),
    /// Amount pledged by one address to one campaign (Persistent).
    Contribution(u64, Address),
    /// Distinct pledger by first-pledge position (Persistent).
    ContributorAt(u64, u32),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_token(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn init_config(env: &Env, admin: &Address, token: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Read and increment the campaign counter.
/// Returns the ID to use for the next campaign.
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = campaign_count(env);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Write the config and the empty initial state of a new campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig) {
    let config_key = DataKey::Config(config.id);
    let state_key = DataKey::State(config.id);
    let state = CampaignState {
        collected: 0,
        contributor_count: 0,
    };

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

pub fn load_config(env: &Env, id: u64) -> Result<CampaignConfig, Error> {
    let key = DataKey::Config(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownCampaign)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_state(env: &Env, id: u64) -> Result<CampaignState, Error> {
    let key = DataKey::State(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownCampaign)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Load config and state together.
pub fn load_campaign_pair(env: &Env, id: u64) -> Result<(CampaignConfig, CampaignState), Error> {
    Ok((load_config(env, id)?, load_state(env, id)?))
}

pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, Error> {
    let (config, state) = load_campaign_pair(env, id)?;
    Ok(Campaign::from_parts(config, state))
}

pub fn save_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

pub fn get_contribution(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Contribution(id, contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_contribution(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn set_contributor_at(env: &Env, id: u64, index: u32, contributor: &Address) {
    let key = DataKey::ContributorAt(id, index);
    env.storage().persistent().set(&key, contributor);
    bump_persistent(env, &key);
}

pub fn get_contributor_at(env: &Env, id: u64, index: u32) -> Option<Address> {
    let key = DataKey::ContributorAt(id, index);
    let contributor = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(contributor)
}

/// Build the contributor list with each pledger's running total.
pub fn get_contributions(env: &Env, id: u64, count: u32) -> Vec<Contribution> {
    let mut out = Vec::new(env);
    for index in 0..count {
        let Some(contributor) = get_contributor_at(env, id, index) else {
            continue;
        };
        let amount = get_contribution(env, id, &contributor);
        out.push_back(Contribution {
            contributor,
            amount,
        });
    }
    out
}
