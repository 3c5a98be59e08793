//! # Owners — fixed signer set and quorum
//!
//! The owner set and the confirmation quorum are written once by `init` and
//! never change afterwards.
//!
//! ## Storage layout
//!
//! - `OwnerKey::Admin` → `Address` — account that deployed the owner set.
//! - `OwnerKey::Owners` → `Vec<Address>` — owners in the order given at init.
//! - `OwnerKey::Required` → `u32` — confirmations needed to execute.
//! - `OwnerKey::Owner(addr)` → `bool` — membership entry for O(1) checks,
//!   persistent and bumped on every lookup.
//!
//! ## Event emissions
//!
//! | Event topic prefix | Trigger |
//! |--------------------|---------|
//! | `owner_add`        | One per owner at init |
//! | `quorum`           | Required count set at init |

use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OwnerKey {
    Admin,
    Owners,
    Required,
    Owner(Address),
}

fn bump_persistent(env: &Env, key: &OwnerKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Validate and persist the owner set and quorum.
///
/// - `owners` must be non-empty and free of duplicates.
/// - `required` must lie in `1..=owners.len()`.
pub fn init_owners(env: &Env, admin: &Address, owners: &Vec<Address>, required: u32) -> Result<(), Error> {
    if env.storage().instance().has(&OwnerKey::Owners) {
        return Err(Error::AlreadyInitialized);
    }
    if owners.is_empty() {
        return Err(Error::NoOwners);
    }
    for i in 0..owners.len() {
        let o_i = owners.get_unchecked(i);
        for j in (i + 1)..owners.len() {
            if o_i == owners.get_unchecked(j) {
                return Err(Error::DuplicateOwner);
            }
        }
    }
    if required == 0 || required > owners.len() {
        return Err(Error::InvalidRequirement);
    }

    env.storage().instance().set(&OwnerKey::Admin, admin);
    env.storage().instance().set(&OwnerKey::Owners, owners);
    env.storage().instance().set(&OwnerKey::Required, &required);
    for owner in owners.iter() {
        let key = OwnerKey::Owner(owner.clone());
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
        env.events().publish((symbol_short!("owner_add"), owner), ());
    }
    env.events()
        .publish((symbol_short!("quorum"), required), owners.len());
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&OwnerKey::Owners)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&OwnerKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn get_owners(env: &Env) -> Result<Vec<Address>, Error> {
    env.storage()
        .instance()
        .get(&OwnerKey::Owners)
        .ok_or(Error::NotInitialized)
}

pub fn get_required(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&OwnerKey::Required)
        .ok_or(Error::NotInitialized)
}

pub fn is_owner(env: &Env, address: &Address) -> bool {
    let key = OwnerKey::Owner(address.clone());
    if env.storage().persistent().has(&key) {
        bump_persistent(env, &key);
        true
    } else {
        false
    }
}

// ─────────────────────────────────────────────────────────
// Access guard
// ─────────────────────────────────────────────────────────

/// Fails with `NotOwner` unless `address` is in the owner set.
pub fn require_owner(env: &Env, address: &Address) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    if !is_owner(env, address) {
        return Err(Error::NotOwner);
    }
    Ok(())
}
