//! # Storage
//!
//! | Key               | Tier       | Type       | Description                    |
//! |-------------------|------------|------------|--------------------------------|
//! | `ProposalCount`   | Instance   | `u64`      | Next proposal ID               |
//! | `Proposal(id)`    | Persistent | `Proposal` | Record and running tallies     |
//! | `Vote(id, addr)`  | Persistent | `bool`     | Support cast by `addr`         |
//!
//! A `Vote` entry doubles as the voter-set membership record: its presence
//! means the address has voted on that proposal.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::Proposal;
use crate::Error;

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    ProposalCount,
    Proposal(u64),
    Vote(u64, Address),
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

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Read and increment the proposal counter. IDs are never reused.
pub fn get_and_increment_proposal_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = proposal_count(env);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(current + 1));
    current
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn load_proposal(env: &Env, id: u64) -> Result<Proposal, Error> {
    let key = DataKey::Proposal(id);
    let proposal: Proposal = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownProposal)?;
    bump_persistent(env, &key);
    Ok(proposal)
}

pub fn get_vote(env: &Env, id: u64, voter: &Address) -> Option<bool> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(id, voter.clone()))
}

pub fn record_vote(env: &Env, id: u64, voter: &Address, support: bool) {
    let key = DataKey::Vote(id, voter.clone());
    env.storage().persistent().set(&key, &support);
    bump_persistent(env, &key);
}
