//! # Proposal Voting Contract
//!
//! Yes/no proposals whose voting window closes at a target ledger sequence.
//! Every address may vote once per proposal while the window is open.
//!
//! | Phase    | Entry Point(s)                            |
//! |----------|-------------------------------------------|
//! | Creation | [`ProposalVoting::create_proposal`]       |
//! | Voting   | [`ProposalVoting::vote`]                  |
//! | Queries  | `get_proposal`, `proposal_count`, `has_voted`, `vote_of` |
//!
//! `create_proposal` returns the new id and also publishes it in the
//! `("created", id)` event topic so that clients reading the transaction's
//! events can recover it.

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::Proposal;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    UnknownProposal = 1,
    InvalidTarget = 2,
    VotingClosed = 3,
    AlreadyVoted = 4,
    Overflow = 5,
}

#[contract]
pub struct ProposalVoting;

#[contractimpl]
impl ProposalVoting {
    /// Open a proposal that accepts votes until `target_block`.
    ///
    /// `target_block` must be strictly greater than the current ledger
    /// sequence.
    pub fn create_proposal(
        env: Env,
        creator: Address,
        description: String,
        target_block: u32,
    ) -> Result<u64, Error> {
        creator.require_auth();
        if target_block <= env.ledger().sequence() {
            return Err(Error::InvalidTarget);
        }

        let id = storage::get_and_increment_proposal_id(&env);
        let proposal = Proposal {
            id,
            creator: creator.clone(),
            description,
            target_block,
            yes_votes: 0,
            no_votes: 0,
        };
        storage::save_proposal(&env, &proposal);

        events::emit_proposal_created(&env, id, creator, target_block);
        Ok(id)
    }

    /// Cast `voter`'s single vote on `proposal_id`.
    pub fn vote(env: Env, voter: Address, proposal_id: u64, support: bool) -> Result<(), Error> {
        voter.require_auth();
        let mut proposal = storage::load_proposal(&env, proposal_id)?;
        if !proposal.is_open(env.ledger().sequence()) {
            return Err(Error::VotingClosed);
        }
        if storage::get_vote(&env, proposal_id, &voter).is_some() {
            return Err(Error::AlreadyVoted);
        }

        if support {
            proposal.yes_votes = proposal.yes_votes.checked_add(1).ok_or(Error::Overflow)?;
        } else {
            proposal.no_votes = proposal.no_votes.checked_add(1).ok_or(Error::Overflow)?;
        }
        storage::record_vote(&env, proposal_id, &voter, support);
        storage::save_proposal(&env, &proposal);

        events::emit_vote_cast(&env, proposal_id, voter, support);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, Error> {
        storage::load_proposal(&env, proposal_id)
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::proposal_count(&env)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> Result<bool, Error> {
        storage::load_proposal(&env, proposal_id)?;
        Ok(storage::get_vote(&env, proposal_id, &voter).is_some())
    }

    /// The support `voter` cast on `proposal_id`, or `None` if they have not
    /// voted.
    pub fn vote_of(env: Env, proposal_id: u64, voter: Address) -> Result<Option<bool>, Error> {
        storage::load_proposal(&env, proposal_id)?;
        Ok(storage::get_vote(&env, proposal_id, &voter))
    }
}
