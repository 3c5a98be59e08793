#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::{Proposal, ProposalVotingClient};

/// Tallies equal the number of recorded voters, split by their support.
pub fn assert_tally_matches_voters(client: &ProposalVotingClient, proposal: &Proposal, voters: &[Address]) {
    let mut yes = 0u32;
    let mut no = 0u32;
    for voter in voters {
        match client.vote_of(&proposal.id, voter) {
            Some(true) => yes += 1,
            Some(false) => no += 1,
            None => {}
        }
    }
    assert_eq!(proposal.yes_votes, yes, "proposal {} yes tally mismatch", proposal.id);
    assert_eq!(proposal.no_votes, no, "proposal {} no tally mismatch", proposal.id);
}

/// Fields written at creation never change.
pub fn assert_immutable_fields(original: &Proposal, current: &Proposal) {
    assert_eq!(original.id, current.id, "proposal id changed");
    assert_eq!(original.creator, current.creator, "proposal creator changed");
    assert_eq!(original.description, current.description, "proposal description changed");
    assert_eq!(original.target_block, current.target_block, "proposal target block changed");
}

/// Tallies never decrease between two observations.
pub fn assert_tallies_monotonic(before: &Proposal, after: &Proposal) {
    assert!(after.yes_votes >= before.yes_votes, "yes tally decreased");
    assert!(after.no_votes >= before.no_votes, "no tally decreased");
}
