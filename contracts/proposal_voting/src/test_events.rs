extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{ProposalCreated, VoteCast};
use crate::{ProposalVoting, ProposalVotingClient};

fn setup() -> (Env, ProposalVotingClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ProposalVoting, ());
    let client = ProposalVotingClient::new(&env, &contract_id);
    (env, client)
}

#[test]
fn test_proposal_created_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let target_block = env.ledger().sequence() + 10;
    let id = client.create_proposal(&creator, &String::from_str(&env, "Proposal 1"), &target_block);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("created").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProposalCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProposalCreated {
            proposal_id: id,
            creator,
            target_block,
        }
    );
}

#[test]
fn test_vote_cast_event() {
    let (env, client) = setup();
    let creator = Address::generate(&env);
    let voter = Address::generate(&env);
    let id = client.create_proposal(
        &creator,
        &String::from_str(&env, "Proposal 1"),
        &(env.ledger().sequence() + 10),
    );
    client.vote(&voter, &id, &false);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&env, symbol_short!("voted").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: VoteCast = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        VoteCast {
            proposal_id: id,
            voter,
            support: false,
        }
    );
}
