extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{CampaignCreated, CampaignPledged};
use crate::{CampaignLedger, CampaignLedgerClient};

fn setup() -> (Env, CampaignLedgerClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CampaignLedger, ());
    let client = CampaignLedgerClient::new(&env, &contract_id);
    let token_admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(token_admin).address();
    client.init(&Address::generate(&env), &token);
    (env, client, token)
}

#[test]
fn test_campaign_created_event_carries_id() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let deadline = env.ledger().timestamp() + 600;

    let id = client.create_campaign(
        &owner,
        &String::from_str(&env, "Test"),
        &String::from_str(&env, "Description"),
        &1_000,
        &deadline,
        &String::from_str(&env, "image.png"),
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("created").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            owner,
            target: 1_000,
            deadline,
        }
    );
}

#[test]
fn test_campaign_pledged_event() {
    let (env, client, token) = setup();
    let owner = Address::generate(&env);
    let backer = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&backer, &500);

    let id = client.create_campaign(
        &owner,
        &String::from_str(&env, "Test"),
        &String::from_str(&env, ""),
        &1_000,
        &(env.ledger().timestamp() + 600),
        &String::from_str(&env, ""),
    );
    client.pledge(&backer, &id, &300);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("pledged").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignPledged = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignPledged {
            campaign_id: id,
            contributor: backer,
            amount: 300,
            collected: 300,
        }
    );
}
