extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::{TokenLedger, TokenLedgerClient};

fn setup() -> (Env, TokenLedgerClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(TokenLedger, ());
    let client = TokenLedgerClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.init(
        &owner,
        &String::from_str(&env, "Basic Token"),
        &String::from_str(&env, "BASIC"),
        &7,
    );
    (env, client, owner)
}

#[test]
fn test_mint_event() {
    let (env, client, owner) = setup();
    client.mint(&owner, &250);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("mint").into_val(&env), owner.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let data: (i128, i128) = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, (250, 250));
}

#[test]
fn test_transfer_event() {
    let (env, client, owner) = setup();
    let to = Address::generate(&env);
    client.mint(&owner, &100);
    client.transfer(&owner, &to, &40);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("transfer").into_val(&env),
        owner.into_val(&env),
        to.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let amount: i128 = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(amount, 40);
}

