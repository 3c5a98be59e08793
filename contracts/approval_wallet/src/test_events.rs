extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Bytes, Env, IntoVal, TryIntoVal,
};

use crate::events::{TransactionExecuted, TransactionSubmitted};
use crate::{ApprovalWallet, ApprovalWalletClient};

fn setup() -> (Env, ApprovalWalletClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ApprovalWallet, ());
    let client = ApprovalWalletClient::new(&env, &contract_id);
    let token_admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(token_admin).address();
    let owner = Address::generate(&env);
    client.init(&Address::generate(&env), &vec![&env, owner.clone()], &1, &token);
    token::StellarAssetClient::new(&env, &token).mint(&contract_id, &1_000);
    (env, client, owner)
}

#[test]
fn test_submit_event_carries_id() {
    let (env, client, owner) = setup();
    let destination = Address::generate(&env);
    let id = client.submit(&owner, &destination, &70, &Bytes::new(&env));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("submit").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TransactionSubmitted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TransactionSubmitted {
            tx_id: id,
            submitter: owner,
            destination,
            value: 70,
        }
    );
}

#[test]
fn test_confirm_event() {
    let (env, client, owner) = setup();
    let id = client.submit(&owner, &Address::generate(&env), &1, &Bytes::new(&env));
    client.confirm(&owner, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&env, symbol_short!("confirm").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let data: (Address, u32) = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(data, (owner, 1));
}

#[test]
fn test_execute_event() {
    let (env, client, owner) = setup();
    let destination = Address::generate(&env);
    let payload = Bytes::from_slice(&env, &[1, 2, 3]);
    let id = client.submit(&owner, &destination, &70, &payload);
    client.confirm(&owner, &id);
    client.execute(&owner, &id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("execute").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TransactionExecuted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TransactionExecuted {
            tx_id: id,
            executor: owner,
            destination,
            value: 70,
            data: payload,
        }
    );
}
