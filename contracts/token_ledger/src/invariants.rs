#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::TokenLedgerClient;

/// No tracked balance is negative.
pub fn assert_balances_non_negative(client: &TokenLedgerClient, accounts: &[Address]) {
    for account in accounts {
        let balance = client.balance_of(account);
        assert!(balance >= 0, "negative balance {}", balance);
    }
}

/// The balances of `accounts` sum to the total supply. `accounts` must list
/// every address that ever received tokens.
pub fn assert_conservation(client: &TokenLedgerClient, accounts: &[Address]) {
    let sum: i128 = accounts.iter().map(|a| client.balance_of(a)).sum();
    assert_eq!(
        sum,
        client.total_supply(),
        "balances sum to {} but total supply is {}",
        sum,
        client.total_supply()
    );
}

pub fn assert_all_token_invariants(client: &TokenLedgerClient, accounts: &[Address]) {
    assert_balances_non_negative(client, accounts);
    assert_conservation(client, accounts);
}
