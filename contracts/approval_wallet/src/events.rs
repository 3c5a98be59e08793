use soroban_sdk::{contracttype, symbol_short, Address, Bytes, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionSubmitted {
    pub tx_id: u64,
    pub submitter: Address,
    pub destination: Address,
    pub value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionExecuted {
    pub tx_id: u64,
    pub executor: Address,
    pub destination: Address,
    pub value: i128,
    pub data: Bytes,
}

pub fn emit_deposit(env: &Env, from: Address, amount: i128) {
    env.events().publish((symbol_short!("deposit"), from), amount);
}

pub fn emit_submitted(env: &Env, tx_id: u64, submitter: Address, destination: Address, value: i128) {
    let topics = (symbol_short!("submit"), tx_id);
    let data = TransactionSubmitted {
        tx_id,
        submitter,
        destination,
        value,
    };
    env.events().publish(topics, data);
}

/// Topic: `("confirm", tx_id)`. Data: `(owner, confirmations)`.
pub fn emit_confirmed(env: &Env, tx_id: u64, owner: Address, confirmations: u32) {
    env.events()
        .publish((symbol_short!("confirm"), tx_id), (owner, confirmations));
}

/// Topic: `("revoke", tx_id)`. Data: `(owner, confirmations)`.
pub fn emit_revoked(env: &Env, tx_id: u64, owner: Address, confirmations: u32) {
    env.events()
        .publish((symbol_short!("revoke"), tx_id), (owner, confirmations));
}

pub fn emit_executed(
    env: &Env,
    tx_id: u64,
    executor: Address,
    destination: Address,
    value: i128,
    data: Bytes,
) {
    let topics = (symbol_short!("execute"), tx_id);
    let data = TransactionExecuted {
        tx_id,
        executor,
        destination,
        value,
        data,
    };
    env.events().publish(topics, data);
}
