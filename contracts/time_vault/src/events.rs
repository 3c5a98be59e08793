use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsLocked {
    pub depositor: Address,
    pub amount: i128,
    pub unlock_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub amount: i128,
    pub when: u64,
}

pub fn emit_locked(env: &Env, beneficiary: Address, depositor: Address, amount: i128, unlock_time: u64) {
    let topics = (symbol_short!("locked"), beneficiary);
    let data = FundsLocked {
        depositor,
        amount,
        unlock_time,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, beneficiary: Address, amount: i128, when: u64) {
    let topics = (symbol_short!("withdrawn"), beneficiary);
    let data = FundsWithdrawn { amount, when };
    env.events().publish(topics, data);
}
