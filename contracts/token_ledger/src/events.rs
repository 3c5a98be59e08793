use soroban_sdk::{symbol_short, Address, Env};

/// Topic: `("mint", to)`. Data: `(amount, new_total_supply)`.
pub fn emit_mint(env: &Env, to: Address, amount: i128, total_supply: i128) {
    let topics = (symbol_short!("mint"), to);
    env.events().publish(topics, (amount, total_supply));
}

/// Topic: `("transfer", from, to)`. Data: `amount`.
pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from, to);
    env.events().publish(topics, amount);
}

/// Topic: `("approve", owner, spender)`. Data: `amount`.
pub fn emit_approve(env: &Env, owner: Address, spender: Address, amount: i128) {
    let topics = (symbol_short!("approve"), owner, spender);
    env.events().publish(topics, amount);
}
