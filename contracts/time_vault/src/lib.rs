//! # Time Vault Contract
//!
//! Locks a deposit of the value token until `unlock_time`, then releases all
//! of it to a single beneficiary.
//!
//! | Phase     | Entry Point(s)             |
//! |-----------|----------------------------|
//! | Bootstrap | [`TimeVault::init`]        |
//! | Release   | [`TimeVault::withdraw`]    |
//! | Queries   | `beneficiary`, `unlock_time`, `config`, `balance` |
//!
//! `withdraw` zeroes the stored balance before calling the token; a failed
//! transfer returns `PayoutFailed` and the host restores the balance.

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env};

pub mod events;
mod storage;
mod types;


pub use types::VaultConfig;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidUnlockTime = 3,
    ZeroAmount = 4,
    NegativeAmount = 5,
    Unauthorized = 6,
    FundsLocked = 7,
    NothingToWithdraw = 8,
    TransferFailed = 9,
    PayoutFailed = 10,
}

#[contract]
pub struct TimeVault;

#[contractimpl]
impl TimeVault {
    /// Lock `amount` of `token` from `depositor` for `beneficiary` until
    /// `unlock_time`.
    pub fn init(
        env: Env,
        depositor: Address,
        beneficiary: Address,
        unlock_time: u64,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        depositor.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if unlock_time <= env.ledger().timestamp() {
            return Err(Error::InvalidUnlockTime);
        }
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }

        let config = VaultConfig {
            depositor: depositor.clone(),
            beneficiary: beneficiary.clone(),
            unlock_time,
            token: token.clone(),
            deposited: amount,
        };
        storage::save_config(&env, &config);
        storage::set_balance(&env, amount);

        let token_client = token::Client::new(&env, &token);
        match token_client.try_transfer(&depositor, &env.current_contract_address(), &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        events::emit_locked(&env, beneficiary, depositor, amount, unlock_time);
        Ok(())
    }

    /// Release the whole balance to the beneficiary once unlocked.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = storage::load_config(&env)?;
        if caller != config.beneficiary {
            return Err(Error::Unauthorized);
        }
        let now = env.ledger().timestamp();
        if now < config.unlock_time {
            return Err(Error::FundsLocked);
        }
        let amount = storage::get_balance(&env);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        storage::set_balance(&env, 0);

        let token_client = token::Client::new(&env, &config.token);
        let paid = token_client.try_transfer(&env.current_contract_address(), &config.beneficiary, &amount);
        if !matches!(paid, Ok(Ok(()))) {
            log!(&env, "vault release failed", amount);
            return Err(Error::PayoutFailed);
        }

        events::emit_withdrawn(&env, config.beneficiary, amount, now);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn beneficiary(env: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&env)?.beneficiary)
    }

    pub fn unlock_time(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.unlock_time)
    }

    pub fn config(env: Env) -> Result<VaultConfig, Error> {
        storage::load_config(&env)
    }

    /// Amount still locked; zero after a successful withdrawal.
    pub fn balance(env: Env) -> i128 {
        storage::get_balance(&env)
    }
}
