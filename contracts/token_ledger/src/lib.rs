//! # Token Ledger Contract
//!
//! A fungible token ledger: a balance per address, a total supply, and
//! ERC-20 style allowances.
//!
//! | Phase     | Entry Point(s)                                    |
//! |-----------|---------------------------------------------------|
//! | Bootstrap | [`TokenLedger::init`]                             |
//! | Issuance  | [`TokenLedger::mint`]                             |
//! | Movement  | `transfer`, `approve`, `transfer_from`            |
//! | Queries   | `balance_of`, `total_supply`, `allowance`, metadata |
//!
//! The sum of all balances always equals `total_supply`. Minting is open to
//! any authenticated caller; the deploy-time owner is recorded but does not
//! gate issuance.

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::TokenMetadata;

/// Largest accepted `decimals` value.
pub const MAX_DECIMALS: u32 = 18;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NegativeAmount = 3,
    InsufficientBalance = 4,
    InsufficientAllowance = 5,
    Overflow = 6,
    InvalidDecimals = 7,
}

#[contract]
pub struct TokenLedger;

#[contractimpl]
impl TokenLedger {
    /// Record the owner and token metadata. Callable once, authorized by
    /// `owner`.
    pub fn init(env: Env, owner: Address, name: String, symbol: String, decimals: u32) -> Result<(), Error> {
        owner.require_auth();
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if decimals > MAX_DECIMALS {
            return Err(Error::InvalidDecimals);
        }
        let metadata = TokenMetadata {
            name,
            symbol,
            decimals,
        };
        storage::init_config(&env, &owner, &metadata);
        Ok(())
    }

    /// Credit `amount` new tokens to `to`.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        to.require_auth();
        Self::require_initialized(&env)?;
        check_non_negative(amount)?;

        let supply = storage::get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let balance = storage::get_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        storage::set_balance(&env, &to, balance);
        storage::set_total_supply(&env, supply);

        events::emit_mint(&env, to, amount, supply);
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// A self-transfer passes through the same balance check and leaves the
    /// balance unchanged.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::require_initialized(&env)?;
        check_non_negative(amount)?;

        move_balance(&env, &from, &to, amount)?;

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    /// Set the amount `spender` may move out of `owner`'s balance.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        Self::require_initialized(&env)?;
        check_non_negative(amount)?;

        storage::set_allowance(&env, &owner, &spender, amount);

        events::emit_approve(&env, owner, spender, amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        Self::require_initialized(&env)?;
        check_non_negative(amount)?;

        let allowance = storage::get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }
        if storage::get_balance(&env, &from) < amount {
            return Err(Error::InsufficientBalance);
        }

        storage::set_allowance(&env, &from, &spender, allowance - amount);
        move_balance(&env, &from, &to, amount)?;

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Balance of `account`; zero if it never held tokens.
    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::get_balance(&env, &account)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &owner, &spender)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(storage::get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(storage::get_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(storage::get_metadata(&env)?.decimals)
    }

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if storage::is_initialized(env) {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }
}

fn check_non_negative(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    Ok(())
}

/// Debit `from`, then credit `to` reading its balance after the debit so that
/// `from == to` nets to zero.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let from_balance = storage::get_balance(env, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }
    storage::set_balance(env, from, from_balance - amount);

    // Bounded by total supply.
    let to_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_balance(env, to, to_balance);
    Ok(())
}
