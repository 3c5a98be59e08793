//! # Approval Wallet Contract
//!
//! A multi-owner wallet. Any owner may submit a transaction; it pays out only
//! after at least `required` distinct owners have confirmed it and an owner
//! calls `execute`.
//!
//! | Phase     | Entry Point(s)                                   |
//! |-----------|--------------------------------------------------|
//! | Bootstrap | [`ApprovalWallet::init`]                         |
//! | Funding   | [`ApprovalWallet::deposit`]                      |
//! | Proposals | `submit`, `confirm`, `revoke`                    |
//! | Payout    | [`ApprovalWallet::execute`]                      |
//! | Queries   | `get_owners`, `required`, `get_transaction`, `get_confirmations`, … |
//!
//! ## Execution ordering
//!
//! `execute` persists `executed = true` before it calls the value token. A
//! payout that fails makes the whole invocation return `PayoutFailed`, and the
//! host discards the executed mark together with every other write.
//!
//! Owner-set management lives in [`owners`]; record storage in [`storage`].

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Bytes, Env, Vec};

pub mod events;
pub mod owners;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{Transaction, TransactionConfig, TransactionState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NoOwners = 3,
    DuplicateOwner = 4,
    InvalidRequirement = 5,
    NotOwner = 6,
    UnknownTransaction = 7,
    AlreadyExecuted = 8,
    AlreadyConfirmed = 9,
    NotConfirmed = 10,
    InsufficientConfirmations = 11,
    ZeroAmount = 12,
    NegativeAmount = 13,
    PayoutFailed = 14,
    TransferFailed = 15,
}

#[contract]
pub struct ApprovalWallet;

#[contractimpl]
impl ApprovalWallet {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Fix the owner set, the confirmation quorum and the value token.
    ///
    /// `admin` must authorize the call; it is recorded but holds no further
    /// rights.
    pub fn init(
        env: Env,
        admin: Address,
        owners: Vec<Address>,
        required: u32,
        token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        owners::init_owners(&env, &admin, &owners, required)?;
        storage::set_token(&env, &token);
        Ok(())
    }

    /// Move `amount` of the value token from `from` into the wallet.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        let token = storage::get_token(&env)?;

        let token_client = token::Client::new(&env, &token);
        match token_client.try_transfer(&from, &env.current_contract_address(), &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        events::emit_deposit(&env, from, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Transaction lifecycle
    // ─────────────────────────────────────────────────────────

    /// Record a pending transaction and return its id. Does not confirm it.
    pub fn submit(
        env: Env,
        caller: Address,
        destination: Address,
        value: i128,
        data: Bytes,
    ) -> Result<u64, Error> {
        caller.require_auth();
        owners::require_owner(&env, &caller)?;
        if value < 0 {
            return Err(Error::NegativeAmount);
        }

        let id = storage::get_and_increment_tx_id(&env);
        let config = TransactionConfig {
            id,
            submitter: caller.clone(),
            destination: destination.clone(),
            value,
            data,
        };
        storage::save_transaction(&env, &config);

        events::emit_submitted(&env, id, caller, destination, value);
        Ok(id)
    }

    /// Add `caller`'s confirmation to a pending transaction.
    pub fn confirm(env: Env, caller: Address, tx_id: u64) -> Result<(), Error> {
        caller.require_auth();
        owners::require_owner(&env, &caller)?;
        let mut state = Self::load_pending(&env, tx_id)?;
        if storage::is_confirmed(&env, tx_id, &caller) {
            return Err(Error::AlreadyConfirmed);
        }

        state.confirmations += 1;
        storage::set_confirmation(&env, tx_id, &caller);
        storage::save_transaction_state(&env, tx_id, &state);

        events::emit_confirmed(&env, tx_id, caller, state.confirmations);
        Ok(())
    }

    /// Withdraw `caller`'s confirmation from a pending transaction.
    pub fn revoke(env: Env, caller: Address, tx_id: u64) -> Result<(), Error> {
        caller.require_auth();
        owners::require_owner(&env, &caller)?;
        let mut state = Self::load_pending(&env, tx_id)?;
        if !storage::is_confirmed(&env, tx_id, &caller) {
            return Err(Error::NotConfirmed);
        }

        state.confirmations -= 1;
        storage::clear_confirmation(&env, tx_id, &caller);
        storage::save_transaction_state(&env, tx_id, &state);

        events::emit_revoked(&env, tx_id, caller, state.confirmations);
        Ok(())
    }

    /// Execute a transaction that has reached quorum, paying `value` to its
    /// destination. Succeeds at most once per transaction.
    pub fn execute(env: Env, caller: Address, tx_id: u64) -> Result<(), Error> {
        caller.require_auth();
        owners::require_owner(&env, &caller)?;
        let mut state = Self::load_pending(&env, tx_id)?;
        let required = owners::get_required(&env)?;
        if state.confirmations < required {
            return Err(Error::InsufficientConfirmations);
        }
        let config = storage::load_transaction_config(&env, tx_id)?;
        let token = storage::get_token(&env)?;

        state.executed = true;
        storage::save_transaction_state(&env, tx_id, &state);

        if config.value > 0 {
            let token_client = token::Client::new(&env, &token);
            let paid = token_client.try_transfer(
                &env.current_contract_address(),
                &config.destination,
                &config.value,
            );
            if !matches!(paid, Ok(Ok(()))) {
                log!(&env, "payout failed", tx_id, config.value);
                return Err(Error::PayoutFailed);
            }
        }

        events::emit_executed(&env, tx_id, caller, config.destination, config.value, config.data);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn admin(env: Env) -> Result<Address, Error> {
        owners::get_admin(&env)
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, Error> {
        owners::get_owners(&env)
    }

    pub fn required(env: Env) -> Result<u32, Error> {
        owners::get_required(&env)
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        owners::is_owner(&env, &address)
    }

    pub fn transaction_count(env: Env) -> u64 {
        storage::transaction_count(&env)
    }

    pub fn get_transaction(env: Env, tx_id: u64) -> Result<Transaction, Error> {
        storage::load_transaction(&env, tx_id)
    }

    pub fn is_confirmed(env: Env, tx_id: u64, owner: Address) -> Result<bool, Error> {
        storage::load_transaction_state(&env, tx_id)?;
        Ok(storage::is_confirmed(&env, tx_id, &owner))
    }

    /// Owners currently confirming `tx_id`, in owner order.
    pub fn get_confirmations(env: Env, tx_id: u64) -> Result<Vec<Address>, Error> {
        storage::load_transaction_state(&env, tx_id)?;
        let mut confirmed = Vec::new(&env);
        for owner in owners::get_owners(&env)?.iter() {
            if storage::is_confirmed(&env, tx_id, &owner) {
                confirmed.push_back(owner);
            }
        }
        Ok(confirmed)
    }

    /// Value-token balance held by the wallet.
    pub fn balance(env: Env) -> Result<i128, Error> {
        let token = storage::get_token(&env)?;
        Ok(token::Client::new(&env, &token).balance(&env.current_contract_address()))
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    /// Load the mutable state of `tx_id`, rejecting unknown and executed
    /// transactions.
    fn load_pending(env: &Env, tx_id: u64) -> Result<TransactionState, Error> {
        let state = storage::load_transaction_state(env, tx_id)?;
        if state.executed {
            return Err(Error::AlreadyExecuted);
        }
        Ok(state)
    }
}
