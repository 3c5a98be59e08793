//! # Campaign Ledger Contract
//!
//! Crowdfunding ledger: anyone may open a campaign with a funding target and
//! a deadline, and anyone may pledge to it until the deadline passes.
//!
//! | Phase     | Entry Point(s)                                       |
//! |-----------|------------------------------------------------------|
//! | Bootstrap | [`CampaignLedger::init`]                             |
//! | Creation  | [`CampaignLedger::create_campaign`]                  |
//! | Funding   | [`CampaignLedger::pledge`]                           |
//! | Queries   | `get_campaigns`, `get_campaign`, `contribution_of`, `get_contributors` |
//!
//! ## Accounting
//!
//! For every campaign `collected` equals the sum of its contributions and only
//! ever grows. Overfunding is allowed. Pledged value is forwarded to the
//! campaign owner through the value token configured at `init`; if that
//! transfer fails the whole pledge is rejected and no bookkeeping survives.
//!
//! Storage access is delegated to [`storage`].

#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env, String, Vec};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{Campaign, CampaignConfig, CampaignState, Contribution};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    UnknownCampaign = 3,
    InvalidDeadline = 4,
    InvalidTarget = 5,
    CampaignExpired = 6,
    ZeroAmount = 7,
    NegativeAmount = 8,
    Overflow = 9,
    TransferFailed = 10,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Configure the value token pledges are paid in.
    ///
    /// Must be called exactly once after deployment, authorized by `admin`.
    pub fn init(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        if storage::has_token(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::init_config(&env, &admin, &token);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Campaign lifecycle
    // ─────────────────────────────────────────────────────────

    /// Open a new campaign and return its id (the insertion index).
    ///
    /// - `deadline` must be strictly after the current ledger timestamp.
    /// - `target` must be positive.
    pub fn create_campaign(
        env: Env,
        owner: Address,
        title: String,
        description: String,
        target: i128,
        deadline: u64,
        image: String,
    ) -> Result<u64, Error> {
        if deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidDeadline);
        }
        if target <= 0 {
            return Err(Error::InvalidTarget);
        }

        let id = storage::get_and_increment_campaign_id(&env);
        let config = CampaignConfig {
            id,
            owner: owner.clone(),
            title,
            description,
            target,
            deadline,
            image,
        };
        storage::save_campaign(&env, &config);

        events::emit_campaign_created(&env, id, owner, target, deadline);
        Ok(id)
    }

    /// Pledge `amount` of the value token to `campaign_id`.
    ///
    /// The contribution is recorded first, then the tokens are moved from
    /// `contributor` to the campaign owner.
    pub fn pledge(env: Env, contributor: Address, campaign_id: u64, amount: i128) -> Result<(), Error> {
        contributor.require_auth();

        let (config, mut state) = storage::load_campaign_pair(&env, campaign_id)?;
        if env.ledger().timestamp() >= config.deadline {
            return Err(Error::CampaignExpired);
        }
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }

        let previous = storage::get_contribution(&env, campaign_id, &contributor);
        let contribution = previous.checked_add(amount).ok_or(Error::Overflow)?;
        state.collected = state.collected.checked_add(amount).ok_or(Error::Overflow)?;
        let first_pledge = previous == 0;
        let slot = state.contributor_count;
        if first_pledge {
            state.contributor_count = state
                .contributor_count
                .checked_add(1)
                .ok_or(Error::Overflow)?;
        }
        let token = storage::get_token(&env)?;

        storage::set_contribution(&env, campaign_id, &contributor, contribution);
        if first_pledge {
            storage::set_contributor_at(&env, campaign_id, slot, &contributor);
        }
        storage::save_state(&env, campaign_id, &state);

        let token_client = token::Client::new(&env, &token);
        match token_client.try_transfer(&contributor, &config.owner, &amount) {
            Ok(Ok(())) => {}
            _ => {
                log!(&env, "pledge transfer failed", campaign_id, amount);
                return Err(Error::TransferFailed);
            }
        }

        events::emit_campaign_pledged(&env, campaign_id, contributor, amount, state.collected);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Every campaign in creation order; index `i` holds campaign id `i`.
    pub fn get_campaigns(env: Env) -> Result<Vec<Campaign>, Error> {
        let mut campaigns = Vec::new(&env);
        for id in 0..storage::campaign_count(&env) {
            campaigns.push_back(storage::load_campaign(&env, id)?);
        }
        Ok(campaigns)
    }

    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    pub fn campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    /// Total pledged by `contributor` to `campaign_id`; 0 if none.
    pub fn contribution_of(env: Env, campaign_id: u64, contributor: Address) -> Result<i128, Error> {
        storage::load_config(&env, campaign_id)?;
        Ok(storage::get_contribution(&env, campaign_id, &contributor))
    }

    /// Contributors of `campaign_id` in first-pledge order, with totals.
    pub fn get_contributors(env: Env, campaign_id: u64) -> Result<Vec<Contribution>, Error> {
        let state = storage::load_state(&env, campaign_id)?;
        Ok(storage::get_contributions(&env, campaign_id, state.contributor_count))
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }
}
