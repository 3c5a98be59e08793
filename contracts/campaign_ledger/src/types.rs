//! # Types
//!
//! Data structures stored and returned by the campaign ledger.
//!
//! ## Config / State split
//!
//! A campaign is stored as two ledger entries:
//!
//! - [`CampaignConfig`] — written once by `create_campaign`; never mutated.
//! - [`CampaignState`] — written on every pledge.
//!
//! Pledges are the high-frequency write, so only the small state entry is
//! rewritten. The public API returns the reconstructed [`Campaign`].

use soroban_sdk::{contracttype, Address, String};

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub target: i128,
    pub deadline: u64,
    pub image: String,
}

/// Mutable campaign accounting, updated on every pledge.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Sum of every contribution ever pledged.
    pub collected: i128,
    /// Number of distinct contributors.
    pub contributor_count: u32,
}

/// Full campaign record returned by the query entry points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Insertion index; stable for the life of the contract.
    pub id: u64,
    /// Address that receives pledged funds.
    pub owner: Address,
    pub title: String,
    pub description: String,
    /// Funding target in value-token units. Pledging past it is allowed.
    pub target: i128,
    /// Ledger timestamp after which pledges are refused.
    pub deadline: u64,
    pub image: String,
    pub collected: i128,
    pub contributor_count: u32,
}

impl Campaign {
    pub(crate) fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Campaign {
            id: config.id,
            owner: config.owner,
            title: config.title,
            description: config.description,
            target: config.target,
            deadline: config.deadline,
            image: config.image,
            collected: state.collected,
            contributor_count: state.contributor_count,
        }
    }

    /// `true` once `collected` has reached `target`.
    pub fn is_funded(&self) -> bool {
        self.collected >= self.target
    }

    /// `true` while the campaign still accepts pledges at `now`.
    pub fn is_open(&self, now: u64) -> bool {
        now < self.deadline
    }
}

/// One contributor's running total for a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub contributor: Address,
    pub amount: i128,
}
