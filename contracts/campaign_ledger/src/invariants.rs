#![allow(dead_code)]

extern crate std;

use soroban_sdk::Env;

use crate::types::Campaign;
use crate::{CampaignLedgerClient, Contribution};

/// Campaign target is always positive.
pub fn assert_target_positive(campaign: &Campaign) {
    assert!(
        campaign.target > 0,
        "campaign {} has non-positive target ({})",
        campaign.id,
        campaign.target
    );
}

/// Collected total is never negative.
pub fn assert_collected_non_negative(campaign: &Campaign) {
    assert!(
        campaign.collected >= 0,
        "campaign {} has negative collected total ({})",
        campaign.id,
        campaign.collected
    );
}

/// `collected` equals the sum of all contributions and the contributor
/// count matches the recorded list.
pub fn assert_collected_matches_contributions(
    campaign: &Campaign,
    contributions: &soroban_sdk::Vec<Contribution>,
) {
    let mut sum: i128 = 0;
    for c in contributions.iter() {
        assert!(c.amount > 0, "zero contribution recorded for campaign {}", campaign.id);
        sum += c.amount;
    }
    assert_eq!(
        campaign.collected, sum,
        "campaign {} collected {} but contributions sum to {}",
        campaign.id, campaign.collected, sum
    );
    assert_eq!(
        campaign.contributor_count,
        contributions.len(),
        "campaign {} contributor count mismatch",
        campaign.id
    );
}

/// After a pledge of `amount` the collected total grows by exactly `amount`.
pub fn assert_pledge_invariant(before: i128, after: i128, amount: i128) {
    assert_eq!(
        after,
        before + amount,
        "pledge invariant broken: {} + {} != {}",
        before,
        amount,
        after
    );
}

/// Campaign ids equal their position in `get_campaigns`.
pub fn assert_sequential_ids(campaigns: &soroban_sdk::Vec<Campaign>) {
    for (i, campaign) in campaigns.iter().enumerate() {
        assert_eq!(campaign.id, i as u64, "expected id {}, got {}", i, campaign.id);
    }
}

/// Fields fixed at creation never change.
pub fn assert_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "campaign id changed");
    assert_eq!(original.owner, current.owner, "campaign owner changed");
    assert_eq!(original.title, current.title, "campaign title changed");
    assert_eq!(original.description, current.description, "campaign description changed");
    assert_eq!(original.target, current.target, "campaign target changed");
    assert_eq!(original.deadline, current.deadline, "campaign deadline changed");
    assert_eq!(original.image, current.image, "campaign image changed");
}

/// Run every invariant against every stored campaign.
pub fn assert_all_campaign_invariants(_env: &Env, client: &CampaignLedgerClient) {
    let campaigns = client.get_campaigns();
    assert_sequential_ids(&campaigns);
    for campaign in campaigns.iter() {
        assert_target_positive(&campaign);
        assert_collected_non_negative(&campaign);
        let contributions = client.get_contributors(&campaign.id);
        assert_collected_matches_contributions(&campaign, &contributions);
    }
}
