use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub owner: Address,
    pub target: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignPledged {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
    pub collected: i128,
}

pub fn emit_campaign_created(env: &Env, campaign_id: u64, owner: Address, target: i128, deadline: u64) {
    let topics = (symbol_short!("created"), campaign_id);
    let data = CampaignCreated {
        campaign_id,
        owner,
        target,
        deadline,
    };
    env.events().publish(topics, data);
}

pub fn emit_campaign_pledged(
    env: &Env,
    campaign_id: u64,
    contributor: Address,
    amount: i128,
    collected: i128,
) {
    let topics = (symbol_short!("pledged"), campaign_id);
    let data = CampaignPledged {
        campaign_id,
        contributor,
        amount,
        collected,
    };
    env.events().publish(topics, data);
}
