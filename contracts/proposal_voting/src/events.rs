use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub creator: Address,
    pub target_block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCast {
    pub proposal_id: u64,
    pub voter: Address,
    pub support: bool,
}

pub fn emit_proposal_created(env: &Env, proposal_id: u64, creator: Address, target_block: u32) {
    let topics = (symbol_short!("created"), proposal_id);
    let data = ProposalCreated {
        proposal_id,
        creator,
        target_block,
    };
    env.events().publish(topics, data);
}

pub fn emit_vote_cast(env: &Env, proposal_id: u64, voter: Address, support: bool) {
    let topics = (symbol_short!("voted"), proposal_id);
    let data = VoteCast {
        proposal_id,
        voter,
        support,
    };
    env.events().publish(topics, data);
}
