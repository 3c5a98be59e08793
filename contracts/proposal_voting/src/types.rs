use soroban_sdk::{contracttype, Address, String};

/// A yes/no proposal open until `target_block`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub creator: Address,
    pub description: String,
    /// First ledger sequence at which votes are refused.
    pub target_block: u32,
    pub yes_votes: u32,
    pub no_votes: u32,
}

impl Proposal {
    pub fn is_open(&self, current_block: u32) -> bool {
        current_block < self.target_block
    }

    pub fn total_votes(&self) -> u64 {
        u64::from(self.yes_votes) + u64::from(self.no_votes)
    }
}
