use soroban_sdk::{contracttype, String};

/// Descriptive token metadata, fixed at `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}
