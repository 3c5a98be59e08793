use soroban_sdk::{contracttype, Address};

/// Vault parameters, fixed at `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub depositor: Address,
    /// The only address allowed to withdraw.
    pub beneficiary: Address,
    /// Ledger timestamp from which withdrawal is allowed.
    pub unlock_time: u64,
    pub token: Address,
    /// Amount locked at `init`.
    pub deposited: i128,
}
