use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{AccountAddress, Amount, CoreError};

/// Vault contract address of the local development deployment.
const DEV_VAULT_ADDRESS: &str = "0x1234567890123456789012345678901234567890";

/// Local development chain.
const DEV_CHAIN_ID: u64 = 31337;

/// Deployment target and client-side policy knobs.
///
/// All fields have defaults matching the local development deployment, so a
/// partial config file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub vault_address: AccountAddress,
    pub chain_id: u64,
    /// Balance held back from MAX deposits to cover transaction cost.
    pub gas_reserve: Amount,
    /// Optional share floor for withdrawals. None by default: withdrawals
    /// have no minimum unless a deployment configures one.
    pub minimum_withdraw: Option<Amount>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            vault_address: AccountAddress::parse(DEV_VAULT_ADDRESS)
                .expect("dev vault address literal is valid"),
            chain_id: DEV_CHAIN_ID,
            // 0.01
            gas_reserve: Amount::from_raw(10_000_000_000),
            minimum_withdraw: None,
        }
    }
}

impl VaultConfig {
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
