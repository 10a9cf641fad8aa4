use serde::{Deserialize, Serialize};

use crate::Amount;

/// Vault-wide and per-user statistics snapshot for the overview panel.
///
/// The user fields are zero when no account is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultStats {
    pub total_value_locked: Amount,
    /// Current yield, in percent.
    pub current_apy: Amount,
    pub total_shares: Amount,
    pub user_shares: Amount,
    pub user_asset_value: Amount,
}

impl VaultStats {
    /// Snapshot with the user fields zeroed, for disconnected viewers.
    pub fn anonymized(self) -> Self {
        Self {
            user_shares: Amount::ZERO,
            user_asset_value: Amount::ZERO,
            ..self
        }
    }
}
