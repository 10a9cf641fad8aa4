use serde::Serialize;
use serde_json::json;

use yieldvault_core::{AccountAddress, VaultReader, VaultStats};

use crate::error::CliError;

use super::{provider_failure, CommandResult, Session};

#[derive(Debug, Serialize)]
struct StatsData {
    vault_address: AccountAddress,
    chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<AccountAddress>,
    stats: VaultStats,
}

pub async fn run(session: &Session) -> Result<CommandResult, CliError> {
    match session.reader.vault_stats(session.account.as_ref()).await {
        Ok(stats) => {
            let data = serde_json::to_value(StatsData {
                vault_address: session.config.vault_address.clone(),
                chain_id: session.config.chain_id,
                account: session.account.clone(),
                stats,
            })?;
            Ok(CommandResult::ok(data))
        }
        Err(error) => provider_failure(json!({}), &error),
    }
}
