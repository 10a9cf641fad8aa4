use serde::Serialize;
use serde_json::json;

use yieldvault_core::{max_deposit_amount, Amount, DISPLAY_PRECISION};

use crate::cli::MaxDepositArgs;
use crate::error::CliError;

use super::{provider_failure, CommandResult, Session};

#[derive(Debug, Serialize)]
struct MaxDepositData {
    balance: Amount,
    gas_reserve: Amount,
    max_deposit: Amount,
    /// Fixed four-digit rendering, as shown in the input field.
    max_deposit_display: String,
}

pub async fn run(args: &MaxDepositArgs, session: &Session) -> Result<CommandResult, CliError> {
    let (_, balance) = match session.connected_balance().await {
        Ok(connected) => connected,
        Err(error) => return provider_failure(json!({}), &error),
    };

    let reserve = match &args.reserve {
        Some(raw) => Amount::parse(raw)?,
        None => session.config.gas_reserve,
    };

    let max = max_deposit_amount(balance, reserve);
    let data = serde_json::to_value(MaxDepositData {
        balance,
        gas_reserve: reserve,
        max_deposit: max,
        max_deposit_display: max.format_dp(DISPLAY_PRECISION),
    })?;

    Ok(CommandResult::ok(data))
}
