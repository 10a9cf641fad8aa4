use serde::Serialize;
use serde_json::json;

use yieldvault_core::{preview_withdraw, Amount, ConversionStatus, Direction, VaultReader};

use crate::cli::PreviewWithdrawArgs;
use crate::error::CliError;

use super::{provider_failure, violation_message, CommandResult, Session};

#[derive(Debug, Serialize)]
struct WithdrawPreviewData {
    share_amount: Amount,
    expected_assets: Amount,
    price_per_share: Amount,
    estimated_apy: Amount,
    available_shares: Amount,
    status: ConversionStatus,
}

pub async fn run(args: &PreviewWithdrawArgs, session: &Session) -> Result<CommandResult, CliError> {
    let quote = match session.reader.vault_quote().await {
        Ok(quote) => quote,
        Err(error) => return provider_failure(json!({}), &error),
    };

    // The withdrawable ceiling is the user's share balance; zero when
    // disconnected.
    let stats = match session.reader.vault_stats(session.account.as_ref()).await {
        Ok(stats) => stats,
        Err(error) => return provider_failure(json!({}), &error),
    };

    let result = preview_withdraw(
        &args.shares,
        &quote,
        stats.user_shares,
        session.config.minimum_withdraw,
    )?;

    let data = serde_json::to_value(WithdrawPreviewData {
        share_amount: result.normalized_amount,
        expected_assets: result.converted_amount,
        price_per_share: quote.price_per_share,
        estimated_apy: quote.estimated_apy,
        available_shares: stats.user_shares,
        status: result.status,
    })?;

    let mut command = CommandResult::ok(data);
    if let Some(violation) = result.violation() {
        command = command.with_warning(violation_message(Direction::Withdraw, &violation));
    }
    if session.account.is_none() {
        command = command.with_warning("no account is connected; previewing with zero shares");
    }
    Ok(command)
}
