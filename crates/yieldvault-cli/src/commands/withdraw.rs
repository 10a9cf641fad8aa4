use serde::Serialize;

use yieldvault_core::{
    preview_withdraw, ConversionResult, ConversionViolation, Direction, EnvelopeError,
    ProviderError, TransactionSubmitter, TxReceipt, VaultReader,
};

use crate::cli::WithdrawArgs;
use crate::error::CliError;

use super::{provider_failure, violation_message, CommandResult, Session};

#[derive(Debug, Serialize)]
struct WithdrawData {
    submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    receipt: Option<TxReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<ConversionResult>,
}

fn not_submitted(preview: Option<ConversionResult>) -> Result<serde_json::Value, CliError> {
    Ok(serde_json::to_value(WithdrawData {
        submitted: false,
        receipt: None,
        preview,
    })?)
}

pub async fn run(args: &WithdrawArgs, session: &Session) -> Result<CommandResult, CliError> {
    let Some(account) = session.account.clone() else {
        return provider_failure(not_submitted(None)?, &ProviderError::not_connected());
    };

    let quote = match session.reader.vault_quote().await {
        Ok(quote) => quote,
        Err(error) => return provider_failure(not_submitted(None)?, &error),
    };

    let stats = match session.reader.vault_stats(Some(&account)).await {
        Ok(stats) => stats,
        Err(error) => return provider_failure(not_submitted(None)?, &error),
    };

    let result = preview_withdraw(
        &args.shares,
        &quote,
        stats.user_shares,
        session.config.minimum_withdraw,
    )?;

    // A rejected share amount never reaches the submitter.
    if !result.is_valid() {
        let (code, message) = match result.violation() {
            Some(violation @ ConversionViolation::BelowMinimum { .. }) => (
                "withdraw.below_minimum",
                violation_message(Direction::Withdraw, &violation),
            ),
            Some(violation @ ConversionViolation::InsufficientBalance { .. }) => (
                "withdraw.insufficient_shares",
                violation_message(Direction::Withdraw, &violation),
            ),
            None => (
                "withdraw.invalid_amount",
                String::from("share amount is empty or not a positive number"),
            ),
        };

        let entry = EnvelopeError::new(code, message)?.with_retryable(false);
        return Ok(CommandResult::ok(not_submitted(Some(result))?).with_error(entry));
    }

    match session
        .submitter
        .submit_withdraw(&account, result.normalized_amount)
        .await
    {
        Ok(receipt) => {
            let data = serde_json::to_value(WithdrawData {
                submitted: true,
                receipt: Some(receipt),
                preview: Some(result),
            })?;
            Ok(CommandResult::ok(data))
        }
        Err(error) => provider_failure(not_submitted(Some(result))?, &error),
    }
}
