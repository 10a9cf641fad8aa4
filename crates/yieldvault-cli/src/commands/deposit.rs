use serde::Serialize;

use yieldvault_core::{
    preview_deposit, ConversionResult, ConversionViolation, Direction, EnvelopeError,
    TransactionSubmitter, TxReceipt, VaultReader,
};

use crate::cli::DepositArgs;
use crate::error::CliError;

use super::{provider_failure, violation_message, CommandResult, Session};

#[derive(Debug, Serialize)]
struct DepositData {
    submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    receipt: Option<TxReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<ConversionResult>,
}

fn not_submitted(preview: Option<ConversionResult>) -> Result<serde_json::Value, CliError> {
    Ok(serde_json::to_value(DepositData {
        submitted: false,
        receipt: None,
        preview,
    })?)
}

pub async fn run(args: &DepositArgs, session: &Session) -> Result<CommandResult, CliError> {
    let (account, balance) = match session.connected_balance().await {
        Ok(connected) => connected,
        Err(error) => return provider_failure(not_submitted(None)?, &error),
    };

    let quote = match session.reader.vault_quote().await {
        Ok(quote) => quote,
        Err(error) => return provider_failure(not_submitted(None)?, &error),
    };

    let result = preview_deposit(&args.amount, &quote, balance)?;

    // A rejected amount never reaches the submitter.
    if !result.is_valid() {
        let (code, message) = match result.violation() {
            Some(violation @ ConversionViolation::BelowMinimum { .. }) => (
                "deposit.below_minimum",
                violation_message(Direction::Deposit, &violation),
            ),
            Some(violation @ ConversionViolation::InsufficientBalance { .. }) => (
                "deposit.insufficient_balance",
                violation_message(Direction::Deposit, &violation),
            ),
            None => (
                "deposit.invalid_amount",
                String::from("amount is empty or not a positive number"),
            ),
        };

        let entry = EnvelopeError::new(code, message)?.with_retryable(false);
        return Ok(CommandResult::ok(not_submitted(Some(result))?).with_error(entry));
    }

    match session
        .submitter
        .submit_deposit(&account, result.normalized_amount)
        .await
    {
        Ok(receipt) => {
            let data = serde_json::to_value(DepositData {
                submitted: true,
                receipt: Some(receipt),
                preview: Some(result),
            })?;
            Ok(CommandResult::ok(data))
        }
        Err(error) => provider_failure(not_submitted(Some(result))?, &error),
    }
}
