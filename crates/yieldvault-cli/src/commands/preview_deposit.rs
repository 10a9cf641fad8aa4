use serde::Serialize;
use serde_json::json;

use yieldvault_core::{
    preview_deposit, Amount, ConversionStatus, Direction, VaultReader, WalletProvider,
};

use crate::cli::PreviewDepositArgs;
use crate::error::CliError;

use super::{provider_failure, violation_message, CommandResult, Session};

#[derive(Debug, Serialize)]
struct DepositPreviewData {
    deposit_amount: Amount,
    expected_shares: Amount,
    price_per_share: Amount,
    minimum_deposit: Amount,
    estimated_apy: Amount,
    available_balance: Amount,
    status: ConversionStatus,
}

pub async fn run(args: &PreviewDepositArgs, session: &Session) -> Result<CommandResult, CliError> {
    let quote = match session.reader.vault_quote().await {
        Ok(quote) => quote,
        Err(error) => return provider_failure(json!({}), &error),
    };

    // Disconnected viewers preview against a zero balance: the conversion
    // still renders, the balance ceiling rejects any positive amount.
    let balance = match &session.account {
        Some(account) => match session.wallet.native_balance(account).await {
            Ok(balance) => balance,
            Err(error) => return provider_failure(json!({}), &error),
        },
        None => Amount::ZERO,
    };

    let result = preview_deposit(&args.amount, &quote, balance)?;

    let data = serde_json::to_value(DepositPreviewData {
        deposit_amount: result.normalized_amount,
        expected_shares: result.converted_amount,
        price_per_share: quote.price_per_share,
        minimum_deposit: quote.minimum_deposit,
        estimated_apy: quote.estimated_apy,
        available_balance: balance,
        status: result.status,
    })?;

    let mut command = CommandResult::ok(data);
    if let Some(violation) = result.violation() {
        command = command.with_warning(violation_message(Direction::Deposit, &violation));
    }
    if session.account.is_none() {
        command = command.with_warning("no account is connected; previewing with a zero balance");
    }
    Ok(command)
}
