mod deposit;
mod max_deposit;
mod preview_deposit;
mod preview_withdraw;
mod stats;
mod withdraw;

use std::time::Instant;

use serde_json::Value;

use yieldvault_core::{
    AccountAddress, Amount, ConversionViolation, Direction, Envelope, EnvelopeError,
    MockSubmitter, MockVaultReader, MockWallet, ProviderError, VaultConfig, WalletProvider,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

const SCHEMA_VERSION: &str = "v1.0.0";

/// Collaborators wired for a single command invocation.
pub struct Session {
    pub wallet: MockWallet,
    pub reader: MockVaultReader,
    pub submitter: MockSubmitter,
    pub config: VaultConfig,
    pub account: Option<AccountAddress>,
}

impl Session {
    /// Connected account and its balance, or the not-connected failure.
    async fn connected_balance(&self) -> Result<(AccountAddress, Amount), ProviderError> {
        let Some(account) = self.account.clone() else {
            return Err(ProviderError::not_connected());
        };
        let balance = self.wallet.native_balance(&account).await?;
        Ok((account, balance))
    }
}

/// Accumulated output of a single command.
pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Collaborator failure rendered as envelope data instead of a process
/// abort, so scripted callers still get a well-formed response.
pub(crate) fn provider_failure(
    data: Value,
    error: &ProviderError,
) -> Result<CommandResult, CliError> {
    let entry =
        EnvelopeError::new(error.code(), error.message())?.with_retryable(error.retryable());
    Ok(CommandResult::ok(data).with_error(entry))
}

/// User-facing message for a rejected preview, phrased like the original
/// input-field hints.
pub(crate) fn violation_message(direction: Direction, violation: &ConversionViolation) -> String {
    match (direction, violation) {
        (Direction::Deposit, ConversionViolation::BelowMinimum { minimum }) => {
            format!("minimum deposit is {minimum}")
        }
        (Direction::Withdraw, ConversionViolation::BelowMinimum { minimum }) => {
            format!("minimum withdrawal is {minimum}")
        }
        (Direction::Deposit, ConversionViolation::InsufficientBalance { .. }) => {
            String::from("insufficient balance")
        }
        (Direction::Withdraw, ConversionViolation::InsufficientBalance { .. }) => {
            String::from("insufficient share balance")
        }
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let config = match &cli.config {
        Some(path) => VaultConfig::load(path)?,
        None => VaultConfig::default(),
    };

    let account = cli
        .account
        .as_deref()
        .map(AccountAddress::parse)
        .transpose()?;
    let balance = Amount::parse(&cli.balance)?;

    let wallet = match account.clone() {
        Some(connected) => MockWallet::connected(connected, balance),
        None => MockWallet::disconnected(),
    };

    let session = Session {
        wallet,
        reader: MockVaultReader::default(),
        submitter: MockSubmitter::default(),
        config,
        account,
    };

    let started = Instant::now();
    let command_result = match &cli.command {
        Command::Stats => stats::run(&session).await?,
        Command::PreviewDeposit(args) => preview_deposit::run(args, &session).await?,
        Command::PreviewWithdraw(args) => preview_withdraw::run(args, &session).await?,
        Command::MaxDeposit(args) => max_deposit::run(args, &session).await?,
        Command::Deposit(args) => deposit::run(args, &session).await?,
        Command::Withdraw(args) => withdraw::run(args, &session).await?,
    };
    let latency_ms = started.elapsed().as_millis() as u64;

    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let mut metadata = Metadata::new(latency_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }
    let meta = metadata.into_envelope_meta(SCHEMA_VERSION)?;

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}
