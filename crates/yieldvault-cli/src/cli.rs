//! CLI argument definitions for YieldVault.
//!
//! The CLI mirrors the vault front end's pages as commands over the mock
//! collaborators: statistics, deposit/withdraw previews, the MAX helper,
//! and simulated transaction submission.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stats` | Vault and user statistics snapshot |
//! | `preview-deposit` | Convert an asset amount into expected shares |
//! | `preview-withdraw` | Convert a share amount into expected assets |
//! | `max-deposit` | Largest depositable amount after the gas reserve |
//! | `deposit` | Validate and submit a simulated deposit |
//! | `withdraw` | Validate and submit a simulated withdrawal |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--account` | none | Connected account; omit to run disconnected |
//! | `--balance` | `10` | Simulated wallet balance |
//! | `--config` | none | JSON config file overriding dev defaults |
//!
//! # Examples
//!
//! ```bash
//! # Vault overview
//! yieldvault stats
//!
//! # Preview a deposit as a connected user
//! yieldvault preview-deposit 1.0 --account 0x1234567890123456789012345678901234567890
//!
//! # Submit a simulated deposit, strict mode for CI
//! yieldvault deposit 0.5 --account 0x1234... --strict
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// YieldVault - vault share conversion and simulated transactions
///
/// Preview deposit/withdraw share conversions against the current vault
/// quote and submit timer-simulated transactions, with unified envelope
/// output for scripting.
#[derive(Debug, Parser)]
#[command(
    name = "yieldvault",
    author,
    version,
    about = "Vault share conversion and simulated transactions"
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - ndjson: One JSON object per line
    /// - table: ASCII table format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    ///
    /// Useful for CI pipelines that need strict validation.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Connected account address (0x + 40 hex digits).
    ///
    /// Omit to run disconnected: user statistics are zeroed and
    /// balance-dependent commands report `provider.not_connected`.
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Simulated wallet balance for the connected account.
    #[arg(long, global = true, default_value = "10")]
    pub balance: String,

    /// Path to a JSON config file overriding the dev deployment defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Vault and user statistics snapshot.
    ///
    /// User fields are populated only when `--account` is given.
    Stats,

    /// Preview converting an asset amount into vault shares.
    ///
    /// Shows expected shares at the current price per share and whether the
    /// amount passes the minimum-deposit and balance checks. An empty or
    /// non-numeric amount previews as neutral, not as an error.
    PreviewDeposit(PreviewDepositArgs),

    /// Preview redeeming vault shares for the underlying asset.
    PreviewWithdraw(PreviewWithdrawArgs),

    /// Largest depositable amount after holding back the gas reserve.
    ///
    /// Clamped at zero and floored to display precision, so the offer
    /// never exceeds what is truly available.
    MaxDeposit(MaxDepositArgs),

    /// Validate and submit a simulated deposit.
    ///
    /// A rejected amount becomes an envelope error and never reaches the
    /// submitter.
    Deposit(DepositArgs),

    /// Validate and submit a simulated withdrawal.
    Withdraw(WithdrawArgs),
}

/// Arguments for the `preview-deposit` command.
#[derive(Debug, Args)]
pub struct PreviewDepositArgs {
    /// Asset amount to deposit (e.g. 1.0).
    pub amount: String,
}

/// Arguments for the `preview-withdraw` command.
#[derive(Debug, Args)]
pub struct PreviewWithdrawArgs {
    /// Share amount to redeem.
    pub shares: String,
}

/// Arguments for the `max-deposit` command.
#[derive(Debug, Args)]
pub struct MaxDepositArgs {
    /// Reserve held back for transaction cost, overriding the configured
    /// gas reserve.
    #[arg(long)]
    pub reserve: Option<String>,
}

/// Arguments for the `deposit` command.
#[derive(Debug, Args)]
pub struct DepositArgs {
    /// Asset amount to deposit.
    pub amount: String,
}

/// Arguments for the `withdraw` command.
#[derive(Debug, Args)]
pub struct WithdrawArgs {
    /// Share amount to withdraw.
    pub shares: String,
}
