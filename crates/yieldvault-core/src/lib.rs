//! Core contracts for YieldVault.
//!
//! This crate contains:
//! - Canonical domain types and validation (amounts, addresses, quotes)
//! - The share conversion calculator and its deposit/withdraw policy checks
//! - Collaborator seams for wallet, quote, and transaction providers
//! - Response envelope and structured errors
//! - Mock collaborators matching the development deployment

pub mod config;
pub mod conversion;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod mock;
pub mod providers;

pub use config::VaultConfig;
pub use conversion::{
    max_deposit_amount, preview_deposit, preview_withdraw, ConversionRequest, ConversionResult,
    ConversionStatus, ConversionViolation, Direction, DISPLAY_PRECISION, SHARE_PRECISION,
};
pub use domain::{AccountAddress, Amount, UtcDateTime, VaultQuote, VaultStats, AMOUNT_DECIMALS};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{ArithmeticError, ConversionError, CoreError, ValidationError};
pub use mock::{MockSubmitter, MockVaultReader, MockWallet};
pub use providers::{
    ProviderError, ProviderErrorKind, ProviderFuture, TransactionSubmitter, TxReceipt, VaultReader,
    WalletProvider,
};
