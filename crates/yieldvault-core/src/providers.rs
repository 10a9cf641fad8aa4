//! Collaborator seams for the surrounding application.
//!
//! The calculator's correctness depends on three external contracts: an
//! account/balance provider, a quote provider, and an opaque transaction
//! submitter. Each is a trait so callers can wire real chain-backed
//! implementations later; this repository ships the mocks in
//! [`mock`](crate::mock).

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AccountAddress, Amount, Direction, UtcDateTime, VaultQuote, VaultStats};

/// Boxed future returned by provider trait methods.
pub type ProviderFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, ProviderError>> + Send + 'a>>;

/// Collaborator failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    NotConnected,
    Unavailable,
    Rejected,
}

/// Structured error reported by wallet, quote, and submission collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    retryable: bool,
}

impl ProviderError {
    pub fn not_connected() -> Self {
        Self {
            kind: ProviderErrorKind::NotConnected,
            message: String::from("no account is connected"),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Rejected,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ProviderErrorKind::NotConnected => "provider.not_connected",
            ProviderErrorKind::Unavailable => "provider.unavailable",
            ProviderErrorKind::Rejected => "provider.rejected",
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderError {}

/// Receipt returned by a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_id: Uuid,
    pub direction: Direction,
    /// Asset amount for deposits, share amount for withdrawals.
    pub amount: Amount,
    pub submitted_at: UtcDateTime,
}

/// Supplies the connected identity and its native balance.
///
/// The balance is treated as an opaque decimal; its freshness is the
/// provider's concern.
pub trait WalletProvider: Send + Sync {
    /// Currently connected account, if any.
    fn connected_account(&self) -> Option<AccountAddress>;

    /// Native asset balance of `account`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if `account` is not the connected identity
    /// or the provider is unreachable.
    fn native_balance<'a>(&'a self, account: &'a AccountAddress) -> ProviderFuture<'a, Amount>;
}

/// Supplies vault pricing and statistics snapshots.
pub trait VaultReader: Send + Sync {
    /// Current pricing snapshot. The price per share is expected to be
    /// positive; consumers re-check before converting.
    fn vault_quote(&self) -> ProviderFuture<'_, VaultQuote>;

    /// Vault-wide statistics, with user fields populated only when an
    /// account is given.
    fn vault_stats<'a>(
        &'a self,
        account: Option<&'a AccountAddress>,
    ) -> ProviderFuture<'a, VaultStats>;
}

/// Opaque asynchronous transaction submission.
///
/// Callers validate before submitting; the submitter is never retried and
/// exposes no chain state beyond the returned receipt.
pub trait TransactionSubmitter: Send + Sync {
    fn submit_deposit<'a>(
        &'a self,
        account: &'a AccountAddress,
        amount: Amount,
    ) -> ProviderFuture<'a, TxReceipt>;

    fn submit_withdraw<'a>(
        &'a self,
        account: &'a AccountAddress,
        shares: Amount,
    ) -> ProviderFuture<'a, TxReceipt>;
}
