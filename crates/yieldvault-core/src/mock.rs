//! Mock collaborators matching the development deployment.
//!
//! These stand in for the wallet, the on-chain quote source, and the
//! transaction pipeline. Submission is simulated with a timer; no network
//! or chain state is touched anywhere in this module.

use std::time::Duration;

use uuid::Uuid;

use crate::providers::{
    ProviderError, ProviderFuture, TransactionSubmitter, TxReceipt, VaultReader, WalletProvider,
};
use crate::{AccountAddress, Amount, Direction, UtcDateTime, VaultQuote, VaultStats};

/// Wallet stub holding a fixed connected account and balance.
#[derive(Debug, Clone)]
pub struct MockWallet {
    account: Option<AccountAddress>,
    balance: Amount,
}

impl MockWallet {
    pub fn connected(account: AccountAddress, balance: Amount) -> Self {
        Self {
            account: Some(account),
            balance,
        }
    }

    pub const fn disconnected() -> Self {
        Self {
            account: None,
            balance: Amount::ZERO,
        }
    }
}

impl WalletProvider for MockWallet {
    fn connected_account(&self) -> Option<AccountAddress> {
        self.account.clone()
    }

    fn native_balance<'a>(&'a self, account: &'a AccountAddress) -> ProviderFuture<'a, Amount> {
        Box::pin(async move {
            match &self.account {
                Some(connected) if connected == account => Ok(self.balance),
                _ => Err(ProviderError::not_connected()),
            }
        })
    }
}

/// Quote and statistics source with fixed development-deployment numbers.
#[derive(Debug, Clone)]
pub struct MockVaultReader {
    quote: VaultQuote,
    stats: VaultStats,
}

impl MockVaultReader {
    pub const fn new(quote: VaultQuote, stats: VaultStats) -> Self {
        Self { quote, stats }
    }
}

impl Default for MockVaultReader {
    fn default() -> Self {
        Self {
            quote: VaultQuote {
                // 1.0543 asset units per share
                price_per_share: Amount::from_raw(1_054_300_000_000),
                // 0.001
                minimum_deposit: Amount::from_raw(1_000_000_000),
                estimated_apy: Amount::from_int(5),
            },
            stats: VaultStats {
                // 1250.75
                total_value_locked: Amount::from_raw(1_250_750_000_000_000),
                current_apy: Amount::from_int(5),
                // 1187.23
                total_shares: Amount::from_raw(1_187_230_000_000_000),
                // 15.5
                user_shares: Amount::from_raw(15_500_000_000_000),
                // 16.34
                user_asset_value: Amount::from_raw(16_340_000_000_000),
            },
        }
    }
}

impl VaultReader for MockVaultReader {
    fn vault_quote(&self) -> ProviderFuture<'_, VaultQuote> {
        Box::pin(async move { Ok(self.quote) })
    }

    fn vault_stats<'a>(
        &'a self,
        account: Option<&'a AccountAddress>,
    ) -> ProviderFuture<'a, VaultStats> {
        Box::pin(async move {
            match account {
                Some(_) => Ok(self.stats),
                None => Ok(self.stats.anonymized()),
            }
        })
    }
}

/// Timer-simulated transaction submitter.
///
/// Sleeps for the configured delay, then hands back a receipt. No retries,
/// no failure injection.
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    delay: Duration,
}

impl MockSubmitter {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Zero-delay submitter for tests.
    pub const fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    fn simulate<'a>(
        &'a self,
        direction: Direction,
        amount: Amount,
    ) -> ProviderFuture<'a, TxReceipt> {
        Box::pin(async move {
            tokio::time::sleep(self.delay).await;
            Ok(TxReceipt {
                tx_id: Uuid::new_v4(),
                direction,
                amount,
                submitted_at: UtcDateTime::now(),
            })
        })
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl TransactionSubmitter for MockSubmitter {
    fn submit_deposit<'a>(
        &'a self,
        _account: &'a AccountAddress,
        amount: Amount,
    ) -> ProviderFuture<'a, TxReceipt> {
        self.simulate(Direction::Deposit, amount)
    }

    fn submit_withdraw<'a>(
        &'a self,
        _account: &'a AccountAddress,
        shares: Amount,
    ) -> ProviderFuture<'a, TxReceipt> {
        self.simulate(Direction::Withdraw, shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> AccountAddress {
        AccountAddress::parse("0x1111111111111111111111111111111111111111").expect("address")
    }

    #[tokio::test]
    async fn connected_wallet_reports_its_balance() {
        let wallet = MockWallet::connected(account(), Amount::from_int(3));

        let balance = wallet
            .native_balance(&account())
            .await
            .expect("balance should resolve");
        assert_eq!(balance, Amount::from_int(3));
    }

    #[tokio::test]
    async fn disconnected_wallet_refuses_balance_queries() {
        let wallet = MockWallet::disconnected();

        let err = wallet
            .native_balance(&account())
            .await
            .expect_err("must fail");
        assert_eq!(err.code(), "provider.not_connected");
        assert!(!err.retryable());
    }

    #[tokio::test]
    async fn stats_hide_user_fields_without_an_account() {
        let reader = MockVaultReader::default();

        let anonymous = reader.vault_stats(None).await.expect("stats");
        assert_eq!(anonymous.user_shares, Amount::ZERO);

        let personal = reader.vault_stats(Some(&account())).await.expect("stats");
        assert_eq!(personal.user_shares.to_string(), "15.5");
    }

    #[tokio::test]
    async fn default_quote_matches_the_dev_deployment() {
        let quote = MockVaultReader::default()
            .vault_quote()
            .await
            .expect("quote");
        assert_eq!(quote.price_per_share.to_string(), "1.0543");
        assert_eq!(quote.minimum_deposit.to_string(), "0.001");
    }

    #[tokio::test]
    async fn submitter_returns_a_receipt_after_the_delay() {
        let submitter = MockSubmitter::instant();

        let receipt = submitter
            .submit_deposit(&account(), Amount::from_int(1))
            .await
            .expect("receipt");
        assert_eq!(receipt.direction, Direction::Deposit);
        assert_eq!(receipt.amount, Amount::from_int(1));
    }
}
