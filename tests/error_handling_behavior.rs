//! Behavior-driven tests for error handling behavior
//!
//! These tests verify HOW the system reacts to corrupt quotes, arithmetic
//! limits, disconnected collaborators, and configuration, focusing on
//! user-visible outcomes.

use std::io::Write;

use yieldvault_core::{
    preview_deposit, preview_withdraw, AccountAddress, Amount, ArithmeticError, ConversionError,
    ConversionViolation, MockWallet, VaultConfig, VaultQuote, WalletProvider,
};

fn account() -> AccountAddress {
    AccountAddress::parse("0xabcdef1234567890abcdef1234567890abcdef12").expect("address")
}

// =============================================================================
// Error Handling: Corrupt Quotes
// =============================================================================

#[test]
fn when_the_share_price_is_zero_both_preview_directions_fail_loudly() {
    // Given: A quote that bypassed construction with a zero price
    let corrupt = VaultQuote {
        price_per_share: Amount::ZERO,
        minimum_deposit: Amount::ZERO,
        estimated_apy: Amount::ZERO,
    };

    // When/Then: Neither direction silently produces a number
    let deposit = preview_deposit("1.0", &corrupt, Amount::from_int(2));
    assert!(matches!(deposit, Err(ConversionError::ZeroSharePrice)));

    let withdraw = preview_withdraw("1.0", &corrupt, Amount::from_int(2), None);
    assert!(matches!(withdraw, Err(ConversionError::ZeroSharePrice)));
}

#[test]
fn zero_price_is_reported_even_for_neutral_input() {
    // The hazard outranks input handling: any call against a corrupt quote
    // must refuse, including one that would otherwise be neutral.
    let corrupt = VaultQuote {
        price_per_share: Amount::ZERO,
        minimum_deposit: Amount::ZERO,
        estimated_apy: Amount::ZERO,
    };

    let result = preview_deposit("", &corrupt, Amount::from_int(2));
    assert!(matches!(result, Err(ConversionError::ZeroSharePrice)));
}

// =============================================================================
// Error Handling: Arithmetic Limits
// =============================================================================

#[test]
fn conversion_overflow_surfaces_as_an_error_not_a_wrap() {
    // Given: An enormous amount against a microscopic share price
    let quote = VaultQuote::new(
        Amount::parse("0.000001").expect("price"),
        Amount::ZERO,
        Amount::ZERO,
    )
    .expect("quote");
    let huge = "200000000000000000000000000";

    // When: The conversion would overflow the widened intermediate
    let result = preview_deposit(huge, &quote, Amount::from_raw(u128::MAX));

    // Then: The caller sees a structured arithmetic error
    assert!(matches!(
        result,
        Err(ConversionError::Arithmetic(ArithmeticError::Overflow))
    ));
}

#[test]
fn unparseable_keystrokes_never_abort_the_preview_loop() {
    let quote = VaultQuote::new(
        Amount::parse("1.0543").expect("price"),
        Amount::parse("0.001").expect("minimum"),
        Amount::ZERO,
    )
    .expect("quote");

    // Half-typed text, pasted garbage, negatives: all neutral, none fatal
    for raw in [".", "..", "-", "-0.5", "1,5", "NaN", "Infinity", "0x10"] {
        let result = preview_deposit(raw, &quote, Amount::from_int(2))
            .expect("keystroke input must never error");
        assert!(!result.is_valid(), "input {raw:?} must not validate");
    }
}

// =============================================================================
// Error Handling: Collaborators
// =============================================================================

#[tokio::test]
async fn disconnected_wallet_reports_not_connected_and_is_not_retryable() {
    let wallet = MockWallet::disconnected();

    let error = wallet
        .native_balance(&account())
        .await
        .expect_err("must fail");

    assert_eq!(error.code(), "provider.not_connected");
    assert!(!error.retryable(), "reconnecting is a user action, not a retry");
}

#[tokio::test]
async fn balance_queries_for_a_foreign_account_are_refused() {
    let wallet = MockWallet::connected(account(), Amount::from_int(10));
    let other =
        AccountAddress::parse("0x9999999999999999999999999999999999999999").expect("address");

    let error = wallet.native_balance(&other).await.expect_err("must fail");
    assert_eq!(error.code(), "provider.not_connected");
}

// =============================================================================
// Error Handling: Configuration
// =============================================================================

#[test]
fn configured_withdraw_floor_is_enforced_by_previews() {
    // Given: A deployment config adding a 0.5 share withdraw floor
    let config = VaultConfig::from_json(r#"{"minimum_withdraw": "0.5"}"#)
        .expect("config should parse");
    let quote = VaultQuote::new(
        Amount::parse("1.0543").expect("price"),
        Amount::ZERO,
        Amount::ZERO,
    )
    .expect("quote");

    // When: A user previews a withdrawal below the floor
    let result = preview_withdraw("0.1", &quote, Amount::from_int(10), config.minimum_withdraw)
        .expect("preview");

    // Then: The floor violation is reported
    assert_eq!(
        result.violation(),
        Some(ConversionViolation::BelowMinimum {
            minimum: Amount::parse("0.5").expect("floor"),
        })
    );
}

#[test]
fn config_files_load_and_partial_overrides_keep_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("vault.json");
    let mut file = std::fs::File::create(&path).expect("create");
    write!(file, r#"{{"gas_reserve": "0.05"}}"#).expect("write");

    let config = VaultConfig::load(&path).expect("config should load");
    assert_eq!(config.gas_reserve.to_string(), "0.05");
    assert_eq!(config.chain_id, 31337, "unnamed fields keep dev defaults");
}
