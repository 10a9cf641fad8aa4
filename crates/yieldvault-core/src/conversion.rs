//! Share conversion and deposit/withdraw validation.
//!
//! Everything here is a pure function of its inputs: no caching, no shared
//! state, no ordering dependency between calls. The functions are total over
//! user input — a preview is recomputed on every keystroke and must never
//! fail just because the input box holds half-typed text. Only a corrupt
//! quote (zero share price) or arithmetic overflow aborts a preview, and
//! both travel as [`ConversionError`] values rather than panics.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Amount, ConversionError, ValidationError, VaultQuote};

/// Fractional digits kept on converted share/asset amounts.
pub const SHARE_PRECISION: u32 = 6;

/// Fractional digits kept on display-clamped balances (MAX button).
pub const DISPLAY_PRECISION: u32 = 4;

/// Which way the user is converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Deposit,
    Withdraw,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            other => Err(ValidationError::InvalidDirection {
                value: other.to_owned(),
            }),
        }
    }
}

/// Policy violation attached to a rejected preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ConversionViolation {
    BelowMinimum { minimum: Amount },
    InsufficientBalance { available: Amount },
}

/// Outcome classification of a preview.
///
/// `Neutral` is a deliberate third state: empty, zero, negative, or
/// unparseable input disables the commit action without surfacing error
/// text, exactly like an untouched input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConversionStatus {
    Neutral,
    Valid,
    Rejected { violation: ConversionViolation },
}

impl ConversionStatus {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub const fn violation(self) -> Option<ConversionViolation> {
        match self {
            Self::Rejected { violation } => Some(violation),
            _ => None,
        }
    }
}

/// Result of a single preview computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The validated input amount; zero when input was neutral.
    pub normalized_amount: Amount,
    /// The converted counterpart: shares for deposits, asset units for
    /// withdrawals. Computed even for rejected amounts so the preview panel
    /// can keep rendering next to the validation message.
    pub converted_amount: Amount,
    pub status: ConversionStatus,
}

impl ConversionResult {
    pub const fn neutral() -> Self {
        Self {
            normalized_amount: Amount::ZERO,
            converted_amount: Amount::ZERO,
            status: ConversionStatus::Neutral,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    pub const fn violation(&self) -> Option<ConversionViolation> {
        self.status.violation()
    }
}

/// A user-supplied conversion to preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Raw input text; may be empty or unparseable.
    pub amount: String,
    pub direction: Direction,
    /// Asset balance for deposits, share balance for withdrawals.
    pub available_balance: Amount,
}

impl ConversionRequest {
    pub fn new(amount: impl Into<String>, direction: Direction, available_balance: Amount) -> Self {
        Self {
            amount: amount.into(),
            direction,
            available_balance,
        }
    }

    pub fn preview(&self, quote: &VaultQuote) -> Result<ConversionResult, ConversionError> {
        match self.direction {
            Direction::Deposit => preview_deposit(&self.amount, quote, self.available_balance),
            Direction::Withdraw => {
                preview_withdraw(&self.amount, quote, self.available_balance, None)
            }
        }
    }
}

/// Preview converting `raw_amount` asset units into shares.
///
/// # Errors
///
/// [`ConversionError::ZeroSharePrice`] when the quote carries a zero price
/// (never divides), [`ConversionError::Arithmetic`] on overflow.
pub fn preview_deposit(
    raw_amount: &str,
    quote: &VaultQuote,
    available_balance: Amount,
) -> Result<ConversionResult, ConversionError> {
    if quote.price_per_share.is_zero() {
        return Err(ConversionError::ZeroSharePrice);
    }

    let Some(amount) = normalize_input(raw_amount) else {
        return Ok(ConversionResult::neutral());
    };

    let shares = amount.div_rounded(quote.price_per_share, SHARE_PRECISION)?;

    // Floor check first; the two violations are mutually exclusive.
    let status = if amount < quote.minimum_deposit {
        ConversionStatus::Rejected {
            violation: ConversionViolation::BelowMinimum {
                minimum: quote.minimum_deposit,
            },
        }
    } else if amount > available_balance {
        ConversionStatus::Rejected {
            violation: ConversionViolation::InsufficientBalance {
                available: available_balance,
            },
        }
    } else {
        ConversionStatus::Valid
    };

    Ok(ConversionResult {
        normalized_amount: amount,
        converted_amount: shares,
        status,
    })
}

/// Preview redeeming `raw_shares` shares for asset units.
///
/// There is no minimum-withdraw floor unless `minimum_withdraw` is given.
/// A zero share price is refused here too: multiplying by a corrupt quote
/// would fabricate a zero-value preview instead of failing loudly.
pub fn preview_withdraw(
    raw_shares: &str,
    quote: &VaultQuote,
    available_shares: Amount,
    minimum_withdraw: Option<Amount>,
) -> Result<ConversionResult, ConversionError> {
    if quote.price_per_share.is_zero() {
        return Err(ConversionError::ZeroSharePrice);
    }

    let Some(shares) = normalize_input(raw_shares) else {
        return Ok(ConversionResult::neutral());
    };

    let assets = shares.mul_rounded(quote.price_per_share, SHARE_PRECISION)?;

    let floor = minimum_withdraw.filter(|minimum| shares < *minimum);
    let status = if let Some(minimum) = floor {
        ConversionStatus::Rejected {
            violation: ConversionViolation::BelowMinimum { minimum },
        }
    } else if shares > available_shares {
        ConversionStatus::Rejected {
            violation: ConversionViolation::InsufficientBalance {
                available: available_shares,
            },
        }
    } else {
        ConversionStatus::Valid
    };

    Ok(ConversionResult {
        normalized_amount: shares,
        converted_amount: assets,
        status,
    })
}

/// The largest amount a MAX button may offer: balance minus the reserve held
/// back for transaction cost, floored to display precision so the offer is
/// never optimistic.
pub fn max_deposit_amount(balance: Amount, reserve: Amount) -> Amount {
    balance.saturating_sub(reserve).floor_dp(DISPLAY_PRECISION)
}

/// Empty, zero, negative, or unparseable input is the neutral keystroke
/// state, not an error.
fn normalize_input(raw: &str) -> Option<Amount> {
    match Amount::parse(raw) {
        Ok(amount) if !amount.is_zero() => Some(amount),
        _ => None,
    }
}
