use serde::{Deserialize, Serialize};

use crate::{Amount, ValidationError};

/// Immutable vault pricing snapshot used for a single preview computation.
///
/// The quote provider is expected to deliver a positive `price_per_share`;
/// the constructor enforces it. Quotes that bypass the constructor (e.g.
/// deserialized from an upstream payload) are re-checked at the conversion
/// site, which refuses to divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultQuote {
    /// Underlying asset units per share.
    pub price_per_share: Amount,
    /// Policy floor for deposits.
    pub minimum_deposit: Amount,
    /// Advertised yield, in percent. Display value only; never used in
    /// conversion arithmetic.
    pub estimated_apy: Amount,
}

impl VaultQuote {
    pub fn new(
        price_per_share: Amount,
        minimum_deposit: Amount,
        estimated_apy: Amount,
    ) -> Result<Self, ValidationError> {
        if price_per_share.is_zero() {
            return Err(ValidationError::NonPositiveSharePrice);
        }

        Ok(Self {
            price_per_share,
            minimum_deposit,
            estimated_apy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_quote_with_positive_price() {
        let quote = VaultQuote::new(
            Amount::parse("1.0543").expect("price"),
            Amount::parse("0.001").expect("minimum"),
            Amount::parse("5.00").expect("apy"),
        )
        .expect("quote should be valid");

        assert_eq!(quote.price_per_share.to_string(), "1.0543");
    }

    #[test]
    fn rejects_zero_share_price() {
        let err = VaultQuote::new(Amount::ZERO, Amount::ZERO, Amount::ZERO)
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositiveSharePrice));
    }
}
