use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const ADDRESS_HEX_LEN: usize = 40;

/// Normalized account address: `0x` followed by 40 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parse and normalize an address to lowercase hex.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }

        let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        else {
            return Err(ValidationError::AddressMissingHexPrefix {
                value: trimmed.to_owned(),
            });
        };

        if hex.len() != ADDRESS_HEX_LEN {
            return Err(ValidationError::AddressInvalidLength { len: hex.len() });
        }

        for (index, ch) in hex.chars().enumerate() {
            if !ch.is_ascii_hexdigit() {
                return Err(ValidationError::AddressInvalidChar { ch, index });
            }
        }

        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened display form used next to "Connected:" labels,
    /// e.g. `0x1234...7890`.
    pub fn short(&self) -> String {
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountAddress {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for AccountAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AccountAddress> for String {
    fn from(value: AccountAddress) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_address() {
        let parsed = AccountAddress::parse(" 0xABCDEF1234567890abcdef1234567890ABCDEF12 ")
            .expect("address should parse");
        assert_eq!(parsed.as_str(), "0xabcdef1234567890abcdef1234567890abcdef12");
    }

    #[test]
    fn shortens_for_display() {
        let parsed = AccountAddress::parse("0x1234567890123456789012345678901234567890")
            .expect("address should parse");
        assert_eq!(parsed.short(), "0x1234...7890");
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = AccountAddress::parse("1234567890123456789012345678901234567890")
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::AddressMissingHexPrefix { .. }));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = AccountAddress::parse("0x1234").expect_err("must fail");
        assert!(matches!(err, ValidationError::AddressInvalidLength { len: 4 }));
    }

    #[test]
    fn rejects_non_hex_characters() {
        let err = AccountAddress::parse("0x12345678901234567890123456789012345678zz")
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::AddressInvalidChar { ch: 'z', index: 38 }));
    }
}
