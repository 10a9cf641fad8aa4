use thiserror::Error;

/// Validation and contract errors exposed by `yieldvault-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount cannot be empty")]
    EmptyAmount,
    #[error("amount is not a decimal number: '{value}'")]
    AmountNotANumber { value: String },
    #[error("amount cannot be negative: '{value}'")]
    AmountNegative { value: String },
    #[error("amount '{value}' has more than {max} fractional digits")]
    AmountPrecisionExceeded { value: String, max: u32 },
    #[error("amount '{value}' exceeds the representable range")]
    AmountOutOfRange { value: String },

    #[error("account address cannot be empty")]
    EmptyAddress,
    #[error("account address must start with '0x': '{value}'")]
    AddressMissingHexPrefix { value: String },
    #[error("account address must be 40 hex digits, got {len}")]
    AddressInvalidLength { len: usize },
    #[error("account address contains invalid character '{ch}' at index {index}")]
    AddressInvalidChar { ch: char, index: usize },

    #[error("invalid direction '{value}', expected 'deposit' or 'withdraw'")]
    InvalidDirection { value: String },

    #[error("price per share must be positive")]
    NonPositiveSharePrice,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Failures of checked amount arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("amount arithmetic overflowed")]
    Overflow,
    #[error("division by a zero amount")]
    DivisionByZero,
}

/// Non-recoverable conditions reported by the share conversion calculator.
///
/// Per-amount policy violations (below minimum, insufficient balance) are not
/// errors: they travel inside [`ConversionResult`](crate::ConversionResult)
/// so the caller can keep rendering on every keystroke. This enum is reserved
/// for upstream contract violations that invalidate the preview itself.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The quote carried a zero price per share; converting would divide by
    /// zero (or silently fabricate a zero-value preview on the inverse path).
    #[error("price per share is zero, refusing to convert")]
    ZeroSharePrice,

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
