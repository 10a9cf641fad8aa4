use thiserror::Error;

use yieldvault_core::CoreError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] yieldvault_core::ValidationError),

    #[error(transparent)]
    Conversion(#[from] yieldvault_core::ConversionError),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Conversion(_) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(inner) => Self::Validation(inner),
            CoreError::Conversion(inner) => Self::Conversion(inner),
            CoreError::Serialization(inner) => Self::Serialization(inner),
            CoreError::Io(inner) => Self::Io(inner),
        }
    }
}
