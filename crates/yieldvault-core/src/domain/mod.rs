mod address;
mod amount;
mod quote;
mod stats;
mod timestamp;

pub use address::AccountAddress;
pub use amount::{Amount, AMOUNT_DECIMALS};
pub use quote::VaultQuote;
pub use stats::VaultStats;
pub use timestamp::UtcDateTime;
