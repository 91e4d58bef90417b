//! Domain models for the tariff adjustment service.

pub mod account;
pub mod adjustment;
pub mod fee;
pub mod report;

pub use account::{Account, AccountId};
pub use adjustment::{TariffAdjustmentRequest, TransactionId};
pub use fee::Fee;
pub use report::{Report, TOP_BY_FEE_LIMIT};
