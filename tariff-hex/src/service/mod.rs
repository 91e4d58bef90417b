//! Application services (use cases).
//!
//! Orchestrate domain operations through the port traits.
//! Contain NO HTTP or serialisation logic - pure orchestration.

mod accounts;
mod report;
mod search;

pub use accounts::{AccountService, NOTIFICATIONS_PATH, notification_callback_url};
pub use report::ReportService;
pub use search::SearchService;
