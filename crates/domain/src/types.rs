//! Common data types used throughout the application

pub mod credential;
pub mod plan;
pub mod submission;
pub mod timesheet;

pub use credential::Credential;
pub use plan::Plan;
pub use submission::{SkipReason, SkippedItem, SubmissionOutcome, SubmissionReport};
pub use timesheet::{Intent, Log, TimelineItem, Timesheet, TimesheetMeta};
