//! Mock analytics shown on the government dashboard.

pub mod data;
mod report;

pub use data::{FlaggedComment, MinistryScore, SentimentSlice, Severity, TrendPoint};
pub use report::{REPORT_FILE_NAME, Report};
