//! Collaborators outside the browser: the feedback service and its analysis feed.

mod feedback;
mod socket;
mod stream;

pub use feedback::{FeedbackClient, parse_reply};
pub use socket::AnalysisSocket;
pub use stream::{ANALYSIS_UPDATE, AnalysisUpdate, RawTrendPoint, StreamAction, handle_frame};
