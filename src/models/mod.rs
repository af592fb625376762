//! Data models for the converter
//!
//! Plain values passed between the pipeline and the command line boundary.

pub mod record;
pub mod report;

// Re-export commonly used types
pub use record::Record;
pub use report::RunReport;
