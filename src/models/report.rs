//! Run report model
//!
//! Summary of one conversion pass, returned to the caller instead of printed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::config::{Direction, Mode};

/// Outcome of a completed conversion pass.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub direction: Direction,
    /// Number of lines written
    pub lines: u64,
    /// Wall-clock start of the pass
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the pass
    pub elapsed_secs: f64,
    /// Present only for cached modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStats>,
}

impl RunReport {
    /// One-line summary, e.g. `Cached conversion took 0.42 seconds`.
    pub fn summary(&self) -> String {
        format!("{} took {:.2} seconds", self.mode.label(), self.elapsed_secs)
    }
}
