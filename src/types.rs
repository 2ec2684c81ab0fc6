//! Core data types for driver records.

use chrono::{Duration, NaiveDateTime};

/// A single driver joined from the roster and both lap logs
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    /// 3-character identifier, the join key across all input files
    pub abbreviation: String,
    /// Full driver name
    pub name: String,
    /// Team or company the driver races for
    pub company: String,
    /// Recorded lap start time
    pub start_time: NaiveDateTime,
    /// Recorded lap end time
    pub end_time: NaiveDateTime,
}

impl Driver {
    /// Signed lap duration; negative when the recorded end precedes the start
    pub fn elapsed(&self) -> Duration {
        self.end_time - self.start_time
    }
}
