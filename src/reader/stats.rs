//! Reading statistics for a streamed HURDAT2 source

use serde::{Deserialize, Serialize};

/// Counters collected while a [`super::TrackReader`] walks its line source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadStats {
    /// Physical lines pulled from the source
    pub lines_read: usize,

    /// Empty or whitespace-only lines
    pub blank_lines: usize,

    /// Storm headers decoded, filtered or not
    pub storms_seen: usize,

    /// Observation lines decoded for storms that passed the filters
    pub observations_parsed: usize,

    /// Records handed to the caller after filtering
    pub records_emitted: usize,

    /// Lines dropped because they failed to decode
    pub lines_skipped: usize,

    /// Storms whose observation lines disagreed with the header count
    pub count_mismatches: usize,

    /// Messages for every skipped line
    pub errors: Vec<String>,
}

impl ReadStats {
    /// Lines that carried a record (blank lines excluded)
    pub fn record_lines(&self) -> usize {
        self.lines_read - self.blank_lines
    }

    /// Percentage of record lines that decoded
    pub fn success_rate(&self) -> f64 {
        let total = self.record_lines();
        if total == 0 {
            0.0
        } else {
            ((total - self.lines_skipped) as f64 / total as f64) * 100.0
        }
    }

    /// Whether every record line decoded and every storm had its declared length
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0 && self.count_mismatches == 0
    }
}
