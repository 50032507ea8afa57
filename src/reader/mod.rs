//! Streaming driver over a HURDAT2 line source
//!
//! [`TrackReader`] pulls raw lines from any [`BufRead`], decodes each one with
//! the [`crate::record`] accessors and remembers the most recent storm header so
//! every observation is reported together with the storm it belongs to. The
//! reader never opens files itself; the caller hands it a source.
//!
//! A line that is not valid UTF-8 is a per-line error like any other bad
//! field, so `skip_malformed` steps over it. Only a failing source ends the
//! stream early.
//!
//! ```rust
//! use hurdat_reader::reader::{TrackReader, TrackRecord};
//! use hurdat_reader::ReaderConfig;
//!
//! let data = "\
//! AL122005,            KATRINA,      1,
//! 20050829, 1110, L, HU, 29.3N,  89.6W, 110,  920,
//! ";
//! let reader = TrackReader::new(data.as_bytes(), ReaderConfig::default())?;
//! for record in reader {
//!     if let TrackRecord::Observation { storm, observation } = record? {
//!         assert_eq!(storm.trimmed_name(), "KATRINA");
//!         assert_eq!(observation.wind, 110);
//!     }
//! }
//! # Ok::<(), hurdat_reader::HurdatError>(())
//! ```

pub mod stats;

pub use stats::ReadStats;

use crate::config::ReaderConfig;
use crate::error::{HurdatError, Result};
use crate::models::{Observation, StormHeader};
use crate::record::{is_header_line, parse_header, parse_observation};
use std::io::BufRead;
use tracing::{debug, warn};

/// One decoded line, with observations carrying their storm
#[derive(Debug, Clone, PartialEq)]
pub enum TrackRecord {
    Header(StormHeader),
    Observation {
        storm: StormHeader,
        observation: Observation,
    },
}

/// Storm whose observation lines are currently being read
#[derive(Debug)]
struct CurrentStorm {
    header: StormHeader,
    lines_seen: u32,
    accepted: bool,
}

/// Iterator of decoded records over a line source
pub struct TrackReader<R> {
    source: R,
    buffer: Vec<u8>,
    config: ReaderConfig,
    current: Option<CurrentStorm>,
    line_number: usize,
    stats: ReadStats,
    finished: bool,
}

impl<R: BufRead> TrackReader<R> {
    /// Create a reader after validating its configuration
    pub fn new(source: R, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            buffer: Vec::new(),
            config,
            current: None,
            line_number: 0,
            stats: ReadStats::default(),
            finished: false,
        })
    }

    /// Statistics gathered so far
    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }

    /// Consume the reader and return its final statistics
    pub fn into_stats(self) -> ReadStats {
        self.stats
    }

    /// 1-based number of the last line read
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Decode one raw line, terminator included
    fn decode_bytes(&mut self, bytes: &[u8]) -> Result<Option<TrackRecord>> {
        let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

        let line = match std::str::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                // Still one of the open storm's lines
                if let Some(storm) = self.current.as_mut() {
                    storm.lines_seen += 1;
                    if !storm.accepted {
                        return Ok(None);
                    }
                }
                return Err(HurdatError::InvalidEncoding {
                    reason: e.to_string(),
                    line: String::from_utf8_lossy(bytes).into_owned(),
                });
            }
        };

        if line.trim().is_empty() {
            self.stats.blank_lines += 1;
            return Ok(None);
        }
        self.decode_line(line)
    }

    fn decode_line(&mut self, line: &str) -> Result<Option<TrackRecord>> {
        if is_header_line(line)? {
            self.finish_storm();
            let header = parse_header(line)?;
            self.stats.storms_seen += 1;

            let accepted = self.config.accepts(&header);
            debug!(
                "Storm {} ({}) declares {} observations{}",
                header.storm_id,
                header.trimmed_name(),
                header.observation_count,
                if accepted { "" } else { ", filtered out" }
            );

            self.current = Some(CurrentStorm {
                header: header.clone(),
                lines_seen: 0,
                accepted,
            });
            return Ok(accepted.then_some(TrackRecord::Header(header)));
        }

        let storm = self
            .current
            .as_mut()
            .ok_or_else(|| HurdatError::OrphanObservation {
                line: line.to_string(),
            })?;
        storm.lines_seen += 1;
        if !storm.accepted {
            return Ok(None);
        }

        let observation = parse_observation(line)?;
        self.stats.observations_parsed += 1;

        Ok(Some(TrackRecord::Observation {
            storm: storm.header.clone(),
            observation,
        }))
    }

    /// Close the current storm and check its declared length
    fn finish_storm(&mut self) {
        let Some(storm) = self.current.take() else {
            return;
        };

        if storm.lines_seen != storm.header.observation_count {
            warn!(
                "Storm {} ({}) declared {} observations but {} followed",
                storm.header.storm_id,
                storm.header.trimmed_name(),
                storm.header.observation_count,
                storm.lines_seen
            );
            self.stats.count_mismatches += 1;
        }
    }
}

impl<R: BufRead> Iterator for TrackReader<R> {
    type Item = Result<TrackRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.source.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    self.finish_storm();
                    self.finished = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.finish_storm();
                    self.finished = true;
                    return Some(Err(HurdatError::Io(e)));
                }
            }

            self.line_number += 1;
            self.stats.lines_read += 1;

            let bytes = std::mem::take(&mut self.buffer);
            let decoded = self.decode_bytes(&bytes);
            self.buffer = bytes;

            match decoded {
                Ok(Some(record)) => {
                    self.stats.records_emitted += 1;
                    return Some(Ok(record));
                }
                Ok(None) => continue,
                Err(e) => {
                    let e = e.at_line(self.line_number);
                    if self.config.skip_malformed && e.is_recoverable() {
                        warn!("Skipping malformed record: {}", e);
                        self.stats.lines_skipped += 1;
                        self.stats.errors.push(e.to_string());
                        continue;
                    }
                    return Some(Err(e));
                }
            }
        }
    }
}
