//! Configuration management and validation.
//!
//! Provides the settings that control how a [`crate::reader::TrackReader`]
//! treats malformed lines and which storms it reports.

use crate::constants::{MAX_FILTER_YEAR, MIN_FILTER_YEAR};
use crate::error::{HurdatError, Result};
use crate::models::{Basin, StormHeader};
use serde::{Deserialize, Serialize};

/// Settings for streaming a HURDAT2 file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Log and skip lines that fail to decode instead of stopping
    pub skip_malformed: bool,

    /// Only report storms from this season
    pub year: Option<i32>,

    /// Only report storms from this basin
    pub basin: Option<Basin>,

    /// Only report storms whose trimmed name matches (case-insensitive)
    pub storm_name: Option<String>,
}

impl ReaderConfig {
    /// Enable skipping of malformed lines
    pub fn with_skip_malformed(mut self) -> Self {
        self.skip_malformed = true;
        self
    }

    /// Restrict output to one season
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Restrict output to one basin
    pub fn with_basin(mut self, basin: Basin) -> Self {
        self.basin = Some(basin);
        self
    }

    /// Restrict output to storms with the given name
    pub fn with_storm_name(mut self, name: impl Into<String>) -> Self {
        self.storm_name = Some(name.into());
        self
    }

    /// Check that the filters can match anything at all
    pub fn validate(&self) -> Result<()> {
        if let Some(year) = self.year {
            if !(MIN_FILTER_YEAR..=MAX_FILTER_YEAR).contains(&year) {
                return Err(HurdatError::configuration(format!(
                    "Year filter {} outside supported range {}-{}",
                    year, MIN_FILTER_YEAR, MAX_FILTER_YEAR
                )));
            }
        }

        if let Some(name) = &self.storm_name {
            if name.trim().is_empty() {
                return Err(HurdatError::configuration("Storm name filter is empty"));
            }
        }

        Ok(())
    }

    /// Whether records of this storm should be reported
    pub fn accepts(&self, storm: &StormHeader) -> bool {
        self.year.is_none_or(|year| storm.year == year)
            && self.basin.is_none_or(|basin| storm.basin == basin)
            && self
                .storm_name
                .as_deref()
                .is_none_or(|name| storm.trimmed_name().eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storm(basin: Basin, year: i32, name: &str) -> StormHeader {
        StormHeader {
            basin,
            sequence_number: 1,
            year,
            storm_id: crate::record::storm_id(year, 1),
            name: format!("{:>10}", name),
            observation_count: 1,
        }
    }

    #[test]
    fn test_default_accepts_everything() {
        let config = ReaderConfig::default();
        assert!(!config.skip_malformed);
        assert!(config.validate().is_ok());
        assert!(config.accepts(&storm(Basin::CentralPacific, 1851, "UNNAMED")));
    }

    #[test]
    fn test_filters_combine() {
        let config = ReaderConfig::default()
            .with_year(2005)
            .with_basin(Basin::Atlantic)
            .with_storm_name("katrina");

        assert!(config.accepts(&storm(Basin::Atlantic, 2005, "KATRINA")));
        assert!(!config.accepts(&storm(Basin::Atlantic, 2005, "RITA")));
        assert!(!config.accepts(&storm(Basin::Atlantic, 1981, "KATRINA")));
        assert!(!config.accepts(&storm(Basin::EastPacific, 2005, "KATRINA")));
    }

    #[test]
    fn test_validate_rejects_bad_filters() {
        assert!(ReaderConfig::default().with_year(1492).validate().is_err());
        assert!(ReaderConfig::default().with_year(2005).validate().is_ok());
        assert!(matches!(
            ReaderConfig::default().with_storm_name("  ").validate(),
            Err(HurdatError::Configuration { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip_uses_basin_codes() {
        let config = ReaderConfig::default().with_basin(Basin::EastPacific);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"EP\""));
        let parsed: ReaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
