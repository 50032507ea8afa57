//! Core data structures for HURDAT2 decoding.
//!
//! Defines basin, stage and category enumerations and the transient views
//! produced from header and observation lines.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ocean basins that open a storm header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basin {
    /// North Atlantic
    #[serde(rename = "AL")]
    Atlantic,
    /// Northeast Pacific
    #[serde(rename = "EP")]
    EastPacific,
    /// North Central Pacific
    #[serde(rename = "CP")]
    CentralPacific,
}

impl Basin {
    /// Detect basin from its two-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AL" => Some(Basin::Atlantic),
            "EP" => Some(Basin::EastPacific),
            "CP" => Some(Basin::CentralPacific),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Basin::Atlantic => "AL",
            Basin::EastPacific => "EP",
            Basin::CentralPacific => "CP",
        }
    }
}

impl fmt::Display for Basin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Basin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Basin::from_code(&s.to_ascii_uppercase())
            .ok_or_else(|| format!("Unknown basin '{}'. Valid basins: AL, EP, CP", s))
    }
}

/// Landfall marker on an observation line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landfall {
    Landfall,
    None,
}

impl Landfall {
    pub fn is_landfall(&self) -> bool {
        matches!(self, Landfall::Landfall)
    }
}

/// Development stage of a storm at one observation
///
/// Several raw codes collapse onto one stage: `HU`, `TY` and `ST` all read as
/// [`Stage::Hurricane`], `EX` and `ET` as [`Stage::Extratropical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    TropicalDepression,
    TropicalStorm,
    Hurricane,
    Extratropical,
    SubtropicalDepression,
    SubtropicalStorm,
    TropicalWave,
    RemnantLow,
    Disturbance,
    PostTropical,
}

impl Stage {
    /// Look up a raw two-character stage code
    pub fn from_code(code: &str) -> Option<Self> {
        let stage = match code {
            "TD" => Stage::TropicalDepression,
            "TS" => Stage::TropicalStorm,
            "HU" | "TY" | "ST" => Stage::Hurricane,
            "EX" | "ET" => Stage::Extratropical,
            "SD" => Stage::SubtropicalDepression,
            "SS" => Stage::SubtropicalStorm,
            "WV" => Stage::TropicalWave,
            "LO" => Stage::RemnantLow,
            "DB" => Stage::Disturbance,
            "PT" => Stage::PostTropical,
            _ => return None,
        };
        Some(stage)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Stage::TropicalDepression => "Tropical Depression",
            Stage::TropicalStorm => "Tropical Storm",
            Stage::Hurricane => "Hurricane",
            Stage::Extratropical => "Extratropical Cyclone",
            Stage::SubtropicalDepression => "Subtropical Depression",
            Stage::SubtropicalStorm => "Subtropical Storm",
            Stage::TropicalWave => "Tropical Wave",
            Stage::RemnantLow => "Remnant Low",
            Stage::Disturbance => "Disturbance",
            Stage::PostTropical => "Post-Tropical",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wind-derived intensity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Wind not recorded
    Unknown,
    TropicalDepression,
    TropicalStorm,
    Category1,
    Category2,
    Category3,
    Category4,
    Category5,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Unknown => "Unknown",
            Category::TropicalDepression => "Tropical Depression",
            Category::TropicalStorm => "Tropical Storm",
            Category::Category1 => "Category 1",
            Category::Category2 => "Category 2",
            Category::Category3 => "Category 3",
            Category::Category4 => "Category 4",
            Category::Category5 => "Category 5",
        }
    }

    /// Whether the category is hurricane strength on the Saffir-Simpson scale
    pub fn is_hurricane(&self) -> bool {
        *self >= Category::Category1
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hemisphere letter following a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }
}

/// Which of the two record kinds a line holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Header,
    Observation,
}

/// Storm identity decoded from a header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StormHeader {
    pub basin: Basin,
    pub sequence_number: u32,
    pub year: i32,
    /// `year` followed by the zero-padded sequence number, e.g. 200512
    pub storm_id: i64,
    /// Raw fixed-width name field, padding included
    pub name: String,
    pub observation_count: u32,
}

impl StormHeader {
    /// Name without the fixed-width padding
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

/// Date and hour of a six-hourly fix
///
/// The year comes from the observation line itself, not the storm header, so
/// storms that run past December 31st keep the right calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl ObservationTime {
    /// Calendar timestamp; `None` for impossible dates
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_opt(self.hour, 0, 0)
    }
}

/// One six-hourly positional and intensity fix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub time: ObservationTime,
    pub landfall: Landfall,
    pub stage: Stage,
    pub latitude: f64,
    pub longitude: f64,
    /// Maximum sustained wind in knots
    pub wind: i32,
    /// Minimum central pressure in millibars, -999 when missing
    pub pressure: i32,
}

impl Observation {
    /// Timestamp of the fix
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.time.to_datetime()
    }

    pub fn has_pressure(&self) -> bool {
        self.pressure != crate::constants::MISSING_PRESSURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basin_codes() {
        assert_eq!(Basin::from_code("AL"), Some(Basin::Atlantic));
        assert_eq!(Basin::from_code("EP"), Some(Basin::EastPacific));
        assert_eq!(Basin::from_code("CP"), Some(Basin::CentralPacific));
        assert_eq!(Basin::from_code("WP"), None);
        assert_eq!("ep".parse::<Basin>().unwrap(), Basin::EastPacific);
        assert!("XX".parse::<Basin>().is_err());
        assert_eq!(Basin::CentralPacific.to_string(), "CP");
    }

    #[test]
    fn test_stage_aliases() {
        assert_eq!(Stage::from_code("TY"), Some(Stage::Hurricane));
        assert_eq!(Stage::from_code("ST"), Some(Stage::Hurricane));
        assert_eq!(Stage::from_code("ET"), Some(Stage::Extratropical));
        assert_eq!(Stage::from_code("td"), None);
        assert_eq!(Stage::PostTropical.label(), "Post-Tropical");
    }

    #[test]
    fn test_category_ordering() {
        assert!(Category::Category3.is_hurricane());
        assert!(!Category::TropicalStorm.is_hurricane());
        assert!(!Category::Unknown.is_hurricane());
        assert_eq!(Category::Category1.to_string(), "Category 1");
    }

    #[test]
    fn test_observation_time_to_datetime() {
        let time = ObservationTime {
            year: 2005,
            month: 8,
            day: 29,
            hour: 12,
        };
        let timestamp = time.to_datetime().unwrap();
        assert_eq!(timestamp.to_string(), "2005-08-29 12:00:00");

        let invalid = ObservationTime {
            year: 2005,
            month: 2,
            day: 30,
            hour: 0,
        };
        assert_eq!(invalid.to_datetime(), None);
    }

    #[test]
    fn test_trimmed_name() {
        let header = StormHeader {
            basin: Basin::Atlantic,
            sequence_number: 12,
            year: 2005,
            storm_id: 200512,
            name: "   KATRINA".to_string(),
            observation_count: 34,
        };
        assert_eq!(header.trimmed_name(), "KATRINA");
    }
}
