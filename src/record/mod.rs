//! Record decoder for HURDAT2 track lines
//!
//! HURDAT2 files interleave two kinds of fixed-width lines: a storm header
//! (basin, sequence number, year, name, observation count) followed by that
//! storm's six-hourly observation lines. There is no footer record; a storm
//! ends where the next header begins.
//!
//! ## Architecture
//!
//! - [`layout`] - Named field table (start column, width, transform)
//! - [`field_parsers`] - Single decoder dispatching on each field's transform
//! - [`parser`] - Line classification and typed field accessors
//!
//! ## Usage
//!
//! ```rust
//! use hurdat_reader::record::{is_header_line, parse_header, parse_longitude};
//!
//! let header = "AL122005,            KATRINA,     34,";
//! assert!(is_header_line(header)?);
//! let storm = parse_header(header)?;
//! assert_eq!(storm.storm_id, 200512);
//! assert_eq!(storm.trimmed_name(), "KATRINA");
//!
//! let fix = "20050829, 1110, L, HU, 29.3N,  89.6W, 110,  920,";
//! assert_eq!(parse_longitude(fix)?, -89.6);
//! # Ok::<(), hurdat_reader::HurdatError>(())
//! ```

pub mod field_parsers;
pub mod layout;
pub mod parser;

#[cfg(test)]
mod tests;

pub use crate::constants::HAS_FOOTER_RECORD;
pub use parser::{
    classify_line, detects_landfall, is_header_line, parse_category, parse_date, parse_header,
    parse_latitude, parse_latitude_hemisphere, parse_longitude, parse_longitude_hemisphere,
    parse_observation, parse_pressure, parse_stage, parse_wind, storm_id,
};
