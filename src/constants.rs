//! Format constants for HURDAT2 track files
//!
//! This module contains the literal markers, sentinels and classification
//! thresholds used throughout the decoder.

// =============================================================================
// Record Markers
// =============================================================================

/// Basin codes that open a storm header line
pub const BASIN_CODES: &[&str] = &["AL", "EP", "CP"];

/// HURDAT2 has no footer record; storms end where the next header begins
pub const HAS_FOOTER_RECORD: bool = false;

/// Record identifier marking a landfall observation
pub const LANDFALL_MARKER: char = 'L';

// =============================================================================
// Sentinels
// =============================================================================

/// Raw pressure field used by the data set for "not measured"
pub const MISSING_PRESSURE_FIELD: &str = "   0";

/// Decoded value reported for a missing pressure
pub const MISSING_PRESSURE: i32 = -999;

/// Latitude magnitude never exceeds the pole
pub const MAX_LATITUDE: f64 = 90.0;

/// Full circle used to fold eastern longitudes
pub const DEGREES_IN_CIRCLE: f64 = 360.0;

// =============================================================================
// Saffir-Simpson Thresholds (knots, inclusive lower bounds)
// =============================================================================

pub mod saffir_simpson {
    pub const TROPICAL_STORM: i32 = 34;
    pub const CATEGORY_1: i32 = 64;
    pub const CATEGORY_2: i32 = 83;
    pub const CATEGORY_3: i32 = 96;
    pub const CATEGORY_4: i32 = 113;
    pub const CATEGORY_5: i32 = 137;
}

// =============================================================================
// Reader Configuration Defaults
// =============================================================================

/// Earliest season accepted by the year filter (the archive starts in 1851)
pub const MIN_FILTER_YEAR: i32 = 1800;

/// Latest season accepted by the year filter
pub const MAX_FILTER_YEAR: i32 = 2100;
