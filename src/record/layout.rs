//! Column layout of HURDAT2 header and observation lines
//!
//! Every field the decoder reads is listed here once, with its 0-indexed
//! start column, width and the transform applied to the raw slice. The
//! accessors in [`super::parser`] only ever name a [`Field`]; they never
//! carry offsets of their own.

/// How the raw characters of a field become a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Raw text, returned as-is
    Text,
    /// Single marker character
    Flag,
    /// Whitespace-padded integer
    Integer,
    /// Digits with an implied decimal point before the tenths digit
    ImpliedDecimal {
        /// Leading characters holding the whole degrees
        whole_digits: usize,
        /// Offset of the tenths digit within the field
        tenths_at: usize,
    },
}

/// A named fixed-width field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub start: usize,
    pub width: usize,
    pub transform: Transform,
}

impl Field {
    pub const fn new(name: &'static str, start: usize, width: usize, transform: Transform) -> Self {
        Self {
            name,
            start,
            width,
            transform,
        }
    }

    /// Exclusive end column
    pub const fn end(&self) -> usize {
        self.start + self.width
    }
}

// =============================================================================
// Header Fields
// =============================================================================

pub const BASIN: Field = Field::new("basin", 0, 2, Transform::Text);
pub const SEQUENCE_NUMBER: Field = Field::new("sequence_number", 2, 2, Transform::Integer);
pub const YEAR: Field = Field::new("year", 4, 4, Transform::Integer);
pub const NAME: Field = Field::new("name", 18, 10, Transform::Text);
pub const OBSERVATION_COUNT: Field = Field::new("observation_count", 33, 3, Transform::Integer);

// =============================================================================
// Date Fields (shared by both record kinds)
// =============================================================================

pub const MONTH: Field = Field::new("month", 4, 2, Transform::Integer);
pub const DAY: Field = Field::new("day", 6, 2, Transform::Integer);
pub const HOUR: Field = Field::new("hour", 10, 2, Transform::Integer);

// =============================================================================
// Observation Fields
// =============================================================================

pub const OBSERVATION_YEAR: Field = Field::new("year", 0, 4, Transform::Integer);
pub const LANDFALL: Field = Field::new("landfall", 16, 1, Transform::Flag);
pub const STAGE: Field = Field::new("stage", 19, 2, Transform::Text);
pub const LATITUDE: Field = Field::new(
    "latitude",
    23,
    4,
    Transform::ImpliedDecimal {
        whole_digits: 2,
        tenths_at: 3,
    },
);
pub const LATITUDE_HEMISPHERE: Field = Field::new("latitude_hemisphere", 27, 1, Transform::Flag);
pub const LONGITUDE: Field = Field::new(
    "longitude",
    30,
    5,
    Transform::ImpliedDecimal {
        whole_digits: 3,
        tenths_at: 4,
    },
);
pub const LONGITUDE_HEMISPHERE: Field =
    Field::new("longitude_hemisphere", 35, 1, Transform::Flag);
pub const WIND: Field = Field::new("wind", 38, 3, Transform::Integer);
pub const PRESSURE: Field = Field::new("pressure", 43, 4, Transform::Integer);
