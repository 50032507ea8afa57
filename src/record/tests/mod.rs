//! Test fixtures for the record decoder
//!
//! Lines are taken from (or shaped like) the public HURDAT2 Atlantic and
//! Northeast Pacific files.

mod header_tests;

pub const KATRINA_HEADER: &str = "AL122005,            KATRINA,     34,";
pub const UNNAMED_PACIFIC_HEADER: &str = "EP011949,            UNNAMED,      7,";

/// Formation fix, no landfall, full pressure reading
pub const KATRINA_FORMATION: &str =
    "20050823, 1800,  , TD, 23.1N,  75.1W,  30, 1008,    0,    0,    0,    0,";
/// Florida landfall
pub const KATRINA_FLORIDA_LANDFALL: &str = "20050825, 2230, L, HU, 26.0N,  80.1W,  70,  984,";
/// Louisiana landfall
pub const KATRINA_LOUISIANA_LANDFALL: &str = "20050829, 1110, L, HU, 29.3N,  89.6W, 110,  920,";
/// Eastern-hemisphere position with missing pressure
pub const EASTERN_MISSING_PRESSURE: &str = "19571002, 0600,  , TS, 16.5N, 120.0E,  45,    0,";
/// Stage code outside the known table
pub const UNKNOWN_STAGE: &str = "20050831, 0600,  , XX, 40.1N,  82.9W,  25,  996,";

/// Replace the characters of `line` starting at `start`
pub fn splice(line: &str, start: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len());
    out.push_str(&line[..start]);
    out.push_str(replacement);
    out.push_str(&line[start + replacement.len()..]);
    out
}
