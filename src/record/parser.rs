//! Line classification and typed field accessors
//!
//! Every function here is a pure function of one line. Nothing is cached
//! between calls, and the caller tracks which storm an observation belongs to.

use super::field_parsers::{
    extract, malformed, parse_flag, parse_implied_decimal, parse_integer, parse_text,
};
use super::layout;
use crate::classifier::WindClassifier;
use crate::constants::{
    BASIN_CODES, DEGREES_IN_CIRCLE, LANDFALL_MARKER, MAX_LATITUDE, MISSING_PRESSURE,
    MISSING_PRESSURE_FIELD,
};
use crate::error::{HurdatError, Result};
use crate::models::{
    Basin, Category, Hemisphere, Landfall, Observation, ObservationTime, RecordKind, Stage,
    StormHeader,
};

/// Returns true if the line opens a storm header
pub fn is_header_line(line: &str) -> Result<bool> {
    let code = parse_text(line, &layout::BASIN)?;
    Ok(BASIN_CODES.contains(&code))
}

/// Classify a line as header or observation
pub fn classify_line(line: &str) -> Result<RecordKind> {
    if is_header_line(line)? {
        Ok(RecordKind::Header)
    } else {
        Ok(RecordKind::Observation)
    }
}

/// Read the landfall marker column
pub fn detects_landfall(line: &str) -> Result<Landfall> {
    if parse_flag(line, &layout::LANDFALL)? == LANDFALL_MARKER {
        Ok(Landfall::Landfall)
    } else {
        Ok(Landfall::None)
    }
}

/// Decode a storm header line
pub fn parse_header(line: &str) -> Result<StormHeader> {
    if !is_header_line(line)? {
        return Err(HurdatError::PreconditionViolation {
            operation: "parse_header",
            line: line.to_string(),
        });
    }

    let code = parse_text(line, &layout::BASIN)?;
    let basin = Basin::from_code(code)
        .ok_or_else(|| malformed(line, &layout::BASIN, code, "unknown basin code"))?;
    let sequence_number: u32 = parse_integer(line, &layout::SEQUENCE_NUMBER)?;
    let year: i32 = parse_integer(line, &layout::YEAR)?;
    let name = parse_text(line, &layout::NAME)?.to_string();
    let observation_count: u32 = parse_integer(line, &layout::OBSERVATION_COUNT)?;

    Ok(StormHeader {
        basin,
        sequence_number,
        year,
        storm_id: storm_id(year, sequence_number),
        name,
        observation_count,
    })
}

/// Year followed by the two-digit sequence number, read as one integer
pub fn storm_id(year: i32, sequence_number: u32) -> i64 {
    i64::from(year) * 100 + i64::from(sequence_number)
}

/// Read the year of an observation line and the shared month, day and hour
pub fn parse_date(line: &str) -> Result<ObservationTime> {
    Ok(ObservationTime {
        year: parse_integer(line, &layout::OBSERVATION_YEAR)?,
        month: parse_integer(line, &layout::MONTH)?,
        day: parse_integer(line, &layout::DAY)?,
        hour: parse_integer(line, &layout::HOUR)?,
    })
}

/// Map the stage code to its development stage
pub fn parse_stage(line: &str) -> Result<Stage> {
    let code = parse_text(line, &layout::STAGE)?;
    Stage::from_code(code).ok_or_else(|| HurdatError::UnknownStageCode {
        code: code.to_string(),
        line: line.to_string(),
    })
}

/// Latitude in degrees
///
/// The hemisphere letter is not applied; every latitude reads as positive.
/// Use [`parse_latitude_hemisphere`] to inspect it.
pub fn parse_latitude(line: &str) -> Result<f64> {
    let latitude = parse_implied_decimal(line, &layout::LATITUDE)?;
    if latitude.abs() > MAX_LATITUDE {
        let raw = extract(line, &layout::LATITUDE)?;
        return Err(malformed(
            line,
            &layout::LATITUDE,
            raw,
            format!("latitude {} exceeds {} degrees", latitude, MAX_LATITUDE),
        ));
    }
    Ok(latitude)
}

/// Hemisphere letter that follows the latitude
pub fn parse_latitude_hemisphere(line: &str) -> Result<Hemisphere> {
    let letter = parse_flag(line, &layout::LATITUDE_HEMISPHERE)?;
    match Hemisphere::from_letter(letter) {
        Some(hemisphere @ (Hemisphere::North | Hemisphere::South)) => Ok(hemisphere),
        _ => Err(malformed(
            line,
            &layout::LATITUDE_HEMISPHERE,
            &letter.to_string(),
            "expected N or S",
        )),
    }
}

/// Longitude in degrees, negated so that western longitudes are negative
///
/// Eastern values are folded through `360 - value` before the negation, so
/// 120.0E decodes to -240.0.
pub fn parse_longitude(line: &str) -> Result<f64> {
    let mut longitude = parse_implied_decimal(line, &layout::LONGITUDE)?;
    let letter = parse_flag(line, &layout::LONGITUDE_HEMISPHERE)?;
    if Hemisphere::from_letter(letter) == Some(Hemisphere::East) {
        longitude = DEGREES_IN_CIRCLE - longitude;
    }
    Ok(longitude * -1.0)
}

/// Hemisphere letter that follows the longitude
pub fn parse_longitude_hemisphere(line: &str) -> Result<Hemisphere> {
    let letter = parse_flag(line, &layout::LONGITUDE_HEMISPHERE)?;
    match Hemisphere::from_letter(letter) {
        Some(hemisphere @ (Hemisphere::East | Hemisphere::West)) => Ok(hemisphere),
        _ => Err(malformed(
            line,
            &layout::LONGITUDE_HEMISPHERE,
            &letter.to_string(),
            "expected E or W",
        )),
    }
}

/// Maximum sustained wind in knots
pub fn parse_wind(line: &str) -> Result<i32> {
    parse_integer(line, &layout::WIND)
}

/// Minimum central pressure in millibars, -999 when missing
pub fn parse_pressure(line: &str) -> Result<i32> {
    if extract(line, &layout::PRESSURE)? == MISSING_PRESSURE_FIELD {
        return Ok(MISSING_PRESSURE);
    }
    parse_integer(line, &layout::PRESSURE)
}

/// Category of the observation's wind speed
pub fn parse_category<C: WindClassifier + ?Sized>(line: &str, classifier: &C) -> Result<Category> {
    Ok(classifier.classify(parse_wind(line)?))
}

/// Decode every field of an observation line
pub fn parse_observation(line: &str) -> Result<Observation> {
    Ok(Observation {
        time: parse_date(line)?,
        landfall: detects_landfall(line)?,
        stage: parse_stage(line)?,
        latitude: parse_latitude(line)?,
        longitude: parse_longitude(line)?,
        wind: parse_wind(line)?,
        pressure: parse_pressure(line)?,
    })
}
