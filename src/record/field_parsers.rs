//! Field extraction utilities for fixed-width records
//!
//! [`decode`] is the one extractor driven by the [`Field`] table: it slices a
//! field out of a line and applies the field's [`Transform`]. The typed
//! helpers below call it and check that the field has the transform the
//! caller expects.

use super::layout::{Field, Transform};
use crate::error::{HurdatError, Result};
use std::fmt::Display;

/// A field value after its transform has been applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(char),
    Integer(i64),
    Decimal(f64),
}

impl FieldValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::Integer(_) => "integer",
            FieldValue::Decimal(_) => "implied-decimal",
        }
    }
}

/// Get the raw characters of a field, failing if the line is too short
pub fn extract<'a>(line: &'a str, field: &Field) -> Result<&'a str> {
    line.get(field.start..field.end())
        .ok_or_else(|| HurdatError::MalformedRecord {
            field: field.name,
            line: line.to_string(),
        })
}

/// Slice a field and decode it according to its transform
pub fn decode<'a>(line: &'a str, field: &Field) -> Result<FieldValue<'a>> {
    let raw = extract(line, field)?;

    match field.transform {
        Transform::Text => Ok(FieldValue::Text(raw)),
        Transform::Flag => raw
            .chars()
            .next()
            .map(FieldValue::Flag)
            .ok_or_else(|| HurdatError::MalformedRecord {
                field: field.name,
                line: line.to_string(),
            }),
        // A leading zero needs no special handling: "08" and " 8" both read as 8
        Transform::Integer => raw
            .trim()
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|e| malformed(line, field, raw, e.to_string())),
        Transform::ImpliedDecimal {
            whole_digits,
            tenths_at,
        } => {
            let whole = raw
                .get(..whole_digits)
                .ok_or_else(|| malformed(line, field, raw, "missing whole part"))?;
            let tenths = raw
                .get(tenths_at..tenths_at + 1)
                .filter(|t| t.bytes().all(|b| b.is_ascii_digit()))
                .ok_or_else(|| malformed(line, field, raw, "tenths digit is not numeric"))?;

            format!("{}.{}", whole.trim(), tenths)
                .parse::<f64>()
                .map(FieldValue::Decimal)
                .map_err(|e| malformed(line, field, raw, e.to_string()))
        }
    }
}

/// Raw text of a [`Transform::Text`] field
pub fn parse_text<'a>(line: &'a str, field: &Field) -> Result<&'a str> {
    match decode(line, field)? {
        FieldValue::Text(text) => Ok(text),
        other => Err(wrong_transform(line, field, other, "text")),
    }
}

/// Marker character of a [`Transform::Flag`] field
pub fn parse_flag(line: &str, field: &Field) -> Result<char> {
    match decode(line, field)? {
        FieldValue::Flag(flag) => Ok(flag),
        other => Err(wrong_transform(line, field, other, "flag")),
    }
}

/// Whitespace-padded [`Transform::Integer`] field, narrowed to `T`
pub fn parse_integer<T>(line: &str, field: &Field) -> Result<T>
where
    T: TryFrom<i64>,
    T::Error: Display,
{
    match decode(line, field)? {
        FieldValue::Integer(value) => T::try_from(value)
            .map_err(|e| malformed(line, field, &value.to_string(), e.to_string())),
        other => Err(wrong_transform(line, field, other, "integer")),
    }
}

/// Field whose decimal point is implied by its position
pub fn parse_implied_decimal(line: &str, field: &Field) -> Result<f64> {
    match decode(line, field)? {
        FieldValue::Decimal(value) => Ok(value),
        other => Err(wrong_transform(line, field, other, "implied-decimal")),
    }
}

/// Build a malformed-field error for a slice that failed to decode
pub fn malformed(line: &str, field: &Field, value: &str, reason: impl Into<String>) -> HurdatError {
    HurdatError::MalformedField {
        field: field.name,
        value: value.to_string(),
        reason: reason.into(),
        line: line.to_string(),
    }
}

fn wrong_transform(
    line: &str,
    field: &Field,
    found: FieldValue<'_>,
    expected: &str,
) -> HurdatError {
    let raw = line.get(field.start..field.end()).unwrap_or_default();
    malformed(
        line,
        field,
        raw,
        format!("expected {} field, decodes as {}", expected, found.kind()),
    )
}
