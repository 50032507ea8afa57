//! Tests for header detection and header field decoding

use super::*;
use crate::error::HurdatError;
use crate::models::{Basin, RecordKind};
use crate::record::{classify_line, is_header_line, parse_date, parse_header, storm_id};

fn padded_header(basin: &str, sequence: &str, year: &str, name: &str, count: &str) -> String {
    format!("{basin}{sequence}{year},{:9}{name:<10},    {count},", "")
}

#[test]
fn test_is_header_line_basins() {
    for basin in ["AL", "EP", "CP"] {
        let line = padded_header(basin, "01", "2005", "TEST", "  3");
        assert!(is_header_line(&line).unwrap(), "{basin} should be a header");
    }
    assert!(!is_header_line(KATRINA_FORMATION).unwrap());
    assert!(!is_header_line("WP012005").unwrap());
    assert!(!is_header_line("al122005").unwrap());
}

#[test]
fn test_is_header_line_short_input() {
    assert!(matches!(
        is_header_line("A"),
        Err(HurdatError::MalformedRecord { field: "basin", .. })
    ));
    assert!(is_header_line("").is_err());
    assert!(is_header_line("AL").unwrap());
}

#[test]
fn test_classify_line() {
    assert_eq!(classify_line(KATRINA_HEADER).unwrap(), RecordKind::Header);
    assert_eq!(
        classify_line(KATRINA_FORMATION).unwrap(),
        RecordKind::Observation
    );
}

#[test]
fn test_parse_real_header() {
    let header = parse_header(KATRINA_HEADER).unwrap();

    assert_eq!(header.basin, Basin::Atlantic);
    assert_eq!(header.sequence_number, 12);
    assert_eq!(header.year, 2005);
    assert_eq!(header.storm_id, 200512);
    assert_eq!(header.observation_count, 34);
    // The name field is returned with its padding
    assert_eq!(header.name, "   KATRINA");
    assert_eq!(header.trimmed_name(), "KATRINA");
}

#[test]
fn test_parse_header_trailing_padded_name() {
    let line = padded_header("AL", "01", "2005", "KATRINA", "034");
    let header = parse_header(&line).unwrap();

    assert_eq!(header.storm_id, 200501);
    assert_eq!(header.name, "KATRINA   ");
    assert_eq!(header.name.trim(), "KATRINA");
    assert_eq!(header.observation_count, 34);
}

#[test]
fn test_parse_header_pacific() {
    let header = parse_header(UNNAMED_PACIFIC_HEADER).unwrap();
    assert_eq!(header.basin, Basin::EastPacific);
    assert_eq!(header.storm_id, 194901);
    assert_eq!(header.observation_count, 7);
}

#[test]
fn test_parse_header_single_digit_sequence() {
    let line = padded_header("CP", " 3", "1992", "INIKI", " 40");
    let header = parse_header(&line).unwrap();
    assert_eq!(header.sequence_number, 3);
    assert_eq!(header.storm_id, 199203);
}

#[test]
fn test_parse_header_rejects_observation_line() {
    match parse_header(KATRINA_FORMATION) {
        Err(HurdatError::PreconditionViolation { operation, line }) => {
            assert_eq!(operation, "parse_header");
            assert_eq!(line, KATRINA_FORMATION);
        }
        other => panic!("expected precondition violation, got {other:?}"),
    }
}

#[test]
fn test_parse_header_truncated() {
    let truncated = &KATRINA_HEADER[..30];
    assert!(matches!(
        parse_header(truncated),
        Err(HurdatError::MalformedRecord {
            field: "observation_count",
            ..
        })
    ));
}

#[test]
fn test_parse_header_bad_count() {
    let line = splice(KATRINA_HEADER, 33, " 3x");
    assert!(matches!(
        parse_header(&line),
        Err(HurdatError::MalformedField {
            field: "observation_count",
            ..
        })
    ));
}

#[test]
fn test_storm_id_injective_within_year() {
    let ids: Vec<i64> = (1..=30).map(|seq| storm_id(2005, seq)).collect();
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());

    assert_eq!(storm_id(2005, 1), 200501);
    assert_eq!(storm_id(2005, 10), 200510);
}

#[test]
fn test_storm_id_stable_across_calls() {
    let first = parse_header(KATRINA_HEADER).unwrap().storm_id;
    let second = parse_header(KATRINA_HEADER).unwrap().storm_id;
    assert_eq!(first, second);
}

#[test]
fn test_parse_date_on_header_line() {
    // The basin code sits where an observation line holds its year
    assert!(matches!(
        parse_date(KATRINA_HEADER),
        Err(HurdatError::MalformedField { field: "year", .. })
    ));
}
