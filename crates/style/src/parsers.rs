//! nom parsers for length values and the margin shorthand.

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, opt};
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{delimited, pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

const POINTS_PER_INCH: f64 = 72.0;
const POINTS_PER_CM: f64 = POINTS_PER_INCH / 2.54;

fn unit_factor(unit: Option<&str>) -> f64 {
    match unit.map(str::to_ascii_lowercase).as_deref() {
        Some("in") => POINTS_PER_INCH,
        Some("cm") => POINTS_PER_CM,
        Some("mm") => POINTS_PER_CM / 10.0,
        // "pt", "px" and bare numbers are all points.
        _ => 1.0,
    }
}

/// A number with an optional unit suffix, converted to points.
fn length(input: &str) -> IResult<&str, f64> {
    pair(
        double,
        opt(alt((
            tag_no_case("pt"),
            tag_no_case("px"),
            tag_no_case("in"),
            tag_no_case("cm"),
            tag_no_case("mm"),
        ))),
    )
    .map(|(value, unit)| value * unit_factor(unit))
    .parse(input)
}

/// Parses a single length such as `"12"`, `"10pt"`, `"2.5cm"` or `"1in"`.
pub fn parse_length(input: &str) -> Result<f64, StyleParseError> {
    all_consuming(delimited(space0, length, space0))
        .parse(input)
        .map(|(_, value)| value)
        .map_err(|e| StyleParseError::Parse(e.to_string()))
}

/// Parses a whitespace separated list of lengths (the margin shorthand).
pub fn parse_length_list(input: &str) -> Result<Vec<f64>, StyleParseError> {
    all_consuming(delimited(space0, separated_list1(space1, length), space0))
        .parse(input)
        .map(|(_, values)| values)
        .map_err(|e| StyleParseError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_units() {
        assert_eq!(parse_length("12").unwrap(), 12.0);
        assert_eq!(parse_length(" 10pt ").unwrap(), 10.0);
        assert_eq!(parse_length("1in").unwrap(), 72.0);
        assert!((parse_length("2.54cm").unwrap() - 72.0).abs() < 1e-9);
        assert!((parse_length("25.4mm").unwrap() - 72.0).abs() < 1e-9);
    }

    #[test]
    fn parses_lists() {
        assert_eq!(parse_length_list("1 2pt 3").unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_length("ten points").is_err());
        assert!(parse_length("10 pt extra").is_err());
    }
}
