//! Textual interval literals and domain preset names.
//!
//! Accepts the same bracket notation that [`Interval`] renders, e.g.
//! `[-20,30)` or `(-inf,137/5]`, plus the preset names offered to front
//! ends: `real`, `positive`, `negative`, `nonneg`, `nonpos`.

use crate::{Bound, Interval};
use num_rational::Rational64;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntervalError {
    #[error("expected '[' or '(' at the start of an interval")]
    MissingOpenBracket,
    #[error("expected ']' or ')' at the end of an interval")]
    MissingCloseBracket,
    #[error("expected two comma-separated bounds")]
    MissingComma,
    #[error("invalid bound '{0}': expected an integer, a rational like 137/5, or -inf/inf")]
    InvalidBound(String),
    #[error("'{0}' is not a valid interval")]
    InvalidInterval(String),
}

fn parse_bound(s: &str) -> Result<Bound, ParseIntervalError> {
    match s {
        "-inf" => Ok(Bound::NegInf),
        "inf" | "+inf" => Ok(Bound::PosInf),
        _ => Rational64::from_str(s)
            .map(Bound::Finite)
            .map_err(|_| ParseIntervalError::InvalidBound(s.to_string())),
    }
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "real" => return Ok(Interval::REAL),
            "positive" | "pos" => return Ok(Interval::POSITIVE),
            "negative" | "neg" => return Ok(Interval::NEGATIVE),
            "nonneg" | "nonnegative" => return Ok(Interval::NON_NEGATIVE),
            "nonpos" | "nonpositive" => return Ok(Interval::NON_POSITIVE),
            _ => {}
        }

        let (left_open, rest) = if let Some(rest) = s.strip_prefix('(') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('[') {
            (false, rest)
        } else {
            return Err(ParseIntervalError::MissingOpenBracket);
        };
        let (right_open, inner) = if let Some(inner) = rest.strip_suffix(')') {
            (true, inner)
        } else if let Some(inner) = rest.strip_suffix(']') {
            (false, inner)
        } else {
            return Err(ParseIntervalError::MissingCloseBracket);
        };

        let (low, high) = inner.split_once(',').ok_or(ParseIntervalError::MissingComma)?;
        let interval = Interval::new(
            parse_bound(low.trim())?,
            parse_bound(high.trim())?,
            left_open,
            right_open,
        );
        if interval.is_valid() {
            Ok(interval)
        } else {
            Err(ParseIntervalError::InvalidInterval(s.to_string()))
        }
    }
}
