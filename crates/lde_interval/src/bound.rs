use num_rational::Rational64;
use std::fmt;

/// One endpoint of an [`Interval`](crate::Interval).
///
/// The derived ordering is the mathematical one:
/// `NegInf < Finite(v) < PosInf`, with finite endpoints compared exactly
/// as rationals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bound {
    NegInf,
    Finite(Rational64),
    PosInf,
}

impl Bound {
    /// Finite endpoint at an integer value.
    pub fn finite(n: i64) -> Self {
        Bound::Finite(Rational64::from_integer(n))
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    pub fn as_finite(self) -> Option<Rational64> {
        match self {
            Bound::Finite(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Bound::finite(n)
    }
}

impl From<Rational64> for Bound {
    fn from(v: Rational64) -> Self {
        Bound::Finite(v)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => write!(f, "-inf"),
            Bound::PosInf => write!(f, "inf"),
            Bound::Finite(v) => write!(f, "{v}"),
        }
    }
}
