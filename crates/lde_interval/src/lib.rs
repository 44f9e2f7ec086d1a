//! Interval arithmetic over exact rational endpoints.
//!
//! Intervals are pure values: construction never validates, and every
//! operation handed an invalid interval propagates [`Interval::INVALID`]
//! instead of failing. Endpoints are [`Bound`]s, so infinities are tagged
//! variants rather than sentinel magnitudes, and all finite comparisons are
//! exact rational arithmetic.

mod bound;
mod parse;

pub use bound::Bound;
pub use parse::ParseIntervalError;

use num_rational::Rational64;
use std::cmp::Ordering;
use std::fmt;

/// Number of integers contained in an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerCount {
    Finite(i64),
    Unbounded,
}

/// A real interval with independently open or closed endpoints.
///
/// The `valid` flag distinguishes the empty/invalid sentinel; callers must
/// check [`Interval::is_valid`] before trusting the bounds of anything they
/// built by hand. An infinite endpoint is only ever open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub low: Bound,
    pub high: Bound,
    pub left_open: bool,
    pub right_open: bool,
    pub valid: bool,
}

const ZERO: Bound = Bound::Finite(Rational64::new_raw(0, 1));

impl Interval {
    /// The whole real line, `(-inf,inf)`.
    pub const REAL: Self = Self::new(Bound::NegInf, Bound::PosInf, true, true);
    /// `(0,inf)`.
    pub const POSITIVE: Self = Self::new(ZERO, Bound::PosInf, true, true);
    /// `(-inf,0)`.
    pub const NEGATIVE: Self = Self::new(Bound::NegInf, ZERO, true, true);
    /// `(-inf,0]`.
    pub const NON_POSITIVE: Self = Self::new(Bound::NegInf, ZERO, true, false);
    /// `[0,inf)`.
    pub const NON_NEGATIVE: Self = Self::new(ZERO, Bound::PosInf, false, true);
    /// The invalid/empty sentinel.
    pub const INVALID: Self = Self {
        low: ZERO,
        high: ZERO,
        left_open: true,
        right_open: true,
        valid: false,
    };

    /// Pure construction; performs no validation.
    pub const fn new(low: Bound, high: Bound, left_open: bool, right_open: bool) -> Self {
        Self {
            low,
            high,
            left_open,
            right_open,
            valid: true,
        }
    }

    /// `(low,high)` with integer endpoints.
    pub fn open(low: i64, high: i64) -> Self {
        Self::new(Bound::finite(low), Bound::finite(high), true, true)
    }

    /// `[low,high]` with integer endpoints.
    pub fn closed(low: i64, high: i64) -> Self {
        Self::new(Bound::finite(low), Bound::finite(high), false, false)
    }

    /// An interval is valid when its flag is set, neither endpoint is a
    /// closed infinity, and `low <= high` (strictly, unless both endpoints
    /// are closed).
    pub fn is_valid(self) -> bool {
        self.valid
            && (self.left_open || self.low != Bound::NegInf)
            && (self.right_open || self.high != Bound::PosInf)
            && if self.left_open || self.right_open {
                self.low < self.high
            } else {
                self.low <= self.high
            }
    }

    /// Endpoint-aware membership; open means strict. Always false for the
    /// invalid sentinel.
    pub fn contains(self, n: Rational64) -> bool {
        let n = Bound::Finite(n);
        self.valid
            && (if self.left_open { n > self.low } else { n >= self.low })
            && (if self.right_open { n < self.high } else { n <= self.high })
    }

    pub fn contains_int(self, n: i64) -> bool {
        self.contains(Rational64::from_integer(n))
    }

    /// Intersection of two intervals.
    ///
    /// The tighter bound wins on each side and brings its openness along;
    /// on a tie the stricter (open) sense wins. A result that degenerates
    /// to a half-open or open point collapses to [`Interval::INVALID`].
    pub fn intersect(self, other: Interval) -> Interval {
        if !self.is_valid() || !other.is_valid() {
            return Interval::INVALID;
        }

        let (low, left_open) = match self.low.cmp(&other.low) {
            Ordering::Greater => (self.low, self.left_open),
            Ordering::Equal => (self.low, self.left_open || other.left_open),
            Ordering::Less => (other.low, other.left_open),
        };
        let (high, right_open) = match self.high.cmp(&other.high) {
            Ordering::Less => (self.high, self.right_open),
            Ordering::Equal => (self.high, self.right_open || other.right_open),
            Ordering::Greater => (other.high, other.right_open),
        };

        let out = Interval::new(low, high, left_open, right_open);
        if out.is_valid() {
            out
        } else {
            Interval::INVALID
        }
    }

    /// The largest closed integer-endpoint interval contained in `self`.
    ///
    /// The lower bound becomes `ceil(low)`, except that an open integer
    /// endpoint must bump to the next integer (ceiling of an integer is
    /// itself). Symmetrically with `floor` at the top. Infinite endpoints
    /// pass through open.
    pub fn integer_subinterval(self) -> Interval {
        if !self.is_valid() {
            return Interval::INVALID;
        }

        let low = match self.low {
            Bound::Finite(v) => {
                let n = if self.left_open && v.is_integer() {
                    v.to_integer() + 1
                } else {
                    v.ceil().to_integer()
                };
                Bound::finite(n)
            }
            inf => inf,
        };
        let high = match self.high {
            Bound::Finite(v) => {
                let n = if self.right_open && v.is_integer() {
                    v.to_integer() - 1
                } else {
                    v.floor().to_integer()
                };
                Bound::finite(n)
            }
            inf => inf,
        };

        let out = Interval::new(low, high, low == Bound::NegInf, high == Bound::PosInf);
        if out.is_valid() {
            out
        } else {
            Interval::INVALID
        }
    }

    /// How many integers lie in the interval; zero for the invalid sentinel,
    /// [`IntegerCount::Unbounded`] when either reduced endpoint is infinite.
    pub fn count_integers(self) -> IntegerCount {
        let reduced = self.integer_subinterval();
        if !reduced.is_valid() {
            return IntegerCount::Finite(0);
        }
        match (reduced.low, reduced.high) {
            (Bound::Finite(lo), Bound::Finite(hi)) => {
                IntegerCount::Finite(hi.to_integer() - lo.to_integer() + 1)
            }
            _ => IntegerCount::Unbounded,
        }
    }
}

impl fmt::Display for Interval {
    /// Canonical bracket notation, e.g. `(3,5]` or `(-inf,inf)`. The invalid
    /// sentinel renders as the empty set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "∅");
        }
        let lb = if self.left_open { '(' } else { '[' };
        let rb = if self.right_open { ')' } else { ']' };
        write!(f, "{lb}{},{}{rb}", self.low, self.high)
    }
}
