//! Linear inequality solving over the interval model.
//!
//! Everything here solves `constant + coefficient * v <op> target` for the
//! free variable `v`, producing the interval of real values satisfying it.
//! Bounds are divided exactly as rationals, so nothing is rounded before
//! the final integer reduction done by the caller.

use lde_interval::{Bound, Interval};
use num_rational::Rational64;

/// Comparison operator of a one-sided linear inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

impl Op {
    fn is_greater(self) -> bool {
        matches!(self, Op::Greater | Op::GreaterEq)
    }

    fn is_strict(self) -> bool {
        matches!(self, Op::Greater | Op::Less)
    }

    fn holds(self, lhs: Rational64, rhs: Rational64) -> bool {
        match self {
            Op::Greater => lhs > rhs,
            Op::GreaterEq => lhs >= rhs,
            Op::Less => lhs < rhs,
            Op::LessEq => lhs <= rhs,
        }
    }
}

/// Solve `constant + coefficient * v <op> target` for `v`.
///
/// A negative coefficient flips the direction; an infinite target makes the
/// inequality trivially always or never true; a zero coefficient leaves no
/// free variable, so the answer is likewise all-or-nothing.
pub fn solve(constant: i64, coefficient: i64, op: Op, target: Bound) -> Interval {
    let target = match target {
        Bound::PosInf => {
            return if op.is_greater() {
                Interval::INVALID
            } else {
                Interval::REAL
            }
        }
        Bound::NegInf => {
            return if op.is_greater() {
                Interval::REAL
            } else {
                Interval::INVALID
            }
        }
        Bound::Finite(t) => t,
    };

    if coefficient == 0 {
        return if op.holds(Rational64::from_integer(constant), target) {
            Interval::REAL
        } else {
            Interval::INVALID
        };
    }

    let bound = (target - Rational64::from_integer(constant)) / Rational64::from_integer(coefficient);
    let open = op.is_strict();
    if op.is_greater() == (coefficient > 0) {
        Interval::new(Bound::Finite(bound), Bound::PosInf, open, true)
    } else {
        Interval::new(Bound::NegInf, Bound::Finite(bound), true, open)
    }
}

/// Solve `constant + coefficient * v ∈ interval` by treating the interval's
/// endpoints as two one-sided inequalities (openness preserved) and
/// intersecting the two half-line solutions.
pub fn solve_bounded(constant: i64, coefficient: i64, interval: Interval) -> Interval {
    if !interval.is_valid() {
        return Interval::INVALID;
    }

    let above_low = solve(
        constant,
        coefficient,
        if interval.left_open { Op::Greater } else { Op::GreaterEq },
        interval.low,
    );
    let below_high = solve(
        constant,
        coefficient,
        if interval.right_open { Op::Less } else { Op::LessEq },
        interval.high,
    );
    above_low.intersect(below_high)
}

/// Feasible region of a shared free variable constrained by two bounded
/// affine expressions; this is how the LDE engine turns the `x` and `y`
/// domains into the range of the integer parameter `n`.
pub fn solve_system(
    x_const: i64,
    x_coeff: i64,
    y_const: i64,
    y_coeff: i64,
    x_interval: Interval,
    y_interval: Interval,
) -> Interval {
    solve_bounded(x_const, x_coeff, x_interval).intersect(solve_bounded(y_const, y_coeff, y_interval))
}
