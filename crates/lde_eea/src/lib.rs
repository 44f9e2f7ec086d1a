//! Extended Euclidean Algorithm (EEA) with a full coefficient trace.
//!
//! The trace is the classic tabular presentation: two seed rows carrying
//! `max(|a|,|b|)` and `min(|a|,|b|)`, then one row per division step until
//! the remainder reaches zero. The second-to-last row holds the GCD together
//! with Bézout coefficients for the (larger, smaller) pair, i.e.
//! `x*max(|a|,|b|) + y*min(|a|,|b|) == r == gcd(a,b)`.

/// One row of the EEA trace: running Bézout coefficients `x`, `y`, the
/// running remainder `r`, and the quotient `q` that produced the row
/// (zero for the two seed rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezoutRow {
    pub x: i64,
    pub y: i64,
    pub r: i64,
    pub q: i64,
}

impl BezoutRow {
    pub const fn new(x: i64, y: i64, r: i64, q: i64) -> Self {
        Self { x, y, r, q }
    }

    fn seed(a: i64, b: i64) -> (Self, Self) {
        let hi = a.abs().max(b.abs());
        let lo = a.abs().min(b.abs());
        (Self::new(1, 0, hi, 0), Self::new(0, 1, lo, 0))
    }

    fn step(prev: Self, cur: Self) -> Self {
        let q = prev.r / cur.r;
        Self::new(prev.x - cur.x * q, prev.y - cur.y * q, prev.r % cur.r, q)
    }
}

/// The ordered rows of one EEA run. Always holds at least the two seed rows,
/// so zero operands are fine: `0` is a legitimate remainder from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EeaTrace {
    rows: Vec<BezoutRow>,
}

impl EeaTrace {
    pub fn compute(a: i64, b: i64) -> Self {
        let (mut prev, mut cur) = BezoutRow::seed(a, b);
        let mut rows = vec![prev, cur];
        while cur.r != 0 {
            let next = BezoutRow::step(prev, cur);
            prev = cur;
            cur = next;
            rows.push(cur);
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[BezoutRow] {
        &self.rows
    }

    /// The second-to-last row: final nonzero remainder plus the Bézout
    /// coefficients for `(max(|a|,|b|), min(|a|,|b|))`.
    pub fn bezout_row(&self) -> BezoutRow {
        debug_assert!(self.rows.len() >= 2, "trace is missing its seed rows");
        self.rows[self.rows.len() - 2]
    }

    pub fn gcd(&self) -> i64 {
        self.bezout_row().r
    }
}

/// The second-to-last trace row, computed without materializing the trace.
pub fn bezout(a: i64, b: i64) -> BezoutRow {
    let (mut prev, mut cur) = BezoutRow::seed(a, b);
    while cur.r != 0 {
        let next = BezoutRow::step(prev, cur);
        prev = cur;
        cur = next;
    }
    prev
}

/// `gcd(|a|,|b|)` via the same loop; `gcd(0,0)` is 0.
pub fn gcd(a: i64, b: i64) -> i64 {
    bezout(a, b).r
}
