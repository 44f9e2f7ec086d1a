use crate::derivation::Derivation;
use crate::ineq;
use lde_eea::{BezoutRow, EeaTrace};
use lde_interval::Interval;
use tracing::debug;

/// A linear Diophantine equation `ax + by = c` with interval domain
/// constraints on both variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lde {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub x_domain: Interval,
    pub y_domain: Interval,
}

/// A single particular integer solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub x: i64,
    pub y: i64,
}

/// The general solution family `x = x0 + x_step*n`, `y = y0 + y_step*n`,
/// with `n` ranging over the integers of `n_range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionFamily {
    pub x0: i64,
    pub y0: i64,
    pub x_step: i64,
    pub y_step: i64,
    pub n_range: Interval,
}

/// Structured counterpart of the derivation, built from the same
/// intermediate values without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The constraints admit no integer solution; the derivation says why.
    NoSolution,
    /// `0x + 0y = 0`: both variables range freely over their domains.
    BothFree {
        x_domain: Interval,
        y_domain: Interval,
    },
    /// `a = 0` forces `y`; `x` is free over its domain.
    XFree { y: i64, x_domain: Interval },
    /// `b = 0` forces `x`; `y` is free over its domain.
    YFree { x: i64, y_domain: Interval },
    /// The general case: a parametrized family with a constrained parameter.
    Family(SolutionFamily),
}

/// A derivation together with its structured outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub derivation: Derivation,
    pub outcome: Outcome,
}

impl Lde {
    /// Equation with both domains unrestricted.
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self::with_domains(a, b, c, Interval::REAL, Interval::REAL)
    }

    pub fn with_domains(a: i64, b: i64, c: i64, x_domain: Interval, y_domain: Interval) -> Self {
        Self {
            a,
            b,
            c,
            x_domain,
            y_domain,
        }
    }

    /// A particular solution derived from the Bézout row of `(a, b)`, or
    /// `None` when `gcd(a,b)` does not divide `c`. Requires `a` and `b`
    /// nonzero; the degenerate cases are handled by [`Lde::solve_report`].
    pub fn particular_solution(&self) -> Option<Solution> {
        self.particular_from_row(lde_eea::bezout(self.a, self.b))
    }

    /// Like [`Lde::particular_solution`], reusing an already-computed row.
    ///
    /// The row carries coefficients for `(max(|a|,|b|), min(|a|,|b|))`, so
    /// the pair is swapped back into `(a, b)` order and the signs of the
    /// original coefficients are folded in.
    pub fn particular_from_row(&self, row: BezoutRow) -> Option<Solution> {
        let d = row.r;
        if self.c % d != 0 {
            return None;
        }

        let factor = self.c / d;
        let hi = row.x * factor;
        let lo = row.y * factor;
        let (x, y) = if self.a.abs() > self.b.abs() {
            (hi, lo)
        } else {
            (lo, hi)
        };
        Some(Solution {
            x: self.a.signum() * x,
            y: self.b.signum() * y,
        })
    }

    /// Solve the equation, returning the derivation and the structured
    /// outcome. Every terminal state, including "no solution", is data.
    pub fn solve_report(&self) -> SolveReport {
        debug!(a = self.a, b = self.b, c = self.c, "solving LDE");

        let mut steps = Derivation::new();
        steps.push("Solving the Linear Diophantine Equation (LDE):");
        steps.push(format!("\t{}", equation_text(self.a, self.b, self.c)));
        steps.push("Where:");
        steps.push(format!("\tx ∈ {}", self.x_domain));
        steps.push(format!("\ty ∈ {}", self.y_domain));
        steps.blank();

        let outcome = match (self.a == 0, self.b == 0) {
            (true, true) => self.solve_degenerate(&mut steps),
            (true, false) => self.solve_zero_a(&mut steps),
            (false, true) => self.solve_zero_b(&mut steps),
            (false, false) => self.solve_general(&mut steps),
        };

        SolveReport {
            derivation: steps,
            outcome,
        }
    }

    /// The derivation alone; the surface consumed verbatim by front ends.
    pub fn solve(&self) -> Derivation {
        self.solve_report().derivation
    }

    fn solve_degenerate(&self, steps: &mut Derivation) -> Outcome {
        if self.c != 0 {
            steps.push("Since a = 0, b = 0, and c ≠ 0, the LDE has no solution.");
            return Outcome::NoSolution;
        }

        steps.push(format!("x is any integer in the interval {}", self.x_domain));
        steps.push(format!("y is any integer in the interval {}", self.y_domain));
        Outcome::BothFree {
            x_domain: self.x_domain,
            y_domain: self.y_domain,
        }
    }

    fn solve_zero_a(&self, steps: &mut Derivation) -> Outcome {
        if self.c % self.b != 0 {
            steps.push(format!(
                "Since {} does not divide {}, the LDE has no integer solution.",
                self.b, self.c
            ));
            return Outcome::NoSolution;
        }

        let y = self.c / self.b;
        steps.push(format!("y = {y}"));
        if !self.y_domain.contains_int(y) {
            steps.push(format!("However, {} is not in the interval {}", y, self.y_domain));
            steps.push("Therefore, the LDE has no solution.");
            return Outcome::NoSolution;
        }

        steps.push(format!("x is any integer in the interval {}", self.x_domain));
        Outcome::XFree {
            y,
            x_domain: self.x_domain,
        }
    }

    fn solve_zero_b(&self, steps: &mut Derivation) -> Outcome {
        if self.c % self.a != 0 {
            steps.push(format!(
                "Since {} does not divide {}, the LDE has no integer solution.",
                self.a, self.c
            ));
            return Outcome::NoSolution;
        }

        let x = self.c / self.a;
        steps.push(format!("x = {x}"));
        if !self.x_domain.contains_int(x) {
            steps.push(format!("However, {} is not in the interval {}", x, self.x_domain));
            steps.push("Therefore, the LDE has no solution.");
            return Outcome::NoSolution;
        }

        steps.push(format!("y is any integer in the interval {}", self.y_domain));
        Outcome::YFree {
            x,
            y_domain: self.y_domain,
        }
    }

    fn solve_general(&self, steps: &mut Derivation) -> Outcome {
        let trace = EeaTrace::compute(self.a, self.b);
        let d = trace.gcd();
        debug!(gcd = d, rows = trace.rows().len(), "computed EEA trace");

        steps.push("By the Extended Euclidean Algorithm (EEA):");
        steps.push("x\ty\tr\tq");
        for row in trace.rows() {
            steps.push(format!("{}\t{}\t{}\t{}", row.x, row.y, row.r, row.q));
        }
        steps.blank();
        steps.push(format!("GCD({}, {}) = {}", self.a, self.b, d));
        steps.blank();

        if self.c % d != 0 {
            steps.push(format!(
                "Since {} does not divide {}, the LDE has no solution.",
                d, self.c
            ));
            return Outcome::NoSolution;
        }

        let row = trace.bezout_row();
        // Both scalings divide exactly: d | d, and d | c was checked above.
        let Some(base) = Lde::new(self.a, self.b, d).particular_from_row(row) else {
            return Outcome::NoSolution;
        };
        steps.push("From the EEA Table:");
        steps.push(format!("\t{}", solution_text(self.a, self.b, d, base.x, base.y)));

        let Some(part) = self.particular_from_row(row) else {
            return Outcome::NoSolution;
        };
        steps.push("Thus:");
        steps.push(format!(
            "\t{}",
            solution_text(self.a, self.b, self.c, part.x, part.y)
        ));
        steps.blank();

        steps.push("A particular solution is:");
        steps.push(format!("\tx₀ = {}", part.x));
        steps.push(format!("\ty₀ = {}", part.y));
        steps.blank();

        let x_step = self.b / d;
        let y_step = -self.a / d;
        steps.push("The complete solution is:");
        steps.push(format!("\tx = {}", parameter_text(part.x, x_step)));
        steps.push(format!("\ty = {}", parameter_text(part.y, y_step)));

        let n_range = ineq::solve_system(part.x, x_step, part.y, y_step, self.x_domain, self.y_domain)
            .integer_subinterval();
        if n_range.is_valid() {
            steps.push("Where:");
            steps.push(format!("\tn ∈ {n_range}"));
            Outcome::Family(SolutionFamily {
                x0: part.x,
                y0: part.y,
                x_step,
                y_step,
                n_range,
            })
        } else {
            steps.blank();
            steps.push("However, there does not exist an integer n such that:");
            steps.push(format!("\tx ∈ {}", self.x_domain));
            steps.push(format!("\ty ∈ {}", self.y_domain));
            steps.push("Therefore, the LDE has no solution.");
            Outcome::NoSolution
        }
    }
}

/// `ax + by = c` with unit coefficients elided, e.g. `9x - 5y = 137`.
fn equation_text(a: i64, b: i64, c: i64) -> String {
    let a_part = match a {
        1 => String::new(),
        -1 => "-".to_string(),
        _ => a.to_string(),
    };
    let op = if b < 0 { '-' } else { '+' };
    let b_part = if b.abs() == 1 { String::new() } else { b.abs().to_string() };
    format!("{a_part}x {op} {b_part}y = {c}")
}

/// The equation with a candidate solution substituted, e.g. `9(-1) + 5(2) = 1`.
fn solution_text(a: i64, b: i64, c: i64, x: i64, y: i64) -> String {
    let a_part = match a {
        1 => String::new(),
        -1 => "-".to_string(),
        _ => a.to_string(),
    };
    let op = if b < 0 { '-' } else { '+' };
    let b_part = if b.abs() == 1 { String::new() } else { b.abs().to_string() };
    format!("{a_part}({x}) {op} {b_part}({y}) = {c}")
}

/// An affine expression in the parameter `n`, e.g. `-137 + 5n` or `-n`.
fn parameter_text(constant: i64, coefficient: i64) -> String {
    if constant == 0 {
        return match coefficient {
            1 => "n".to_string(),
            -1 => "-n".to_string(),
            k => format!("{k}n"),
        };
    }

    let op = if coefficient < 0 { '-' } else { '+' };
    let coeff = if coefficient.abs() == 1 {
        "n".to_string()
    } else {
        format!("{}n", coefficient.abs())
    };
    format!("{constant} {op} {coeff}")
}
