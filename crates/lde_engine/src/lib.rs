//! Linear Diophantine equation (LDE) engine.
//!
//! Solves `ax + by = c` for integers `x`, `y` constrained to real interval
//! domains, and produces the full human-readable derivation: the Extended
//! Euclidean trace, the particular solution, the parametrized family, and
//! the exact range of the integer parameter. Unsatisfiability is always a
//! normal, fully explained outcome, never an error value.

mod derivation;
pub mod ineq;
mod solve;

pub use derivation::Derivation;
pub use solve::{Lde, Outcome, Solution, SolutionFamily, SolveReport};
