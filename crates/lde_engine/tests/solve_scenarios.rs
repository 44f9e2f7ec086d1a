use lde_engine::{Lde, Outcome, SolutionFamily};
use lde_interval::{Interval, IntegerCount};

fn report(a: i64, b: i64, c: i64, xd: Interval, yd: Interval) -> (Vec<String>, Outcome) {
    let report = Lde::with_domains(a, b, c, xd, yd).solve_report();
    (report.derivation.into_lines(), report.outcome)
}

fn family(outcome: Outcome) -> SolutionFamily {
    match outcome {
        Outcome::Family(f) => f,
        other => panic!("expected a solution family, got {other:?}"),
    }
}

#[test]
fn full_derivation_for_the_classic_example() {
    let (lines, outcome) = report(9, 5, 137, Interval::POSITIVE, Interval::POSITIVE);
    let expected = [
        "Solving the Linear Diophantine Equation (LDE):",
        "\t9x + 5y = 137",
        "Where:",
        "\tx ∈ (0,inf)",
        "\ty ∈ (0,inf)",
        "",
        "By the Extended Euclidean Algorithm (EEA):",
        "x\ty\tr\tq",
        "1\t0\t9\t0",
        "0\t1\t5\t0",
        "1\t-1\t4\t1",
        "-1\t2\t1\t1",
        "5\t-9\t0\t4",
        "",
        "GCD(9, 5) = 1",
        "",
        "From the EEA Table:",
        "\t9(-1) + 5(2) = 1",
        "Thus:",
        "\t9(-137) + 5(274) = 137",
        "",
        "A particular solution is:",
        "\tx₀ = -137",
        "\ty₀ = 274",
        "",
        "The complete solution is:",
        "\tx = -137 + 5n",
        "\ty = 274 - 9n",
        "Where:",
        "\tn ∈ [28,30]",
    ];
    assert_eq!(lines, expected);

    let f = family(outcome);
    assert_eq!((f.x0, f.y0, f.x_step, f.y_step), (-137, 274, 5, -9));
    assert_eq!(f.n_range, Interval::closed(28, 30));
    assert_eq!(f.n_range.count_integers(), IntegerCount::Finite(3));
    // Every member of the reported range really solves the equation in-domain.
    for n in 28..=30 {
        let (x, y) = (f.x0 + f.x_step * n, f.y0 + f.y_step * n);
        assert_eq!(9 * x + 5 * y, 137);
        assert!(x > 0 && y > 0);
    }
}

#[test]
fn both_coefficients_zero_with_nonzero_constant_has_no_solution() {
    let (lines, outcome) = report(0, 0, 5, Interval::REAL, Interval::REAL);
    assert_eq!(outcome, Outcome::NoSolution);
    assert!(lines.contains(&"Since a = 0, b = 0, and c ≠ 0, the LDE has no solution.".to_string()));
}

#[test]
fn both_coefficients_zero_with_zero_constant_leaves_both_free() {
    let (lines, outcome) = report(0, 0, 0, Interval::REAL, Interval::NON_NEGATIVE);
    assert_eq!(
        outcome,
        Outcome::BothFree {
            x_domain: Interval::REAL,
            y_domain: Interval::NON_NEGATIVE,
        }
    );
    assert!(lines.contains(&"x is any integer in the interval (-inf,inf)".to_string()));
    assert!(lines.contains(&"y is any integer in the interval [0,inf)".to_string()));
}

#[test]
fn zero_a_forces_y_and_frees_x() {
    let (lines, outcome) = report(0, 5, 10, Interval::REAL, Interval::REAL);
    assert_eq!(
        outcome,
        Outcome::XFree {
            y: 2,
            x_domain: Interval::REAL,
        }
    );
    assert!(lines.contains(&"y = 2".to_string()));
    assert!(lines.contains(&"x is any integer in the interval (-inf,inf)".to_string()));
}

#[test]
fn zero_a_with_indivisible_constant_has_no_integer_solution() {
    let (lines, outcome) = report(0, 4, 14, Interval::NON_POSITIVE, Interval::POSITIVE);
    assert_eq!(outcome, Outcome::NoSolution);
    assert!(lines.contains(&"Since 4 does not divide 14, the LDE has no integer solution.".to_string()));
}

#[test]
fn zero_a_with_forced_value_outside_its_domain_has_no_solution() {
    // y = 2 but y must be negative.
    let (lines, outcome) = report(0, 5, 10, Interval::REAL, Interval::NEGATIVE);
    assert_eq!(outcome, Outcome::NoSolution);
    assert!(lines.contains(&"However, 2 is not in the interval (-inf,0)".to_string()));
    assert!(lines.contains(&"Therefore, the LDE has no solution.".to_string()));
}

#[test]
fn zero_b_forces_x_and_frees_y() {
    let (lines, outcome) = report(-5, 0, 10, Interval::NEGATIVE, Interval::NON_POSITIVE);
    assert_eq!(
        outcome,
        Outcome::YFree {
            x: -2,
            y_domain: Interval::NON_POSITIVE,
        }
    );
    assert!(lines.contains(&"x = -2".to_string()));
    assert!(lines.contains(&"y is any integer in the interval (-inf,0]".to_string()));
}

#[test]
fn zero_b_with_forced_value_outside_its_domain_has_no_solution() {
    let (_, outcome) = report(
        -5,
        0,
        10,
        Interval::new(
            lde_interval::Bound::finite(-10),
            lde_interval::Bound::finite(-5),
            true,
            false,
        ),
        Interval::REAL,
    );
    assert_eq!(outcome, Outcome::NoSolution);
}

#[test]
fn indivisible_gcd_reports_no_solution_but_still_shows_the_trace() {
    let (lines, outcome) = report(10, 8, 99, Interval::POSITIVE, Interval::POSITIVE);
    assert_eq!(outcome, Outcome::NoSolution);
    assert!(lines.contains(&"By the Extended Euclidean Algorithm (EEA):".to_string()));
    assert!(lines.contains(&"GCD(10, 8) = 2".to_string()));
    assert!(lines.contains(&"Since 2 does not divide 99, the LDE has no solution.".to_string()));
}

#[test]
fn negative_coefficient_with_mixed_domains_keeps_a_nonempty_family() {
    let (_, outcome) = report(9, -5, 137, Interval::closed(-20, 30), Interval::POSITIVE);
    let f = family(outcome);
    assert_eq!((f.x0, f.y0, f.x_step, f.y_step), (-137, -274, -5, -9));
    assert_eq!(f.n_range, Interval::closed(-33, -31));
    for n in -33..=-31 {
        let (x, y) = (f.x0 + f.x_step * n, f.y0 + f.y_step * n);
        assert_eq!(9 * x - 5 * y, 137);
        assert!((-20..=30).contains(&x));
        assert!(y > 0);
    }
}

#[test]
fn domains_that_exclude_the_whole_family_report_no_solution() {
    // x - y = 5 with both variables pinned to [0,1].
    let (lines, outcome) = report(1, -1, 5, Interval::closed(0, 1), Interval::closed(0, 1));
    assert_eq!(outcome, Outcome::NoSolution);
    assert!(lines.contains(&"However, there does not exist an integer n such that:".to_string()));
    assert!(lines.contains(&"\tx ∈ [0,1]".to_string()));
    assert!(lines.contains(&"\ty ∈ [0,1]".to_string()));
    assert!(lines.contains(&"Therefore, the LDE has no solution.".to_string()));
}

#[test]
fn unrestricted_domains_leave_the_parameter_unbounded() {
    let (lines, outcome) = report(9, 5, 137, Interval::REAL, Interval::REAL);
    let f = family(outcome);
    assert_eq!(f.n_range, Interval::REAL);
    assert_eq!(f.n_range.count_integers(), IntegerCount::Unbounded);
    assert!(lines.contains(&"\tn ∈ (-inf,inf)".to_string()));
}
