//! Command-line front end: parses the equation and domains once, prints the
//! derivation verbatim. Interactive prompting lives outside this tool.

use anyhow::Result;
use clap::Parser;
use lde_engine::{Lde, Outcome};
use lde_interval::Interval;
use tracing_subscriber::EnvFilter;

/// Solve the linear Diophantine equation ax + by = c over interval domains.
///
/// Domains accept a preset name (real, positive, negative, nonneg, nonpos)
/// or an interval literal such as "[-20,30)" or "(-inf,137/5]".
#[derive(Parser, Debug)]
#[command(name = "lde", version, about)]
struct Args {
    /// Coefficient of x
    #[arg(allow_negative_numbers = true)]
    a: i64,
    /// Coefficient of y
    #[arg(allow_negative_numbers = true)]
    b: i64,
    /// Constant term
    #[arg(allow_negative_numbers = true)]
    c: i64,
    /// Domain of x
    #[arg(long, default_value = "real")]
    x_domain: Interval,
    /// Domain of y
    #[arg(long, default_value = "real")]
    y_domain: Interval,
    /// Exit with a nonzero status when no solution exists
    #[arg(long)]
    strict: bool,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let lde = Lde::with_domains(args.a, args.b, args.c, args.x_domain, args.y_domain);
    let report = lde.solve_report();
    print!("{}", report.derivation);

    if args.strict && report.outcome == Outcome::NoSolution {
        std::process::exit(1);
    }
    Ok(())
}
