// ============================================================================
// Basic Usage Example
// ============================================================================
//
// cargo run --example basic_usage -- 2/-4 3/9 2
//
// Arguments (all optional): first fraction, second fraction, test integer.

use exact_fraction::prelude::*;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run() -> NumericResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let arg = |i: usize, default: &str| args.get(i).cloned().unwrap_or_else(|| default.to_string());

    let frac1: Fraction = arg(0, "2/-4").parse()?;
    let frac2: Fraction = arg(1, "3/9").parse()?;
    let test_int: i64 = arg(2, "2").parse().map_err(|_| NumericError::InvalidInput)?;

    println!("=== Fraction Example ===\n");
    println!("First fraction = {}", frac1);
    println!("Second fraction = {}\n", frac2);

    println!("{} + {} = {}", frac1, frac2, frac1.checked_add(frac2)?);
    println!("{} - {} = {}", frac1, frac2, frac1.checked_sub(frac2)?);
    println!("{} * {} = {}", frac1, frac2, frac1.checked_mul(frac2)?);
    println!("{} / {} = {}", frac1, frac2, display(frac1.checked_div(frac2)));

    println!("{} + {} = {}", frac1, test_int, frac1.checked_add(test_int)?);
    println!("{} - {} = {}", frac1, test_int, frac1.checked_sub(test_int)?);
    println!("{} * {} = {}", frac1, test_int, frac1.checked_mul(test_int)?);
    println!("{} / {} = {}", frac1, test_int, display(frac1.checked_div(test_int)));

    println!("\n{} in lowest terms: {}", frac1, frac1.is_in_lowest_terms());
    println!("{} in lowest terms: {}\n", frac2, frac2.is_in_lowest_terms());

    println!("Reciprocal of {} is {}", frac1, display(frac1.reciprocal()));
    println!("Reciprocal of {} is {}", frac2, display(frac2.reciprocal()));

    let mut working = frac1;
    println!("\n{} expanded by {} = {}", frac1, test_int, display(working.expand(test_int).map(|f| *f)));
    let before = working;
    println!("{} reduced by {} = {}", before, test_int, display(working.reduce_by(test_int).map(|f| *f)));
    println!("{} simplified = {}", frac1, frac1.simplified()?);

    Ok(())
}

/// Show division-by-zero and similar faults inline instead of aborting the report.
fn display(result: NumericResult<Fraction>) -> String {
    match result {
        Ok(f) => f.to_string(),
        Err(err) => format!("<{}>", err),
    }
}
