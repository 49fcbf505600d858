use log::{Level, debug, log_enabled};

use crate::exec::RunOutcome;

/// Number of trailing values echoed in the summary.
const TAIL: usize = 3;

/// Prints the stdout summary of a completed run: timing, then the tail of
/// the final `Y` and of the per-iteration averages.
///
/// # Arguments
/// * `y` - The final vector.
/// * `outcome` - The run's averages and metrics.
pub fn print_summary(y: &[f64], outcome: &RunOutcome) {
    println!("Execution time: {:.6} ms", outcome.metrics.compute_millis());
    println!("Last {TAIL} values of Y: {}", tail(y));
    println!("Last {TAIL} values of Y_avgs: {}", tail(&outcome.averages));
}

/// Dumps a full vector on one line at debug level.
///
/// Diagnostic only; enabled with `RUST_LOG=debug`. The formatting cost is
/// skipped entirely when the debug level is off.
pub fn debug_dump(label: &str, values: &[f64]) {
    if log_enabled!(Level::Debug) {
        debug!("{label} = [ {} ]", join(values));
    }
}

fn tail(values: &[f64]) -> String {
    let start = values.len().saturating_sub(TAIL);
    join(&values[start..])
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_takes_last_three() {
        assert_eq!(tail(&[1.0, 2.0, 3.0, 4.0]), "2.000000, 3.000000, 4.000000");
    }

    #[test]
    fn tail_of_short_vector_takes_what_exists() {
        assert_eq!(tail(&[1.5]), "1.500000");
        assert_eq!(tail(&[]), "");
    }
}
