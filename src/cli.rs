use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::config::{
    DEFAULT_ITERS, DEFAULT_SEED, DEFAULT_THREADS, DEFAULT_VECTOR_LEN, MAX_VECTOR_LEN, RunConfig,
};
use crate::error::CliError;

/// Flag summary printed alongside the program name on a usage error.
pub const USAGE: &str =
    "[-p <vector size>] [-s <seed>] [-n <threads number>] [-i <maximum iterations>]";

/// Parses getopt-style flags into a `RunConfig`.
///
/// Every flag is optional. A flag whose value is missing or unparsable (this
/// includes zero for the counts that must be positive) keeps its default and
/// logs a diagnostic; anything that is not a supported flag is a usage error.
///
/// # Arguments
/// * `args` - The argument list, without the program name.
pub fn parse_args<I>(args: I) -> Result<RunConfig, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut vector_len = DEFAULT_VECTOR_LEN;
    let mut seed = DEFAULT_SEED;
    let mut n_threads = DEFAULT_THREADS;
    let mut max_iters = DEFAULT_ITERS;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-p" => {
                // Parsed signed so that a negative size trips the range
                // check below instead of being shrugged off as unparsable.
                if let Some(v) = flag_value::<i64>("-p", args.next()) {
                    assert!(
                        v > 0 && v <= MAX_VECTOR_LEN as i64,
                        "vector size must be in 1..={MAX_VECTOR_LEN}, got {v}"
                    );
                    vector_len = v as usize;
                }
            }
            "-s" => {
                if let Some(v) = flag_value("-s", args.next()) {
                    seed = v;
                }
            }
            "-n" => {
                if let Some(v) = flag_value("-n", args.next()) {
                    n_threads = v;
                }
            }
            "-i" => {
                if let Some(v) = flag_value("-i", args.next()) {
                    max_iters = v;
                }
            }
            other => return Err(CliError::UnknownArg(other.to_string())),
        }
    }

    Ok(RunConfig::new(vector_len, seed, n_threads, max_iters))
}

/// Parses the raw value of `flag`, or reports why the default is kept.
fn flag_value<T>(flag: &str, raw: Option<String>) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = raw else {
        warn!("option {flag} needs a value, keeping the default");
        return None;
    };

    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("invalid value {raw:?} for option {flag} ({e}), keeping the default");
            None
        }
    }
}
