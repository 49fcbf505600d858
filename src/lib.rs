pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod exec;
pub mod metrics;
pub mod report;

pub use cli::parse_args;
pub use config::RunConfig;
pub use data::{Inputs, Partition, seeded_inputs};
pub use error::CliError;
pub use exec::{RunOutcome, Worker, execute};
pub use metrics::RunMetrics;
