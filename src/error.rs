use std::fmt;

/// All errors that can occur while setting up a run.
#[derive(Debug)]
pub enum CliError {
    /// An argument that is not one of the supported flags — caught before
    /// any computation starts.
    UnknownArg(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArg(arg) => write!(f, "unknown option: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}
