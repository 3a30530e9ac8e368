//! Error types for the runner

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog registration error
    #[error("registration error: {0}")]
    Registration(#[from] advent_core::RegistrationError),

    /// Inputs missing for selected puzzles
    #[error("{0} input file(s) missing")]
    MissingInputs(usize),

    /// Runner error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Runner(#[from] ArcRunnerError),
}

/// Runner-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcRunnerError))]
pub enum RunnerError {
    /// Report channel closed before the run finished
    #[error("report channel closed early")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcRunnerError>),
}

impl ArcRunnerError {
    /// Combine two Arc-wrapped errors into one `Multiple`
    pub fn combine(first: ArcRunnerError, second: ArcRunnerError) -> ArcRunnerError {
        let errors = match (first.inner(), second.inner()) {
            (RunnerError::Multiple(v1), RunnerError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, RunnerError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (RunnerError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        RunnerError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcRunnerError>,
        new: ArcRunnerError,
    ) -> ArcRunnerError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Errors from the input store
#[derive(Error, Debug)]
pub enum InputError {
    /// The expected input file does not exist
    #[error("missing input file {}", .path.display())]
    Missing { path: PathBuf },

    /// The input file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
