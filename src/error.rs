use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a run stopped before all of its groups finished.
///
/// Group and test bodies return [`Flow`] so a halt travels up to the harness with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Halt {
    #[error("run stopped by the operator")]
    Quit,
    #[error("reload requested by the operator")]
    Reload,
}

pub type Flow = Result<(), Halt>;

/// A failed attempt to look at a trace frame from the recovery prompt.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{choice} is not a valid backtrace line, please try again.")]
    InvalidFrame { choice: String },

    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line} is outside of {} ({len} lines)", .path.display())]
    LineOutOfRange {
        path: PathBuf,
        line: usize,
        len: usize,
    },
}

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("nothing to evaluate")]
    Empty,

    #[error("`{0}` is not bound in the failing scope")]
    Unbound(String),

    #[error("expression evaluation is not available")]
    Unsupported,

    #[error("operator session failed: {0}")]
    Io(#[from] io::Error),
}
