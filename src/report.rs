use std::{
    io,
    process::{ExitCode, Termination},
};

use crate::outcome::{TestOutcome, TestStatus};

/// What a run leaves behind for the host.
#[derive(Debug)]
#[non_exhaustive]
pub struct RunReport {
    /// Every test that ran passed and the operator did not quit or reload.
    pub success: bool,
    /// The operator asked for the tests to be loaded and run again.
    pub reload: bool,
    /// Every declared test, in declaration order.
    pub outcomes: Vec<TestOutcome>,
    /// Output failures the run carried on through.
    pub output_errors: Vec<io::Error>,
}

impl RunReport {
    fn count(&self, pred: impl Fn(&TestStatus) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| pred(&outcome.status))
            .count()
    }

    pub fn passed(&self) -> usize {
        self.count(|status| matches!(status, TestStatus::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, TestStatus::Failed(_)))
    }

    pub fn pending(&self) -> usize {
        self.count(|status| matches!(status, TestStatus::Pending))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, TestStatus::Skipped))
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.success {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        }
    }
}

impl Termination for RunReport {
    fn report(self) -> ExitCode {
        self.exit_code()
    }
}
