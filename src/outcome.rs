use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TestOutcome {
    pub description: String,
    pub tags: Vec<String>,
    pub status: TestStatus,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }

    pub fn skipped(&self) -> bool {
        self.status.skipped()
    }

    pub fn pending(&self) -> bool {
        self.status.pending()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Failed(TestFailure),
    /// Filtered out by the tag configuration, the body never ran.
    Skipped,
    /// Declared without a body.
    Pending,
}

impl TestStatus {
    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }

    pub fn skipped(&self) -> bool {
        matches!(self, TestStatus::Skipped)
    }

    pub fn pending(&self) -> bool {
        matches!(self, TestStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The body returned a false-like value.
    Refuted,
    /// The body returned an error.
    Error {
        message: String,
        kind: Cow<'static, str>,
    },
    Panicked(String),
}

impl TestFailure {
    pub fn message(&self) -> Option<&str> {
        match self {
            TestFailure::Refuted => None,
            TestFailure::Error { message, .. } => Some(message),
            TestFailure::Panicked(message) => Some(message),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            TestFailure::Refuted => "refuted",
            TestFailure::Error { kind, .. } => kind,
            TestFailure::Panicked(_) => "panic",
        }
    }
}
