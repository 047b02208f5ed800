//! Tag based test selection.
//!
//! Every test carries the tags of its enclosing groups plus its own. A [`TagFilter`]
//! looks at that accumulated list and decides whether the body runs. Tests that do not
//! run are still printed, with a neutral marker, but never affect the run's success.

mod default;
pub use default::*;

mod no;
pub use no::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDecision {
    Execute,
    Skip,
}

impl From<bool> for TagDecision {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Execute,
            false => Self::Skip,
        }
    }
}

/// A pure selection strategy: the same tags always give the same decision.
pub trait TagFilter {
    fn decide(&self, tags: &[String]) -> TagDecision;
}

impl<F> TagFilter for F
where
    F: Fn(&[String]) -> TagDecision,
{
    fn decide(&self, tags: &[String]) -> TagDecision {
        self(tags)
    }
}
