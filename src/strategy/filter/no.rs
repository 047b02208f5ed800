use crate::filter::{TagDecision, TagFilter};

/// Runs every test regardless of its tags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoFilter;

impl TagFilter for NoFilter {
    fn decide(&self, _: &[String]) -> TagDecision {
        TagDecision::Execute
    }
}
