use crate::{
    config::TagConfig,
    filter::{TagDecision, TagFilter},
};

/// The [`TagFilter`] built from the run's [`TagConfig`].
///
/// A test executes when the include list is empty or shares a tag with the test, and
/// the exclude list is empty or shares no tag with the test.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefaultTagFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl DefaultTagFilter {
    pub fn new(config: TagConfig) -> Self {
        Self {
            include: config.include,
            exclude: config.exclude,
        }
    }
}

impl From<TagConfig> for DefaultTagFilter {
    fn from(value: TagConfig) -> Self {
        Self::new(value)
    }
}

fn intersects(tags: &[String], wanted: &[String]) -> bool {
    tags.iter().any(|tag| wanted.contains(tag))
}

impl TagFilter for DefaultTagFilter {
    fn decide(&self, tags: &[String]) -> TagDecision {
        let included = self.include.is_empty() || intersects(tags, &self.include);
        let excluded = !self.exclude.is_empty() && intersects(tags, &self.exclude);
        TagDecision::from(included && !excluded)
    }
}
