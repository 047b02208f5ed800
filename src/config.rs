//! Run configuration, built once by the host and handed to [`harness`](crate::harness).

use std::env;

use tracing::debug;

/// Default size of the source window shown for a trace frame.
pub const DEFAULT_CONTEXT_LINES: usize = 50;

/// Tags a test must carry (`include`) or must not carry (`exclude`) to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl TagConfig {
    /// Split `+name` entries into `include` and `-name` entries into `exclude`.
    ///
    /// Entries without a sign are ignored.
    pub fn parse<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = TagConfig::default();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if let Some(name) = tag.strip_prefix('+') {
                config.include.push(name.to_string());
            } else if let Some(name) = tag.strip_prefix('-') {
                config.exclude.push(name.to_string());
            } else if !tag.is_empty() {
                debug!(tag, "ignoring tag without +/- prefix");
            }
        }
        config
    }

    /// Read tags from an environment variable, separated by whitespace or commas.
    ///
    /// A missing or non unicode variable gives an empty configuration.
    pub fn from_env(var: &str) -> Self {
        match env::var(var) {
            Ok(value) => Self::parse(value.split(|c: char| c.is_whitespace() || c == ',')),
            Err(_) => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// Whether a failing test may stop the run and wait for the operator.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Interactivity {
    /// Prompt only when the output sink is attached to a terminal.
    #[default]
    Automatic,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tags: TagConfig,
    pub interactivity: Interactivity,
    pub context_lines: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tags: TagConfig::default(),
            interactivity: Interactivity::default(),
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

impl RunConfig {
    pub fn with_tags(self, tags: TagConfig) -> Self {
        Self { tags, ..self }
    }

    pub fn with_interactivity(self, interactivity: Interactivity) -> Self {
        Self {
            interactivity,
            ..self
        }
    }

    pub fn with_context_lines(self, context_lines: usize) -> Self {
        Self {
            context_lines,
            ..self
        }
    }
}
