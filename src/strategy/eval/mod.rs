//! Expression evaluation in the scope of a failing test.
//!
//! Rust has no way to capture a live lexical scope, so a test body publishes the values
//! worth looking at through [`Probe::bind`](crate::Probe::bind). The recovery prompt hands
//! those bindings to an [`Evaluator`] for its `eval` and `interactive` commands.

use std::fmt::Debug;

use crate::{error::EvalError, input::InputSource, output::OutputSink};

mod default;
pub use default::*;

mod no;
pub use no::*;

/// Values published by a test body, rendered with their `Debug` representation at the
/// time they were bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: Vec<(String, String)>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing an earlier binding of the same name.
    pub fn bind(&mut self, name: impl Into<String>, value: &(impl Debug + ?Sized)) {
        let name = name.into();
        let rendered = format!("{value:?}");
        match self.bindings.iter_mut().find(|(bound, _)| *bound == name) {
            Some((_, slot)) => *slot = rendered,
            None => self.bindings.push((name, rendered)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// What an interactive session may use while it has control.
pub struct Session<'s> {
    /// Indentation of the failing test. Evaluators put it in front of what they print
    /// with [`OutputSink::write_unindented`].
    pub prefix: String,
    pub input: &'s mut dyn InputSource,
    pub output: &'s mut dyn OutputSink,
}

pub trait Evaluator {
    /// Evaluate `expr` against the failing test's scope and render the result.
    fn eval(&mut self, expr: &str, scope: &Scope) -> Result<String, EvalError>;

    /// Hand control to an interactive session until the operator leaves it.
    fn interactive(&mut self, scope: &Scope, session: Session<'_>) -> Result<(), EvalError>;
}
