//! Line oriented console output with nesting.
//!
//! Everything the engine prints goes through an [`OutputSink`]. Sinks keep an indent
//! level that groups raise while their body runs, so nested tests print nested.

use std::io;

mod color;
pub use color::*;

mod no;
pub use no::*;

mod pretty;
pub use pretty::*;

/// How a line should stand out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    #[default]
    Plain,
    Passed,
    Failed,
    Pending,
    /// The target line of a source window.
    Highlight,
}

pub trait OutputSink {
    /// Write indented text without ending the line.
    fn write(&mut self, style: Style, text: &str) -> io::Result<()>;

    /// Write text as is, without indentation or line break.
    fn write_unindented(&mut self, style: Style, text: &str) -> io::Result<()>;

    /// Write an indented line. An empty `text` writes a bare line break.
    fn line(&mut self, style: Style, text: &str) -> io::Result<()>;

    fn indent(&mut self);

    fn dedent(&mut self);

    /// The whitespace currently put in front of every line.
    fn indentation(&self) -> String;

    fn is_terminal(&self) -> bool {
        false
    }
}

impl<O: OutputSink + ?Sized> OutputSink for &mut O {
    fn write(&mut self, style: Style, text: &str) -> io::Result<()> {
        (**self).write(style, text)
    }

    fn write_unindented(&mut self, style: Style, text: &str) -> io::Result<()> {
        (**self).write_unindented(style, text)
    }

    fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        (**self).line(style, text)
    }

    fn indent(&mut self) {
        (**self).indent()
    }

    fn dedent(&mut self) {
        (**self).dedent()
    }

    fn indentation(&self) -> String {
        (**self).indentation()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

/// `" (a, b)"` for a non empty tag list, nothing otherwise.
pub(crate) fn taggings<S: AsRef<str>>(tags: &[S]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
    format!(" ({})", joined.join(", "))
}
