use std::io;

use crate::output::{OutputSink, Style};

/// A sink that prints nothing but still tracks nesting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoOutput {
    level: usize,
}

impl OutputSink for NoOutput {
    fn write(&mut self, _: Style, _: &str) -> io::Result<()> {
        Ok(())
    }

    fn write_unindented(&mut self, _: Style, _: &str) -> io::Result<()> {
        Ok(())
    }

    fn line(&mut self, _: Style, _: &str) -> io::Result<()> {
        Ok(())
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    fn indentation(&self) -> String {
        "  ".repeat(self.level)
    }
}
