use std::io;

use crate::output::{ColorSetting, OutputSink, Style, SupportsColor, colors::RESET};

const INDENT: &str = "  ";

/// The default sink, prints to stdout with two spaces per nesting level.
#[derive(Debug)]
pub struct PrettyOutput<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
    level: usize,
}

impl Default for PrettyOutput<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: Default::default(),
            level: 0,
        }
    }
}

impl<W: io::Write> PrettyOutput<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PrettyOutput<WithTarget> {
        PrettyOutput {
            target: with_target,
            color_setting: self.color_setting,
            level: self.level,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        PrettyOutput {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn target(&self) -> &W {
        &self.target
    }
}

impl<W: io::Write + SupportsColor> PrettyOutput<W> {
    /// Return whether this sink will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

impl<W: io::Write + SupportsColor> OutputSink for PrettyOutput<W> {
    fn write(&mut self, style: Style, text: &str) -> io::Result<()> {
        let indentation = self.indentation();
        self.target.write_all(indentation.as_bytes())?;
        self.write_unindented(style, text)
    }

    fn write_unindented(&mut self, style: Style, text: &str) -> io::Result<()> {
        match (style.color(), self.use_color()) {
            (Some(color), true) => write!(self.target, "{color}{text}{RESET}")?,
            _ => write!(self.target, "{text}")?,
        }
        // the prompt reads right after writing, it must be visible by then
        self.target.flush()
    }

    fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        if !text.is_empty() {
            self.write(style, text)?;
        }
        writeln!(self.target)?;
        self.target.flush()
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    fn indentation(&self) -> String {
        INDENT.repeat(self.level)
    }

    fn is_terminal(&self) -> bool {
        self.target.supports_color()
    }
}
