use std::io;

use crate::output::Style;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    #[default]
    Automatic,
    Always,
    Never,
}

pub(crate) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

impl Style {
    pub(crate) fn color(self) -> Option<&'static str> {
        match self {
            Style::Plain => None,
            Style::Passed => Some(colors::GREEN),
            Style::Failed => Some(colors::RED),
            Style::Pending | Style::Highlight => Some(colors::YELLOW),
        }
    }
}

/// Output targets that know whether they are attached to a terminal.
///
/// Terminal targets get colors under [`ColorSetting::Automatic`] and enable the recovery
/// prompt under [`Interactivity::Automatic`](crate::config::Interactivity::Automatic).
pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl SupportsColor for io::Stdout {
    fn supports_color(&self) -> bool {
        io::IsTerminal::is_terminal(self)
    }
}

impl SupportsColor for io::Stderr {
    fn supports_color(&self) -> bool {
        io::IsTerminal::is_terminal(self)
    }
}

impl SupportsColor for Vec<u8> {
    fn supports_color(&self) -> bool {
        false
    }
}

impl<T: SupportsColor + ?Sized> SupportsColor for &mut T {
    fn supports_color(&self) -> bool {
        (**self).supports_color()
    }
}
