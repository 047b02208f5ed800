use std::io;

use crate::input::InputSource;

/// Input that is always exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoInput;

impl InputSource for NoInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(None)
    }
}
