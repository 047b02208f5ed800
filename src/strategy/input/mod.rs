//! Where the recovery prompt reads operator commands from.

use std::io::{self, BufRead};

use crossbeam_channel::Receiver;

mod no;
pub use no::*;

pub trait InputSource {
    /// Read one line without its line break, `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl InputSource for io::Stdin {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim_end_matches(['\n', '\r']).to_string())),
        }
    }
}

/// Lines sent by another thread, or queued up front for a scripted operator.
///
/// A disconnected and drained channel counts as the end of input.
impl InputSource for Receiver<String> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.recv().ok())
    }
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}
