use std::{
    io,
    string::FromUtf8Error,
    sync::{Arc, Mutex},
};

use tagtriage::{
    Harness,
    config::RunConfig,
    eval::BindingsEvaluator,
    filter::DefaultTagFilter,
    harness,
    input::NoInput,
    output::{ColorSetting, PrettyOutput, SupportsColor},
    trace::DefaultRecorder,
};

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Poison,
    FromUtf8(FromUtf8Error),
}

#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.flush()
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl Buffer {
    pub fn try_to_string(&self) -> Result<String, Error> {
        let guard = self.0.lock().map_err(|_| Error::Poison)?;
        String::from_utf8(guard.to_vec()).map_err(Error::FromUtf8)
    }
}

pub type Buffered =
    Harness<DefaultTagFilter, PrettyOutput<Buffer>, NoInput, DefaultRecorder, BindingsEvaluator>;

/// A harness printing into a fresh buffer.
///
/// The buffer is no terminal, so the prompt only opens with `Interactivity::Always`.
pub fn buffered(config: RunConfig) -> (Buffered, Buffer) {
    let buffer = Buffer::default();
    let harness = harness(config)
        .with_output(
            PrettyOutput::default()
                .with_target(buffer.clone())
                .with_color_setting(ColorSetting::Never),
        )
        .with_input(NoInput);
    (harness, buffer)
}
