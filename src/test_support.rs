use std::{
    fmt, io,
    sync::{Arc, Mutex},
};

use crossbeam_channel::Receiver;

use crate::{
    Harness,
    config::RunConfig,
    eval::BindingsEvaluator,
    filter::DefaultTagFilter,
    input::NoInput,
    output::{ColorSetting, NoOutput, PrettyOutput, SupportsColor},
    trace::DefaultRecorder,
};

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
        Ok(())
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.0.lock().map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&guard))
    }
}

pub fn quiet_output(buffer: Buffer) -> PrettyOutput<Buffer> {
    PrettyOutput::default()
        .with_target(buffer)
        .with_color_setting(ColorSetting::Never)
}

/// An operator that types `lines` and then walks away.
pub fn scripted(lines: &[&str]) -> Receiver<String> {
    let (tx, rx) = crossbeam_channel::unbounded();
    for line in lines {
        let _ = tx.send(line.to_string());
    }
    rx
}

pub fn quiet_harness(
    config: RunConfig,
) -> Harness<DefaultTagFilter, NoOutput, NoInput, DefaultRecorder, BindingsEvaluator> {
    Harness {
        filter: DefaultTagFilter::new(config.tags.clone()),
        output: NoOutput::default(),
        input: NoInput,
        recorder: DefaultRecorder::default(),
        evaluator: BindingsEvaluator,
        config,
    }
}

pub fn buffered_harness(
    config: RunConfig,
) -> (
    Harness<DefaultTagFilter, PrettyOutput<Buffer>, NoInput, DefaultRecorder, BindingsEvaluator>,
    Buffer,
) {
    let buffer = Buffer::default();
    let harness = quiet_harness(config).with_output(quiet_output(buffer.clone()));
    (harness, buffer)
}
