//! The recovery prompt entered when a test fails on an interactive run.
//!
//! The prompt loops until the operator continues the run, quits it, or asks for a
//! reload. Everything else (looking at the trace, at source around a frame, evaluating
//! bindings) prints something, repeats the failure line and asks again.

use std::io;

use tracing::{debug, warn};

use crate::{
    error::{Flow, Halt, InspectError},
    eval::{Evaluator, Scope, Session},
    input::InputSource,
    output::{OutputSink, Style},
    source,
    trace::TraceRecorder,
};

const PROMPT: &str = "Action? [c,e,i,q,r,t,#,?]? ";

const HELP: &[&str] = &[
    "c - ignore this error and continue",
    "e - evaluate an expression in the failing scope",
    "i - interactive mode",
    "q - quit",
    "r - reload and run the tests again",
    "t - display backtrace",
    "# - enter a number of a backtrace line to see its context",
    "? - display help",
];

/// How the run goes on after the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
    Reload,
}

impl Signal {
    pub fn into_flow(self) -> Flow {
        match self {
            Signal::Continue => Ok(()),
            Signal::Quit => Err(Halt::Quit),
            Signal::Reload => Err(Halt::Reload),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Continue,
    Eval(String),
    Interactive,
    Quit,
    Reload,
    Backtrace,
    Help,
    /// 1-based number of a trace frame, as typed.
    Frame(String),
    Invalid(String),
}

impl Command {
    pub fn parse(choice: &str) -> Self {
        let choice = choice.trim();
        match choice {
            "c" | "continue" => return Command::Continue,
            "i" | "interactive" | "irb" => return Command::Interactive,
            "q" | "quit" | "exit" => return Command::Quit,
            "r" | "reload" => return Command::Reload,
            "t" | "backtrace" | "trace" => return Command::Backtrace,
            "?" | "help" => return Command::Help,
            _ => {}
        }

        if let Some(expr) = choice
            .strip_prefix("eval ")
            .or_else(|| choice.strip_prefix("e "))
        {
            return Command::Eval(expr.trim().to_string());
        }

        match !choice.is_empty() && choice.bytes().all(|b| b.is_ascii_digit()) {
            true => Command::Frame(choice.to_string()),
            false => Command::Invalid(choice.to_string()),
        }
    }
}

pub(crate) struct Prompt<'p> {
    pub output: &'p mut dyn OutputSink,
    pub input: &'p mut dyn InputSource,
    pub recorder: &'p dyn TraceRecorder,
    pub evaluator: &'p mut dyn Evaluator,
    pub context_lines: usize,
}

impl Prompt<'_> {
    /// Ask until a command ends the prompt. `failure` is repeated between commands.
    pub fn run(&mut self, failure: &str, scope: &Scope) -> io::Result<Signal> {
        loop {
            self.output.write(Style::Plain, PROMPT)?;
            let choice = match self.input.read_line() {
                Ok(Some(choice)) => choice.trim().to_string(),
                Ok(None) => {
                    debug!("operator input exhausted, continuing");
                    self.output.line(Style::Plain, "")?;
                    return Ok(Signal::Continue);
                }
                Err(err) => {
                    warn!(%err, "failed to read operator input, continuing");
                    self.output.line(Style::Plain, "")?;
                    return Ok(Signal::Continue);
                }
            };
            self.output.line(Style::Plain, "")?;

            let command = Command::parse(&choice);
            debug!(?command, "prompt command");
            match command {
                Command::Continue => return Ok(Signal::Continue),
                Command::Quit => return Ok(Signal::Quit),
                Command::Reload => {
                    self.output.line(Style::Plain, "Reloading...")?;
                    return Ok(Signal::Reload);
                }
                Command::Eval(expr) => match self.evaluator.eval(&expr, scope) {
                    Ok(value) => self.output.line(Style::Plain, &value)?,
                    Err(err) => self.output.line(Style::Failed, &err.to_string())?,
                },
                Command::Interactive => self.interactive(scope)?,
                Command::Backtrace => self.backtrace()?,
                Command::Help => {
                    for line in HELP {
                        self.output.line(Style::Plain, line)?;
                    }
                }
                Command::Frame(choice) => self.frame(&choice)?,
                Command::Invalid(choice) => self.output.line(
                    Style::Failed,
                    &format!("{choice} is not a valid choice, please try again."),
                )?,
            }

            self.output.line(Style::Plain, "")?;
            self.output.line(Style::Failed, &format!("- {failure}"))?;
        }
    }

    fn indented(&mut self, f: impl FnOnce(&mut Self) -> io::Result<()>) -> io::Result<()> {
        self.output.indent();
        let result = f(self);
        self.output.dedent();
        result
    }

    fn interactive(&mut self, scope: &Scope) -> io::Result<()> {
        self.output
            .line(Style::Plain, "Starting interactive session...")?;
        let session = Session {
            prefix: self.output.indentation(),
            input: &mut *self.input,
            output: &mut *self.output,
        };
        if let Err(err) = self.evaluator.interactive(scope, session) {
            self.output.line(Style::Failed, &err.to_string())?;
        }
        Ok(())
    }

    fn backtrace(&mut self) -> io::Result<()> {
        self.indented(|prompt| {
            let frames = prompt.recorder.frames();
            if frames.is_empty() {
                return prompt.output.line(Style::Plain, "no backtrace available");
            }
            for (index, frame) in frames.iter().enumerate() {
                prompt
                    .output
                    .line(Style::Plain, &format!("{index:>2}  {}", frame.label))?;
            }
            Ok(())
        })
    }

    fn frame(&mut self, choice: &str) -> io::Result<()> {
        let frame = choice
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| self.recorder.frames().get(index))
            .cloned();
        let Some(frame) = frame else {
            let err = InspectError::InvalidFrame {
                choice: choice.to_string(),
            };
            return self.output.line(Style::Failed, &err.to_string());
        };

        let context_lines = self.context_lines;
        self.indented(|prompt| {
            prompt.output.line(Style::Plain, &format!("{frame}: "))?;
            prompt.indented(|prompt| {
                prompt.output.line(Style::Plain, "")?;
                match source::read_window(&frame.file, frame.line as usize, context_lines) {
                    Ok(window) => {
                        for line in window {
                            let style = match line.target {
                                true => Style::Highlight,
                                false => Style::Plain,
                            };
                            prompt
                                .output
                                .line(style, &format!("{}  {}", line.number, line.text))?;
                        }
                        Ok(())
                    }
                    Err(err) => prompt.output.line(Style::Failed, &err.to_string()),
                }
            })
        })
    }
}
