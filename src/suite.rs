//! The context object test bodies run against.
//!
//! A [`Suite`] is handed to every group body. It keeps a stack of open groups, each with
//! its own tags, before/after hooks and success accumulator, and it runs tests as soon
//! as they are declared:
//!
//! 1. the tags of all open groups plus the test's own decide whether it runs
//! 2. the trace window opens and every before-hook of every open group runs,
//!    outermost group first
//! 3. the body runs; a panic or an `Err` is caught and recorded as a trace frame
//! 4. unless the body raised, every after-hook runs, again outermost group first
//! 5. the result is printed and, on an interactive run, a failure opens the
//!    recovery prompt
//!
//! Hooks are not protected: a panicking hook unwinds out of the whole run.

use std::{
    fmt::Debug,
    io,
    panic::{AssertUnwindSafe, Location, catch_unwind},
};

use tracing::{debug, info, warn};

use crate::{
    capture::{self, ArmedBody},
    error::{Flow, Halt},
    eval::{Evaluator, Scope},
    filter::{TagDecision, TagFilter},
    input::InputSource,
    outcome::{TestFailure, TestOutcome, TestStatus},
    output::{OutputSink, Style, taggings},
    prompt::{Prompt, Signal},
    test::{Raised, TestResult},
    trace::{TraceFrame, TraceRecorder},
};

type Hook<'h> = Box<dyn FnMut() + 'h>;

struct Group<'h> {
    tags: Vec<String>,
    befores: Vec<Hook<'h>>,
    afters: Vec<Hook<'h>>,
    success: bool,
}

impl Group<'_> {
    fn new(tags: Vec<String>) -> Self {
        Self {
            tags,
            befores: Vec::new(),
            afters: Vec::new(),
            success: true,
        }
    }
}

pub(crate) struct Collaborators<'h> {
    pub filter: Box<dyn TagFilter + 'h>,
    pub output: Box<dyn OutputSink + 'h>,
    pub input: Box<dyn InputSource + 'h>,
    pub recorder: Box<dyn TraceRecorder + 'h>,
    pub evaluator: Box<dyn Evaluator + 'h>,
}

pub struct Suite<'h> {
    groups: Vec<Group<'h>>,
    filter: Box<dyn TagFilter + 'h>,
    output: Box<dyn OutputSink + 'h>,
    input: Box<dyn InputSource + 'h>,
    recorder: Box<dyn TraceRecorder + 'h>,
    evaluator: Box<dyn Evaluator + 'h>,
    interactive: bool,
    context_lines: usize,
    pub(crate) outcomes: Vec<TestOutcome>,
    pub(crate) output_errors: Vec<io::Error>,
}

/// What a test body gets to talk to the engine.
pub struct Probe<'p> {
    recorder: &'p mut dyn TraceRecorder,
    scope: &'p mut Scope,
}

impl Probe<'_> {
    /// Leave a breadcrumb frame at the caller's location.
    #[track_caller]
    pub fn mark(&mut self, label: impl Into<String>) {
        self.recorder.record(TraceFrame::at(Location::caller(), label));
    }

    /// Publish a value for `eval` and interactive sessions of the recovery prompt.
    pub fn bind(&mut self, name: impl Into<String>, value: &(impl Debug + ?Sized)) {
        self.scope.bind(name, value);
    }
}

fn owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

impl<'h> Suite<'h> {
    pub(crate) fn new(
        collaborators: Collaborators<'h>,
        interactive: bool,
        context_lines: usize,
    ) -> Self {
        let Collaborators {
            filter,
            output,
            input,
            recorder,
            evaluator,
        } = collaborators;
        Self {
            groups: Vec::new(),
            filter,
            output,
            input,
            recorder,
            evaluator,
            interactive,
            context_lines,
            outcomes: Vec::new(),
            output_errors: Vec::new(),
        }
    }

    /// Declare a nested group and run its body right away.
    ///
    /// Returns whether every test in the group (and its subgroups) that ran passed.
    pub fn tests<F>(&mut self, description: &str, tags: &[&str], body: F) -> Result<bool, Halt>
    where
        F: FnOnce(&mut Self) -> Flow,
    {
        let tags = owned(tags);
        self.emit(Style::Plain, &format!("{description}{}", taggings(&tags)));
        debug!(group = description, depth = self.groups.len(), "entering group");

        self.groups.push(Group::new(tags));
        self.output.indent();
        let flow = body(self);
        self.output.dedent();

        let success = match self.groups.pop() {
            Some(group) => group.success,
            None => true,
        };
        if let Some(parent) = self.groups.last_mut() {
            parent.success &= success;
        }
        debug!(group = description, success, "leaving group");

        flow.map(|()| success)
    }

    /// Register a hook that runs before every test of the innermost open group.
    pub fn before(&mut self, hook: impl FnMut() + 'h) {
        if let Some(group) = self.groups.last_mut() {
            group.befores.push(Box::new(hook));
        }
    }

    /// Register a hook that runs after every test of the innermost open group whose body
    /// did not raise.
    pub fn after(&mut self, hook: impl FnMut() + 'h) {
        if let Some(group) = self.groups.last_mut() {
            group.afters.push(Box::new(hook));
        }
    }

    /// Declare a test and run it right away.
    ///
    /// Returns whether it passed; tests filtered out by tags count as not passed.
    /// An `Err` is only returned when the operator quit or reloaded from the prompt.
    #[track_caller]
    pub fn test<F, T>(&mut self, description: &str, tags: &[&str], body: F) -> Result<bool, Halt>
    where
        F: FnOnce(&mut Probe<'_>) -> T,
        T: Into<TestResult>,
    {
        let call_site = Location::caller();
        let tags = owned(tags);
        if !self.selected(description, &tags) {
            return Ok(false);
        }

        debug!(test = description, "running test");
        self.recorder.start();
        self.run_hooks(|group| &mut group.befores);

        let mut scope = Scope::new();
        let result = {
            let _armed = ArmedBody::arm();
            let mut probe = Probe {
                recorder: &mut *self.recorder,
                scope: &mut scope,
            };
            // the body is not touched again after a panic
            catch_unwind(AssertUnwindSafe(|| -> TestResult { body(&mut probe).into() }))
        };

        let status = match result {
            Ok(TestResult(Ok(passed))) => {
                self.run_hooks(|group| &mut group.afters);
                self.recorder.stop();
                match passed {
                    true => TestStatus::Passed,
                    false => TestStatus::Failed(TestFailure::Refuted),
                }
            }
            Ok(TestResult(Err(Raised { message, kind }))) => {
                self.recorder.stop();
                let (file, line) = (call_site.file().to_string(), call_site.line());
                self.raised(description, &message, &kind, file, line);
                TestStatus::Failed(TestFailure::Error { message, kind })
            }
            Err(payload) => {
                self.recorder.stop();
                let message = capture::payload_as_string(payload);
                let (file, line) = capture::take_location()
                    .unwrap_or_else(|| (call_site.file().to_string(), call_site.line()));
                self.raised(description, &message, "panic", file, line);
                TestStatus::Failed(TestFailure::Panicked(message))
            }
        };

        let passed = status.passed();
        if let Some(group) = self.groups.last_mut() {
            group.success &= passed;
        }
        let line = format!("{description}{}", taggings(&tags));
        self.outcomes.push(TestOutcome {
            description: description.to_string(),
            tags,
            status,
        });

        if passed {
            self.emit(Style::Passed, &format!("+ {line}"));
            return Ok(true);
        }

        self.emit(Style::Failed, &format!("- {line}"));
        match self.interactive {
            true => self.triage(description, &scope).into_flow().map(|()| false),
            false => Ok(false),
        }
    }

    /// Declare a test without a body.
    pub fn pending(&mut self, description: &str, tags: &[&str]) {
        let tags = owned(tags);
        if !self.selected(description, &tags) {
            return;
        }

        self.emit(
            Style::Pending,
            &format!("* {description}{}", taggings(&tags)),
        );
        self.outcomes.push(TestOutcome {
            description: description.to_string(),
            tags,
            status: TestStatus::Pending,
        });
    }

    /// Consult the tag filter, printing and recording the test if it is filtered out.
    fn selected(&mut self, description: &str, tags: &[String]) -> bool {
        let path: Vec<String> = self
            .groups
            .iter()
            .flat_map(|group| group.tags.iter())
            .chain(tags)
            .cloned()
            .collect();
        if self.filter.decide(&path) == TagDecision::Execute {
            return true;
        }

        info!(test = description, tags = ?path, "filtered out by tags");
        self.emit(Style::Plain, &format!("_ {description}{}", taggings(tags)));
        self.outcomes.push(TestOutcome {
            description: description.to_string(),
            tags: tags.to_vec(),
            status: TestStatus::Skipped,
        });
        false
    }

    fn run_hooks(&mut self, hooks: impl for<'g> Fn(&'g mut Group<'h>) -> &'g mut Vec<Hook<'h>>) {
        for group in self.groups.iter_mut() {
            for hook in hooks(group).iter_mut() {
                hook();
            }
        }
    }

    fn raised(&mut self, description: &str, message: &str, kind: &str, file: String, line: u32) {
        let label = format!("in {description}! {message} ({kind})");
        self.recorder.unshift(TraceFrame::new(file, line, label));
        self.emit(Style::Failed, &format!("{message} ({kind})"));
    }

    fn triage(&mut self, description: &str, scope: &Scope) -> Signal {
        let mut prompt = Prompt {
            output: &mut *self.output,
            input: &mut *self.input,
            recorder: &*self.recorder,
            evaluator: &mut *self.evaluator,
            context_lines: self.context_lines,
        };
        let signal = match prompt.run(description, scope) {
            Ok(signal) => signal,
            Err(err) => {
                warn!(%err, "recovery prompt could not write, continuing");
                self.output_errors.push(err);
                Signal::Continue
            }
        };
        match signal {
            Signal::Continue => debug!(test = description, "continuing after failure"),
            Signal::Quit | Signal::Reload => warn!(test = description, ?signal, "run halted"),
        }
        signal
    }

    pub(crate) fn emit(&mut self, style: Style, text: &str) {
        if let Err(err) = self.output.line(style, text) {
            warn!(%err, "failed to write output");
            self.output_errors.push(err);
        }
    }
}
