use tracing::info;

use crate::{
    RunReport,
    capture::CapturePanicHookGuard,
    config::{Interactivity, RunConfig},
    error::{Flow, Halt},
    eval::Evaluator,
    filter::TagFilter,
    input::InputSource,
    output::{OutputSink, Style},
    suite::{Collaborators, Suite},
    trace::TraceRecorder,
};

use super::DEFAULT_DESCRIPTION;

pub struct Harness<Filter, Output, Input, Recorder, Eval> {
    pub(crate) config: RunConfig,
    pub(crate) filter: Filter,
    pub(crate) output: Output,
    pub(crate) input: Input,
    pub(crate) recorder: Recorder,
    pub(crate) evaluator: Eval,
}

impl<Filter, Output, Input, Recorder, Eval> Harness<Filter, Output, Input, Recorder, Eval>
where
    Filter: TagFilter,
    Output: OutputSink,
    Input: InputSource,
    Recorder: TraceRecorder,
    Eval: Evaluator,
{
    /// Run `body` as the root group and report how it went.
    ///
    /// Tests run while they are declared. The run ends early when the operator quits or
    /// asks for a reload from the recovery prompt.
    pub fn run<'h, F>(self, description: Option<&str>, tags: &[&str], body: F) -> RunReport
    where
        F: FnOnce(&mut Suite<'h>) -> Flow,
        Filter: 'h,
        Output: 'h,
        Input: 'h,
        Recorder: 'h,
        Eval: 'h,
    {
        let Harness {
            config,
            filter,
            output,
            input,
            recorder,
            evaluator,
        } = self;

        let interactive = match config.interactivity {
            Interactivity::Automatic => output.is_terminal(),
            Interactivity::Always => true,
            Interactivity::Never => false,
        };
        let description = description.unwrap_or(DEFAULT_DESCRIPTION);

        let _guard = CapturePanicHookGuard::install();
        let mut suite = Suite::new(
            Collaborators {
                filter: Box::new(filter),
                output: Box::new(output),
                input: Box::new(input),
                recorder: Box::new(recorder),
                evaluator: Box::new(evaluator),
            },
            interactive,
            config.context_lines,
        );

        suite.emit(Style::Plain, "");
        let (success, reload) = match suite.tests(description, tags, body) {
            Ok(success) => {
                suite.emit(Style::Plain, "");
                (success, false)
            }
            Err(Halt::Quit) => (false, false),
            Err(Halt::Reload) => (false, true),
        };

        let report = RunReport {
            success,
            reload,
            outcomes: suite.outcomes,
            output_errors: suite.output_errors,
        };
        info!(
            run = description,
            success,
            reload,
            passed = report.passed(),
            failed = report.failed(),
            pending = report.pending(),
            skipped = report.skipped(),
            "run finished"
        );
        report
    }
}

impl<Filter, Output, Input, Recorder, Eval> Harness<Filter, Output, Input, Recorder, Eval> {
    pub fn with_filter<WithFilter: TagFilter>(
        self,
        filter: WithFilter,
    ) -> Harness<WithFilter, Output, Input, Recorder, Eval> {
        Harness {
            config: self.config,
            filter,
            output: self.output,
            input: self.input,
            recorder: self.recorder,
            evaluator: self.evaluator,
        }
    }

    pub fn with_output<WithOutput: OutputSink>(
        self,
        output: WithOutput,
    ) -> Harness<Filter, WithOutput, Input, Recorder, Eval> {
        Harness {
            config: self.config,
            filter: self.filter,
            output,
            input: self.input,
            recorder: self.recorder,
            evaluator: self.evaluator,
        }
    }

    pub fn with_input<WithInput: InputSource>(
        self,
        input: WithInput,
    ) -> Harness<Filter, Output, WithInput, Recorder, Eval> {
        Harness {
            config: self.config,
            filter: self.filter,
            output: self.output,
            input,
            recorder: self.recorder,
            evaluator: self.evaluator,
        }
    }

    pub fn with_recorder<WithRecorder: TraceRecorder>(
        self,
        recorder: WithRecorder,
    ) -> Harness<Filter, Output, Input, WithRecorder, Eval> {
        Harness {
            config: self.config,
            filter: self.filter,
            output: self.output,
            input: self.input,
            recorder,
            evaluator: self.evaluator,
        }
    }

    pub fn with_evaluator<WithEval: Evaluator>(
        self,
        evaluator: WithEval,
    ) -> Harness<Filter, Output, Input, Recorder, WithEval> {
        Harness {
            config: self.config,
            filter: self.filter,
            output: self.output,
            input: self.input,
            recorder: self.recorder,
            evaluator,
        }
    }
}
