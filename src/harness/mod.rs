mod run;
pub use run::Harness;

use std::io;

use crate::{
    config::RunConfig, eval::BindingsEvaluator, filter::DefaultTagFilter,
    output::PrettyOutput, trace::DefaultRecorder,
};

/// Root description used when a run is not given one.
pub const DEFAULT_DESCRIPTION: &str = "tagtriage";

/// A harness with the default collaborators: tag filtering from `config`, colored
/// output on stdout, operator input from stdin, a bounded trace recorder and the
/// bindings evaluator.
pub fn harness(
    config: RunConfig,
) -> Harness<
    DefaultTagFilter,
    PrettyOutput<io::Stdout>,
    io::Stdin,
    DefaultRecorder,
    BindingsEvaluator,
> {
    Harness {
        filter: DefaultTagFilter::new(config.tags.clone()),
        output: PrettyOutput::default(),
        input: io::stdin(),
        recorder: DefaultRecorder::default(),
        evaluator: BindingsEvaluator,
        config,
    }
}
