use crate::{
    error::EvalError,
    eval::{Evaluator, Scope, Session},
};

/// Reports evaluation as unavailable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoEvaluator;

impl Evaluator for NoEvaluator {
    fn eval(&mut self, _: &str, _: &Scope) -> Result<String, EvalError> {
        Err(EvalError::Unsupported)
    }

    fn interactive(&mut self, _: &Scope, _: Session<'_>) -> Result<(), EvalError> {
        Err(EvalError::Unsupported)
    }
}
