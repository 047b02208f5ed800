use tracing::debug;

use crate::{
    error::EvalError,
    eval::{Evaluator, Scope, Session},
    output::Style,
};

const LIST_BINDINGS: &str = "bindings";

/// Resolves expressions against the bindings a test body published.
///
/// An expression is either the name of a binding or `bindings`, which lists every
/// bound name. The interactive session is a small read-eval loop over the same rules
/// that ends on `exit`, `quit` or the end of input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BindingsEvaluator;

impl Evaluator for BindingsEvaluator {
    fn eval(&mut self, expr: &str, scope: &Scope) -> Result<String, EvalError> {
        match expr.trim() {
            "" => Err(EvalError::Empty),
            LIST_BINDINGS if scope.is_empty() => Ok(String::from("(no bindings)")),
            LIST_BINDINGS => Ok(scope.names().collect::<Vec<_>>().join(", ")),
            name => scope
                .get(name)
                .map(str::to_string)
                .ok_or_else(|| EvalError::Unbound(name.to_string())),
        }
    }

    fn interactive(&mut self, scope: &Scope, session: Session<'_>) -> Result<(), EvalError> {
        let Session {
            prefix,
            input,
            output,
        } = session;
        loop {
            output.write_unindented(Style::Plain, &format!("{prefix}>> "))?;
            let Some(line) = input.read_line()? else {
                output.write_unindented(Style::Plain, "\n")?;
                return Ok(());
            };

            let line = line.trim();
            debug!(line, "interactive session input");
            match line {
                "" => continue,
                "exit" | "quit" => return Ok(()),
                expr => {
                    match self.eval(expr, scope) {
                        Ok(value) => output
                            .write_unindented(Style::Plain, &format!("{prefix}=> {value}"))?,
                        Err(err) => {
                            output.write_unindented(Style::Failed, &format!("{prefix}{err}"))?
                        }
                    }
                    output.write_unindented(Style::Plain, "\n")?;
                }
            }
        }
    }
}
