use std::process::ExitCode;

use tagtriage::{config::RunConfig, harness};

fn main() -> ExitCode {
    let mut stack = Vec::new();

    harness(RunConfig::default())
        .run(Some("Vec"), &[], |s| {
            s.test("starts empty", &[], |_| stack.is_empty())?;

            s.tests("push", &[], |s| {
                s.test("grows by one", &[], |probe| {
                    stack.push(1);
                    probe.bind("stack", &stack);
                    stack.len() == 1
                })?;
                s.test("keeps the order", &[], |probe| {
                    stack.push(2);
                    probe.mark("pushed 2");
                    stack == [1, 2]
                })?;
                Ok(())
            })?;

            s.tests("pop", &[], |s| {
                s.test("returns the last element", &[], |_| stack.pop() == Some(2))?;
                s.test("parses what it stored", &[], |_| {
                    "1".parse::<i32>().map(|n| stack.last() == Some(&n))
                })?;
                s.pending("shrinks capacity", &[]);
                Ok(())
            })?;
            Ok(())
        })
        .exit_code()
}
