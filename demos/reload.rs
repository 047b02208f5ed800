//! Answer `r` at the prompt to run the tests again, for example after editing a file
//! the tests read.

use std::{fs, process::ExitCode};

use tagtriage::{config::RunConfig, harness};

fn main() -> ExitCode {
    loop {
        let report = harness(RunConfig::default()).run(Some("fixtures"), &[], |s| {
            s.test("greeting is polite", &["fixtures"], |probe| {
                let greeting = fs::read_to_string("demos/greeting.txt")?;
                probe.bind("greeting", &greeting);
                Ok::<_, std::io::Error>(greeting.trim() == "hello")
            })?;
            Ok(())
        });

        if !report.reload {
            return report.exit_code();
        }
    }
}
