//! Run with tags to pick tests, e.g. `cargo run --example tagged -- +fast -net`.
//! Tags may also come from `TAGTRIAGE_TAGS`.

use std::{cell::Cell, env, process::ExitCode};

use tagtriage::{
    config::{RunConfig, TagConfig},
    harness,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let tags = match args.is_empty() {
        true => TagConfig::from_env("TAGTRIAGE_TAGS"),
        false => TagConfig::parse(&args),
    };

    let connections = Cell::new(0);
    let connections = &connections;

    harness(RunConfig::default().with_tags(tags))
        .run(Some("client"), &[], |s| {
            s.tests("parsing", &["fast"], |s| {
                s.test("reads a port", &[], |_| "8080".parse::<u16>().map(|port| port == 8080))?;
                s.test("rejects a word", &[], |_| "http".parse::<u16>().is_err())?;
                Ok(())
            })?;

            s.tests("network", &["net", "slow"], |s| {
                s.before(move || connections.set(connections.get() + 1));
                s.after(move || connections.set(connections.get() - 1));
                s.test("connects", &[], |_| connections.get() == 1)?;
                s.pending("reconnects", &["flaky"]);
                Ok(())
            })?;
            Ok(())
        })
        .exit_code()
}
