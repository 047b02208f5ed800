use std::{
    cell::{Cell, RefCell},
    fmt, io,
    panic::{AssertUnwindSafe, catch_unwind},
    thread,
};

use pretty_assertions::assert_eq;
use regex::Regex;
use tagtriage::{
    config::{Interactivity, RunConfig, TagConfig},
    harness,
    input::NoInput,
    output::{PrettyOutput, SupportsColor},
    trace::{DefaultRecorder, TraceRecorder},
};

mod lib;
use lib::buffered;

fn scripted(lines: &[&str]) -> crossbeam_channel::Receiver<String> {
    let (tx, rx) = crossbeam_channel::unbounded();
    for line in lines {
        tx.send(line.to_string()).unwrap();
    }
    rx
}

#[test]
fn passing_group() {
    let (harness, buffer) = buffered(RunConfig::default());
    let report = harness.run(Some("checks"), &[], |s| {
        s.tests("math", &[], |s| {
            s.test("adds", &[], |_| 1 + 1 == 2)?;
            Ok(())
        })?;
        Ok(())
    });

    assert!(report.success);
    assert!(!report.reload);
    let printed = buffer.try_to_string().unwrap();
    assert_eq!(printed, "\nchecks\n  math\n    + adds\n\n");
    assert_eq!(printed.matches("adds").count(), 1);
}

#[test]
fn panicking_body_leaves_one_frame() {
    let mut recorder = DefaultRecorder::default();
    let (harness, buffer) = buffered(RunConfig::default());
    let report = harness
        .with_recorder(&mut recorder)
        .run(None, &[], |s| {
            s.test("explodes", &["io"], |_| -> bool { panic!("boom") })?;
            Ok(())
        });

    assert!(!report.success);
    assert_eq!(report.failed(), 1);
    assert_eq!(recorder.frames().len(), 1);
    assert!(recorder.frames()[0].label.contains("boom"));

    let printed = buffer.try_to_string().unwrap();
    assert!(printed.contains("  boom (panic)\n  - explodes (io)\n"));
}

#[derive(Debug)]
struct Boom;

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("boom")
    }
}

#[test]
fn erroring_body_leaves_one_frame() {
    let mut recorder = DefaultRecorder::default();
    let (harness, _) = buffered(RunConfig::default());
    let line = line!() + 4;
    let report = harness
        .with_recorder(&mut recorder)
        .run(None, &[], |s| {
            s.test("errors", &[], |_| Err::<bool, _>(Boom))?;
            Ok(())
        });

    assert!(!report.success);
    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].label, "in errors! boom (Boom)");
    assert_eq!(frames[0].file, file!());
    assert_eq!(frames[0].line, line);
}

#[test]
fn include_tags_select_tests() {
    let slow = Cell::new(false);
    let fast = Cell::new(false);
    let config = RunConfig::default().with_tags(TagConfig::parse(["+slow"]));

    let (harness, buffer) = buffered(config);
    let report = harness.run(Some("selection"), &[], |s| {
        s.test("tagged", &["slow"], |_| {
            slow.set(true);
            true
        })?;
        s.test("untagged", &[], |_| {
            fast.set(true);
            true
        })?;
        Ok(())
    });

    assert!(slow.get());
    assert!(!fast.get());
    assert!(report.success);
    assert_eq!(report.skipped(), 1);
    assert_eq!(
        buffer.try_to_string().unwrap(),
        "\nselection\n  + tagged (slow)\n  _ untagged\n\n"
    );
}

#[test]
fn operator_walks_the_trace_then_quits() {
    let config = RunConfig::default()
        .with_interactivity(Interactivity::Always)
        .with_context_lines(2);
    let (harness, buffer) = buffered(config);
    let report = harness
        .with_input(scripted(&["t", "1", "q"]))
        .run(None, &[], |s| {
            s.test("explodes", &[], |_| -> bool { panic!("boom") })?;
            s.test("never runs", &[], |_| true)?;
            Ok(())
        });

    assert!(!report.success);
    assert!(!report.reload);
    assert_eq!(report.outcomes.len(), 1);

    let printed = buffer.try_to_string().unwrap();
    assert!(printed.contains("\n     0  in explodes! boom (panic)\n\n  - explodes\n"));

    let header =
        Regex::new(r"(?m)^    tests/triage/main\.rs:(\d+) in explodes! boom \(panic\): $").unwrap();
    let captures = header.captures(&printed).expect("frame header is printed");
    let line = &captures[1];
    let source = Regex::new(&format!(r#"(?m)^      {line}  \s*s\.test\("explodes""#)).unwrap();
    assert!(source.is_match(&printed));
    assert!(!printed.ends_with("\n\n"));
}

#[test]
fn reload_until_it_passes() {
    let mut attempts = 0;
    let report = loop {
        attempts += 1;
        let operator = match attempts {
            1 => scripted(&["r"]),
            _ => scripted(&[]),
        };
        let (harness, _) = buffered(RunConfig::default().with_interactivity(Interactivity::Always));
        let report = harness.with_input(operator).run(None, &[], |s| {
            s.test("flaky", &[], |_| attempts > 1)?;
            Ok(())
        });
        if !report.reload {
            break report;
        }
        assert!(!report.success);
    };

    assert_eq!(attempts, 2);
    assert!(report.success);
}

#[test]
fn operator_on_another_thread() {
    let (tx, rx) = crossbeam_channel::bounded(0);
    let operator = thread::spawn(move || {
        for command in ["e answer", "e bindings", "c"] {
            tx.send(command.to_string()).unwrap();
        }
    });

    let config = RunConfig::default().with_interactivity(Interactivity::Always);
    let (harness, buffer) = buffered(config);
    let report = harness.with_input(rx).run(None, &[], |s| {
        s.test("answers", &[], |probe| {
            let answer = 41;
            probe.bind("answer", &answer);
            probe.bind("question", "unknown");
            answer == 42
        })?;
        s.test("after", &[], |_| true)?;
        Ok(())
    });
    operator.join().unwrap();

    assert!(!report.success);
    assert_eq!(report.passed(), 1);
    let printed = buffer.try_to_string().unwrap();
    assert!(printed.contains("\n  41\n"));
    assert!(printed.contains("\n  answer, question\n"));
    assert!(printed.ends_with("  + after\n\n"));
}

#[test]
fn hook_panics_reach_the_host() {
    let ran = RefCell::new(Vec::new());
    let (harness, _) = buffered(RunConfig::default());
    let result = catch_unwind(AssertUnwindSafe(|| {
        harness.run(None, &[], |s| {
            s.after(|| panic!("teardown failed"));
            s.test("first", &[], |_| {
                ran.borrow_mut().push("first");
                true
            })?;
            s.test("second", &[], |_| {
                ran.borrow_mut().push("second");
                true
            })?;
            Ok(())
        })
    }));

    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"teardown failed"));
    assert_eq!(*ran.borrow(), ["first"]);
}

struct Broken;

impl io::Write for Broken {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SupportsColor for Broken {
    fn supports_color(&self) -> bool {
        false
    }
}

#[test]
fn output_failures_do_not_stop_the_run() {
    let report = harness(RunConfig::default())
        .with_output(PrettyOutput::default().with_target(Broken))
        .with_input(NoInput)
        .run(None, &[], |s| {
            s.test("still runs", &[], |_| true)?;
            Ok(())
        });

    assert!(report.success);
    assert_eq!(report.passed(), 1);
    assert!(!report.output_errors.is_empty());
}
