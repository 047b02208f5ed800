//! A tag-filtered, hierarchical test runner that stops on failures and lets the
//! operator look around before deciding how to go on.
//!
//! ```no_run
//! use tagtriage::{config::RunConfig, harness};
//!
//! let report = harness(RunConfig::default()).run(Some("math"), &["unit"], |s| {
//!     s.test("adds", &[], |_| 1 + 1 == 2)?;
//!     s.tests("division", &["slow"], |s| {
//!         s.test("by zero", &[], |_| 1u8.checked_div(0).is_none())?;
//!         s.pending("by infinity", &[]);
//!         Ok(())
//!     })?;
//!     Ok(())
//! });
//! assert!(report.success);
//! ```

pub mod config;
pub mod error;
pub mod outcome;
pub mod output;
pub mod prompt;
pub mod source;

mod capture;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

mod suite;
pub use suite::*;

#[cfg(test)]
mod test_support;
