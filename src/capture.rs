//! Capturing where a test body panicked.
//!
//! While a run is active a panic hook is installed. Panics that happen while a test body
//! is executing are silenced and their location is stored for the failure frame; all
//! other panics, hooks included, go to the previously installed hook.

use std::{
    any::Any,
    cell::RefCell,
    panic::{self, PanicHookInfo},
    sync::Arc,
};

#[derive(Debug, Default)]
struct BodyPanic {
    armed: bool,
    location: Option<(String, u32)>,
}

thread_local! {
    static BODY_PANIC: RefCell<BodyPanic> = RefCell::new(BodyPanic::default());
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

pub(crate) struct CapturePanicHookGuard(Option<Arc<PanicHook>>);

impl CapturePanicHookGuard {
    pub(crate) fn install() -> Self {
        let previous: Arc<PanicHook> = Arc::new(panic::take_hook());
        let chained = Arc::clone(&previous);

        panic::set_hook(Box::new(move |panic_hook_info| {
            let captured = BODY_PANIC.with_borrow_mut(|body| {
                if !body.armed {
                    return false;
                }
                body.location = panic_hook_info
                    .location()
                    .map(|location| (location.file().to_string(), location.line()));
                true
            });
            if !captured {
                chained(panic_hook_info);
            }
        }));

        Self(Some(previous))
    }
}

impl Drop for CapturePanicHookGuard {
    fn drop(&mut self) {
        // the hook cannot be swapped while unwinding, ours keeps delegating in that case
        if std::thread::panicking() {
            return;
        }
        if let Some(previous) = self.0.take() {
            drop(panic::take_hook());
            match Arc::try_unwrap(previous) {
                Ok(previous) => panic::set_hook(previous),
                Err(shared) => panic::set_hook(Box::new(move |info| shared(info))),
            }
        }
    }
}

/// Marks the current thread as executing a test body until dropped.
pub(crate) struct ArmedBody(());

impl ArmedBody {
    pub(crate) fn arm() -> Self {
        BODY_PANIC.with_borrow_mut(|body| {
            body.armed = true;
            body.location = None;
        });
        ArmedBody(())
    }
}

impl Drop for ArmedBody {
    fn drop(&mut self) {
        BODY_PANIC.with_borrow_mut(|body| body.armed = false);
    }
}

/// The location of the last body panic on this thread, if the hook saw one.
pub(crate) fn take_location() -> Option<(String, u32)> {
    BODY_PANIC.with_borrow_mut(|body| body.location.take())
}

/// Convert a panic payload into a string.
///
/// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
pub(crate) fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
    err.downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|err| err.downcast::<String>().map(|s| *s))
        .unwrap_or_else(|_| String::from("Box<dyn Any>"))
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use super::*;

    #[test]
    fn payloads_become_strings() {
        let err = catch_unwind(|| panic!("static")).unwrap_err();
        assert_eq!(payload_as_string(err), "static");

        let err = catch_unwind(|| panic!("formatted {}", 1)).unwrap_err();
        assert_eq!(payload_as_string(err), "formatted 1");

        let err = catch_unwind(|| std::panic::panic_any(7)).unwrap_err();
        assert_eq!(payload_as_string(err), "Box<dyn Any>");
    }

    #[test]
    fn armed_body_records_location() {
        let _guard = CapturePanicHookGuard::install();
        let result = {
            let _armed = ArmedBody::arm();
            catch_unwind(|| panic!("inside"))
        };
        assert!(result.is_err());

        // another test may have swapped the process wide hook in between
        if let Some((file, line)) = take_location() {
            assert!(file.ends_with("capture.rs"));
            assert!(line > 0);
        }
        assert_eq!(take_location(), None);
    }
}
