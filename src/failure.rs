//! Failure capture for user callbacks.
//!
//! Hooks and cases are plain closures. A closure "fails" either by panicking
//! (the usual `assert!` style) or by returning an `Err`. Both are folded into a
//! [`Failure`] here, so the engine only ever sees `Result<(), Failure>`.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// How a callback failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The callback panicked.
    Panic,
    /// The callback returned `Err`.
    Error,
}

/// A captured callback failure: what went wrong, in displayable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn from_error(error: &dyn fmt::Display) -> Self {
        Self {
            kind: FailureKind::Error,
            message: error.to_string(),
        }
    }

    /// Extracts the message from a panic payload. `panic!` with a literal
    /// yields a `&str`, with format arguments a `String`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self {
            kind: FailureKind::Panic,
            message,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Return types accepted from hooks and cases.
///
/// Implemented for `()` and for `Result<(), E>` with a displayable error, so
/// both `|| assert_eq!(a, b)` and `|| -> Result<(), MyError> { .. }` register.
///
/// A closure that only diverges, such as `|| panic!("..")`, has no `Outcome`
/// of its own and needs an explicit `|| -> () { panic!("..") }`.
pub trait Outcome {
    fn into_result(self) -> Result<(), Failure>;
}

impl Outcome for () {
    fn into_result(self) -> Result<(), Failure> {
        Ok(())
    }
}

impl<E: fmt::Display> Outcome for Result<(), E> {
    fn into_result(self) -> Result<(), Failure> {
        self.map_err(|e| Failure::from_error(&e))
    }
}

thread_local! {
    static INSIDE_BOUNDARY: Cell<bool> = const { Cell::new(false) };
}

/// True while the current thread is running a callback under [`guard`].
pub fn inside_boundary() -> bool {
    INSIDE_BOUNDARY.with(Cell::get)
}

/// Runs `f` inside a failure boundary.
pub fn guard<O: Outcome>(f: impl FnOnce() -> O) -> Result<(), Failure> {
    let outer = INSIDE_BOUNDARY.with(|flag| flag.replace(true));
    let caught = panic::catch_unwind(AssertUnwindSafe(f));
    INSIDE_BOUNDARY.with(|flag| flag.set(outer));

    match caught {
        Ok(outcome) => outcome.into_result(),
        Err(payload) => Err(Failure::from_panic(payload)),
    }
}
