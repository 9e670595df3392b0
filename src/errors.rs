//! Error types for registration and execution.
//!
//! Case failures are not errors: they are recorded on the case and reported.
//! What surfaces here is what aborts a run: registering outside any suite, or
//! a lifecycle hook failing.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// The four lifecycle hook lists of a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Before,
    BeforeEach,
    AfterEach,
    After,
}

impl HookKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::Before => "before",
            HookKind::BeforeEach => "before_each",
            HookKind::AfterEach => "after_each",
            HookKind::After => "after",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that abort registration or the execution of a suite.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RunnerError {
    /// A hook or case was registered while no suite was open.
    #[error("`{operation}` called outside of any `describe` block")]
    #[diagnostic(
        code(nestest::registration),
        help("register hooks and cases from inside a `describe` body")
    )]
    Registration { operation: &'static str },

    /// A lifecycle hook panicked or returned an error. The suite was aborted
    /// and the error propagates through every enclosing `describe`.
    #[error("`{hook}` hook failed in suite '{suite}': {message}")]
    #[diagnostic(
        code(nestest::hook),
        help("hook failures abort the suite and its ancestors; the cases that did not run are left pending")
    )]
    Hook {
        suite: String,
        hook: HookKind,
        message: String,
    },
}

impl RunnerError {
    pub fn registration(operation: &'static str) -> Self {
        RunnerError::Registration { operation }
    }

    pub fn is_hook_failure(&self) -> bool {
        matches!(self, RunnerError::Hook { .. })
    }
}
