//! nestest: nested `describe`/`it` suites with lifecycle hooks, executed as
//! they are declared and reported as an indented tree.

pub use crate::errors::{HookKind, RunnerError};
pub use crate::failure::{Failure, FailureKind, Outcome};
pub use crate::runner::Runner;
pub use crate::tree::Forest;

pub mod cli;
pub mod collections;
pub mod config;
pub mod engine;
pub mod errors;
pub mod failure;
pub mod loader;
pub mod logging;
pub mod report;
pub mod runner;
pub mod specs;
pub mod suite;
pub mod tree;
