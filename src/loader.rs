//! Loading spec files into a run.
//!
//! A spec file is any named source of registration calls. Each is loaded
//! exactly once, in the order given, against one shared [`Runner`]; its
//! top-level `describe` calls execute as they are made.

use miette::Diagnostic;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::LoadPolicy;
use crate::errors::RunnerError;
use crate::runner::Runner;
use crate::tree::Forest;

/// A compiled-in test file.
pub trait SpecFile {
    /// Name used to select and report the file.
    fn name(&self) -> &str;

    /// Performs the file's registration calls.
    fn register(&self, runner: &mut Runner<'_>) -> Result<(), RunnerError>;
}

/// A spec file backed by a plain function.
#[derive(Debug, Clone, Copy)]
pub struct FnSpec {
    pub name: &'static str,
    pub register: fn(&mut Runner<'_>) -> Result<(), RunnerError>,
}

impl FnSpec {
    pub const fn new(
        name: &'static str,
        register: fn(&mut Runner<'_>) -> Result<(), RunnerError>,
    ) -> Self {
        Self { name, register }
    }
}

impl SpecFile for FnSpec {
    fn name(&self) -> &str {
        self.name
    }

    fn register(&self, runner: &mut Runner<'_>) -> Result<(), RunnerError> {
        (self.register)(runner)
    }
}

/// A spec file whose loading was cut short.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("failed to load spec file '{file}'")]
#[diagnostic(code(nestest::load))]
pub struct LoadError {
    pub file: String,
    #[source]
    #[diagnostic_source]
    pub source: RunnerError,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub forest: Forest,
    pub errors: Vec<LoadError>,
    /// Files never loaded because an earlier one aborted the run.
    pub skipped: Vec<String>,
}

impl RunOutcome {
    /// True when every case passed and every file loaded cleanly.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.skipped.is_empty() && !self.forest.summary().has_failures()
    }
}

/// Loads `files` in order into a fresh runner and builds the forest.
pub fn run_files<'f, I>(files: I, policy: LoadPolicy) -> RunOutcome
where
    I: IntoIterator<Item = &'f dyn SpecFile>,
{
    let mut runner = Runner::new();
    let mut errors = Vec::new();
    let mut skipped = Vec::new();
    let mut stopped = false;

    for file in files {
        if stopped {
            skipped.push(file.name().to_string());
            continue;
        }

        info!(file = file.name(), "loading spec file");
        if let Err(source) = file.register(&mut runner) {
            warn!(file = file.name(), error = %source, "spec file aborted");
            stopped = source.is_hook_failure() && policy == LoadPolicy::StopOnHookFailure;
            errors.push(LoadError {
                file: file.name().to_string(),
                source,
            });
        }
    }

    RunOutcome {
        forest: runner.finish(),
        errors,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing(r: &mut Runner<'_>) -> Result<(), RunnerError> {
        r.describe("passing", |r| r.it("works", || ()))
    }

    fn broken_hook(r: &mut Runner<'_>) -> Result<(), RunnerError> {
        r.describe("broken", |r| {
            r.before(|| Err::<(), _>("no database"))?;
            r.it("never runs", || ())
        })
    }

    fn stray_case(r: &mut Runner<'_>) -> Result<(), RunnerError> {
        r.it("outside", || ())
    }

    const PASSING: FnSpec = FnSpec::new("passing", passing);
    const BROKEN: FnSpec = FnSpec::new("broken", broken_hook);
    const STRAY: FnSpec = FnSpec::new("stray", stray_case);

    fn titles(outcome: &RunOutcome) -> Vec<&str> {
        outcome.forest.finished().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn fn_spec_debug_shows_its_name() {
        assert!(format!("{:?}", PASSING).contains("\"passing\""));
    }

    #[test]
    fn files_load_in_the_given_order() {
        let files: [&dyn SpecFile; 2] = [&PASSING, &PASSING];
        let outcome = run_files(files, LoadPolicy::default());
        assert_eq!(titles(&outcome), ["passing", "passing"]);
        assert!(outcome.is_success());
    }

    #[test]
    fn hook_failure_stops_the_run_by_default() {
        let files: [&dyn SpecFile; 3] = [&PASSING, &BROKEN, &PASSING];
        let outcome = run_files(files, LoadPolicy::StopOnHookFailure);

        assert_eq!(titles(&outcome), ["passing"]);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].file, "broken");
        assert!(outcome.errors[0].source.is_hook_failure());
        assert_eq!(outcome.skipped, ["passing"]);
        assert!(!outcome.is_success());
    }

    #[test]
    fn keep_going_continues_after_hook_failure() {
        let files: [&dyn SpecFile; 3] = [&BROKEN, &PASSING, &STRAY];
        let outcome = run_files(files, LoadPolicy::KeepGoing);

        assert_eq!(titles(&outcome), ["passing"]);
        assert!(outcome.skipped.is_empty());
        let failed: Vec<_> = outcome.errors.iter().map(|e| e.file.as_str()).collect();
        assert_eq!(failed, ["broken", "stray"]);
        assert_eq!(outcome.errors[1].source, RunnerError::registration("it"));
    }

    #[test]
    fn registration_errors_never_stop_the_run() {
        let files: [&dyn SpecFile; 2] = [&STRAY, &PASSING];
        let outcome = run_files(files, LoadPolicy::StopOnHookFailure);
        assert_eq!(titles(&outcome), ["passing"]);
        assert_eq!(outcome.errors.len(), 1);
    }
}
