//! Handles all user-facing output for the CLI.
//!
//! The report goes to stdout; load errors and usage errors go to stderr as
//! miette diagnostics.

use std::io;

use termcolor::StandardStream;

use crate::config::ReportConfig;
use crate::loader::LoadError;
use crate::report::Reporter;
use crate::tree::Forest;

/// Prints the report for `forest` to stdout.
pub fn print_report(forest: &Forest, config: &ReportConfig) -> io::Result<()> {
    let stdout = StandardStream::stdout(config.color_choice());
    let mut lock = stdout.lock();
    Reporter::new(&mut lock, config).render(forest)
}

/// Prints a diagnostic for each spec file that failed to load.
pub fn print_load_errors(errors: &[LoadError]) {
    for error in errors {
        print_diagnostic(error.clone());
    }
}

pub fn print_skipped(skipped: &[String]) {
    if skipped.is_empty() {
        return;
    }
    eprintln!("Not run after hook failure: {}", skipped.join(", "));
}

pub fn print_diagnostic(diagnostic: impl miette::Diagnostic + Send + Sync + 'static) {
    eprintln!("{:?}", miette::Report::new(diagnostic));
}

pub fn print_list<'a>(names: impl IntoIterator<Item = &'a str>) {
    for name in names {
        println!("{}", name);
    }
}
