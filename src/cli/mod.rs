//! The nestest command-line interface.
//!
//! Resolves spec file names against the built-in registry, runs them in the
//! order given, prints the report and turns the outcome into an exit code:
//! `0` when everything passed, `1` on any failed case or aborted spec file,
//! `2` on usage errors.

use std::process::ExitCode;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::cli::args::NestestArgs;
use crate::loader::{self, FnSpec, SpecFile};
use crate::{logging, specs};

pub mod args;
pub mod output;

const USAGE_ERROR: u8 = 2;

/// A spec file name that matches no built-in spec file.
#[derive(Debug, Error, Diagnostic)]
#[error("unknown spec file '{name}'")]
#[diagnostic(
    code(nestest::cli::unknown_spec),
    help("available spec files: {available}")
)]
pub struct UnknownSpecFile {
    pub name: String,
    pub available: String,
}

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = NestestArgs::parse();
    logging::init(args.verbose);

    if args.list {
        output::print_list(specs::names());
        return ExitCode::SUCCESS;
    }

    let files = match resolve(&args.files) {
        Ok(files) => files,
        Err(e) => {
            output::print_diagnostic(e);
            return ExitCode::from(USAGE_ERROR);
        }
    };
    debug!(files = files.len(), "resolved spec files");

    logging::quiet_panics();
    let outcome = loader::run_files(
        files.iter().map(|spec| *spec as &dyn SpecFile),
        args.load_policy(),
    );

    if let Err(e) = output::print_report(&outcome.forest, &args.report_config()) {
        eprintln!("Error: failed to write report: {}", e);
        return ExitCode::FAILURE;
    }
    output::print_load_errors(&outcome.errors);
    output::print_skipped(&outcome.skipped);

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Maps names to built-in spec files, keeping the given order. No names
/// selects all of them.
pub fn resolve(names: &[String]) -> Result<Vec<&'static FnSpec>, UnknownSpecFile> {
    if names.is_empty() {
        return Ok(specs::BUILTIN.iter().collect());
    }
    names
        .iter()
        .map(|name| {
            specs::lookup(name).ok_or_else(|| UnknownSpecFile {
                name: name.clone(),
                available: specs::names().collect::<Vec<_>>().join(", "),
            })
        })
        .collect()
}
