//! Defines the command-line arguments for the nestest CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser};

use crate::config::{ColorMode, LoadPolicy, ReportConfig, DEFAULT_INDENT_STEP};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "nestest",
    version,
    about = "Runs nested describe/it suites and prints an indented report."
)]
pub struct NestestArgs {
    /// Spec files to run, in order. Every built-in spec file runs when none is given.
    pub files: Vec<String>,

    /// List the built-in spec files and exit.
    #[arg(long)]
    pub list: bool,

    /// When to color the report.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Columns of indentation per nesting level.
    #[arg(long, default_value_t = DEFAULT_INDENT_STEP)]
    pub indent: usize,

    /// Print each failure's message under its case.
    #[arg(long)]
    pub show_errors: bool,

    /// Print passing and failing counts after the report.
    #[arg(long)]
    pub summary: bool,

    /// Keep loading the remaining spec files after a hook failure.
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (repeatable). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl NestestArgs {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            color: self.color,
            indent_step: self.indent,
            show_errors: self.show_errors,
            summary: self.summary,
        }
    }

    pub fn load_policy(&self) -> LoadPolicy {
        if self.keep_going {
            LoadPolicy::KeepGoing
        } else {
            LoadPolicy::StopOnHookFailure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_plain_report() {
        let args = NestestArgs::parse_from(["nestest"]);
        assert!(args.files.is_empty());
        assert_eq!(args.report_config(), ReportConfig::default());
        assert_eq!(args.load_policy(), LoadPolicy::StopOnHookFailure);
    }

    #[test]
    fn flags_map_onto_config() {
        let args = NestestArgs::parse_from([
            "nestest",
            "lifecycle",
            "collections",
            "--color",
            "never",
            "--indent",
            "2",
            "--show-errors",
            "--keep-going",
            "-vv",
        ]);
        assert_eq!(args.files, ["lifecycle", "collections"]);
        let config = args.report_config();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.indent_step, 2);
        assert!(config.show_errors);
        assert!(!config.summary);
        assert_eq!(args.load_policy(), LoadPolicy::KeepGoing);
        assert_eq!(args.verbose, 2);
    }
}
