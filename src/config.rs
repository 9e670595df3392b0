//! Run and report configuration.

use clap::ValueEnum;
use termcolor::ColorChoice;

/// Indentation added per nesting level in the report.
pub const DEFAULT_INDENT_STEP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Configuration for rendering a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub color: ColorMode,
    pub indent_step: usize,
    /// Print each failure's message under its case line.
    pub show_errors: bool,
    /// Print a passing/failing count after the report.
    pub summary: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            indent_step: DEFAULT_INDENT_STEP,
            show_errors: false,
            summary: false,
        }
    }
}

impl ReportConfig {
    /// Resolves the color mode for a stdout stream.
    pub fn color_choice(&self) -> ColorChoice {
        match self.color {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
        }
    }
}

/// What the loader does after a spec file is aborted by a hook failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Stop loading; remaining spec files are not run.
    #[default]
    StopOnHookFailure,
    /// Record the failure and continue with the next spec file.
    KeepGoing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_the_terminal() {
        let mut config = ReportConfig {
            color: ColorMode::Always,
            ..ReportConfig::default()
        };
        assert_eq!(config.color_choice(), ColorChoice::Always);
        config.color = ColorMode::Never;
        assert_eq!(config.color_choice(), ColorChoice::Never);
    }

    #[test]
    fn defaults_match_the_reference_layout() {
        let config = ReportConfig::default();
        assert_eq!(config.indent_step, 4);
        assert!(!config.show_errors);
        assert!(!config.summary);
    }
}
