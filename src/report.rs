//! Renders a forest as an indented, colorized report.
//!
//! ```text
//!
//! Collections
//!   ✔ finds an index
//!   ✕ fails on purpose
//!
//!     Nested
//!       ✔ still passes
//!
//! ```
//!
//! A suite without cases renders nothing, and neither does anything below it,
//! even descendants that have cases of their own.

use std::fmt;
use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::config::ReportConfig;
use crate::suite::{CaseRecord, SuiteId};
use crate::tree::Forest;

const SUCCESS_GLYPH: char = '\u{2714}';
const FAIL_GLYPH: char = '\u{2715}';

/// Pass/fail totals for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
}

impl TestSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total_tests(&self) -> usize {
        self.passed + self.failed
    }
}

impl fmt::Display for TestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passing, {} failing", self.passed, self.failed)
    }
}

pub struct Reporter<'c, W> {
    out: W,
    config: &'c ReportConfig,
}

impl<'c, W: WriteColor> Reporter<'c, W> {
    pub fn new(out: W, config: &'c ReportConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the whole report: one opening blank line, then every root.
    pub fn render(&mut self, forest: &Forest) -> io::Result<()> {
        writeln!(self.out)?;
        for &root in forest.roots() {
            self.render_suite(forest, root, 0)?;
        }
        if self.config.summary {
            self.render_summary(forest.summary())?;
        }
        self.out.flush()
    }

    fn render_suite(&mut self, forest: &Forest, id: SuiteId, indent: usize) -> io::Result<()> {
        let suite = forest.suite(id);
        if suite.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "{:indent$}{}", "", suite.title, indent = indent)?;
        for case in &suite.cases {
            self.render_case(case, indent)?;
        }
        writeln!(self.out)?;

        for &child in &suite.children {
            self.render_suite(forest, child, indent + self.config.indent_step)?;
        }
        Ok(())
    }

    fn render_case(&mut self, case: &CaseRecord, indent: usize) -> io::Result<()> {
        let (glyph, color) = if case.passed() {
            (SUCCESS_GLYPH, Color::Green)
        } else {
            (FAIL_GLYPH, Color::Red)
        };
        self.colored_line(color, &format!("{:indent$}  {} {}", "", glyph, case.title, indent = indent))?;

        if self.config.show_errors {
            if let Some(error) = &case.error {
                for line in error.message.lines() {
                    self.colored_line(color, &format!("{:indent$}    {}", "", line, indent = indent))?;
                }
            }
        }
        Ok(())
    }

    fn render_summary(&mut self, summary: TestSummary) -> io::Result<()> {
        let color = if summary.has_failures() {
            Color::Red
        } else {
            Color::Green
        };
        self.colored_line(color, &summary.to_string())
    }

    // The color wraps the whole line, indentation included.
    fn colored_line(&mut self, color: Color, line: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", line)?;
        self.out.reset()?;
        writeln!(self.out)
    }
}
