//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use nestest::config::ReportConfig;
use nestest::report::Reporter;
use nestest::Forest;
use termcolor::Buffer;

/// An ordered record of which callbacks ran.
#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends `entry` every time it runs.
    pub fn recorder(&self, entry: &str) -> impl FnMut() + 'static {
        let journal = self.clone();
        let entry = entry.to_string();
        move || journal.push(&entry)
    }

    pub fn push(&self, entry: &str) {
        self.0.borrow_mut().push(entry.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }
}

/// Renders without color escapes.
pub fn render_plain(forest: &Forest) -> String {
    render_with(forest, &ReportConfig::default())
}

pub fn render_with(forest: &Forest, config: &ReportConfig) -> String {
    let mut buffer = Buffer::no_color();
    Reporter::new(&mut buffer, config)
        .render(forest)
        .expect("writing to a buffer cannot fail");
    String::from_utf8(buffer.into_inner()).expect("report is utf-8")
}
