//! Rebuilds the declared suite nesting from the flat finished list.
//!
//! Suites finish in post-order: a parent completes only after all of its
//! children. Walking the finished list once and attaching every suite to its
//! recorded parent restores the declaration tree, with siblings in
//! declaration order.

use crate::report::TestSummary;
use crate::suite::{CaseStatus, SuiteId, SuiteNode};

/// The finished suites of a run, grouped under their roots.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    suites: Vec<SuiteNode>,
    roots: Vec<SuiteId>,
    finished: Vec<SuiteId>,
}

/// Attaches each finished suite to its parent's `children`; parentless suites
/// become roots.
///
/// A suite whose parent never finished (its run was aborted by a hook) is
/// attached to that parent all the same and is therefore unreachable from the
/// roots.
pub fn build(mut suites: Vec<SuiteNode>, finished: Vec<SuiteId>) -> Forest {
    let mut roots = Vec::new();
    for &id in &finished {
        match suites[id.0].parent {
            Some(parent) => suites[parent.0].children.push(id),
            None => roots.push(id),
        }
    }
    Forest {
        suites,
        roots,
        finished,
    }
}

impl Forest {
    pub fn roots(&self) -> &[SuiteId] {
        &self.roots
    }

    pub fn suite(&self, id: SuiteId) -> &SuiteNode {
        &self.suites[id.0]
    }

    pub fn children(&self, id: SuiteId) -> impl Iterator<Item = &SuiteNode> + '_ {
        self.suites[id.0].children.iter().map(|c| &self.suites[c.0])
    }

    /// Finished suites in completion order.
    pub fn finished(&self) -> impl Iterator<Item = &SuiteNode> + '_ {
        self.finished.iter().map(|id| &self.suites[id.0])
    }

    /// First finished suite with the given title.
    pub fn find(&self, title: &str) -> Option<&SuiteNode> {
        self.finished().find(|suite| suite.title == title)
    }

    /// Pass/fail counts over every case that ran, including cases of suites
    /// the report hides and of suites a hook failure aborted.
    pub fn summary(&self) -> TestSummary {
        let mut summary = TestSummary::default();
        for case in self.suites.iter().flat_map(|suite| &suite.cases) {
            match case.status {
                CaseStatus::Success => summary.passed += 1,
                CaseStatus::Fail => summary.failed += 1,
                CaseStatus::Pending => {}
            }
        }
        summary
    }
}
