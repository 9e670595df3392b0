//! Suite nodes and the registration frames that carry their callbacks.
//!
//! A suite's data is split in two. The [`SuiteNode`] holds what outlives the
//! run (title, parent, case records, children) and lives in the runner's
//! arena, addressed by [`SuiteId`]. The [`Frame`] holds the hooks and case
//! callbacks, borrowing whatever fixtures they capture; it sits on the
//! registration stack while the suite is open and is consumed by the engine.

use crate::errors::HookKind;
use crate::failure::Failure;

/// A hook: run zero or more times, may fail.
pub type HookFn<'a> = Box<dyn FnMut() -> Result<(), Failure> + 'a>;

/// A case callback: run exactly once, may fail.
pub type CaseFn<'a> = Box<dyn FnOnce() -> Result<(), Failure> + 'a>;

/// Index of a suite in the runner's arena. Stable for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuiteId(pub(crate) usize);

impl SuiteId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Pending,
    Success,
    Fail,
}

/// Outcome record of one `it` case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub title: String,
    pub status: CaseStatus,
    pub error: Option<Failure>,
}

impl CaseRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: CaseStatus::Pending,
            error: None,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteNode {
    pub title: String,
    /// Enclosing suite, fixed at creation. Lookup only.
    pub parent: Option<SuiteId>,
    pub cases: Vec<CaseRecord>,
    /// Filled by the tree builder; empty while the run is in progress.
    pub children: Vec<SuiteId>,
}

impl SuiteNode {
    pub fn new(title: impl Into<String>, parent: Option<SuiteId>) -> Self {
        Self {
            title: title.into(),
            parent,
            cases: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// The hooks registered directly in one suite body. Never inherited.
#[derive(Default)]
pub struct Hooks<'a> {
    pub before: Vec<HookFn<'a>>,
    pub before_each: Vec<HookFn<'a>>,
    pub after_each: Vec<HookFn<'a>>,
    pub after: Vec<HookFn<'a>>,
}

impl<'a> Hooks<'a> {
    pub fn list_mut(&mut self, kind: HookKind) -> &mut Vec<HookFn<'a>> {
        match kind {
            HookKind::Before => &mut self.before,
            HookKind::BeforeEach => &mut self.before_each,
            HookKind::AfterEach => &mut self.after_each,
            HookKind::After => &mut self.after,
        }
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.before_each.len() + self.after_each.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration stack entry for an open suite.
pub struct Frame<'a> {
    pub id: SuiteId,
    pub hooks: Hooks<'a>,
    /// Index-aligned with the suite's `cases`.
    pub cases: Vec<CaseFn<'a>>,
}

impl<'a> Frame<'a> {
    pub fn new(id: SuiteId) -> Self {
        Self {
            id,
            hooks: Hooks::default(),
            cases: Vec::new(),
        }
    }
}
