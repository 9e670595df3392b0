//! The registration DSL and the stack of open suites.
//!
//! A [`Runner`] is the context of one run. Test code declares suites with
//! [`Runner::describe`]; the body receives the runner back and registers hooks,
//! cases, and nested suites on it. Bodies run immediately, so declaration order
//! is execution order:
//!
//! ```
//! use nestest::Runner;
//!
//! let mut runner = Runner::new();
//! runner
//!     .describe("arithmetic", |r| {
//!         r.it("adds", || assert_eq!(1 + 1, 2))?;
//!         r.describe("division", |r| {
//!             r.it("divides", || assert_eq!(10 / 2, 5))
//!         })
//!     })
//!     .unwrap();
//!
//! let forest = runner.finish();
//! assert_eq!(forest.summary().passed, 2);
//! ```

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::engine;
use crate::errors::{HookKind, RunnerError};
use crate::failure::{guard, Outcome};
use crate::suite::{CaseRecord, Frame, SuiteId, SuiteNode};
use crate::tree::{self, Forest};

/// Coordinator for one run: suite arena, registration stack, finished list.
#[derive(Default)]
pub struct Runner<'a> {
    suites: Vec<SuiteNode>,
    stack: Vec<Frame<'a>>,
    finished: Vec<SuiteId>,
}

impl<'a> Runner<'a> {
    pub fn new() -> Self {
        Self {
            suites: Vec::new(),
            stack: Vec::new(),
            finished: Vec::new(),
        }
    }

    /// Declares a suite, runs its body, then executes it.
    ///
    /// The suite's parent is whatever suite is current when this is called.
    /// On success the suite is appended to the finished list, with or without
    /// cases. If a hook fails, the error is returned and the suite is not
    /// recorded as finished; bodies propagate it with `?` so enclosing suites
    /// abort too. A panicking body is not caught: the suite's frame is popped
    /// and the panic continues.
    pub fn describe<B>(&mut self, title: impl Into<String>, body: B) -> Result<(), RunnerError>
    where
        B: FnOnce(&mut Self) -> Result<(), RunnerError>,
    {
        let parent = self.current_suite();
        let id = SuiteId(self.suites.len());
        let base = self.stack.len();
        self.suites.push(SuiteNode::new(title, parent));
        self.stack.push(Frame::new(id));
        debug!(suite = %self.suites[id.0].title, depth = self.stack.len(), "entering suite");

        let declared = panic::catch_unwind(AssertUnwindSafe(|| body(self)));

        // Frames a body left open above ours are abandoned.
        self.stack.truncate(base + 1);
        let frame = self
            .stack
            .pop()
            .expect("describe frame is on top of the registration stack");
        debug_assert_eq!(frame.id, id);
        let declared = match declared {
            Ok(declared) => declared,
            Err(payload) => panic::resume_unwind(payload),
        };
        declared?;

        engine::execute(frame, &mut self.suites[id.0])?;
        self.finished.push(id);
        debug!(suite = %self.suites[id.0].title, "suite finished");
        Ok(())
    }

    /// Registers a case in the current suite.
    pub fn it<F, O>(&mut self, title: impl Into<String>, callback: F) -> Result<(), RunnerError>
    where
        F: FnOnce() -> O + 'a,
        O: Outcome,
    {
        let frame = self
            .stack
            .last_mut()
            .ok_or(RunnerError::registration("it"))?;
        self.suites[frame.id.0].cases.push(CaseRecord::new(title));
        frame.cases.push(Box::new(move || guard(callback)));
        Ok(())
    }

    /// Registers a hook run once before the first case of the current suite.
    pub fn before<F, O>(&mut self, hook: F) -> Result<(), RunnerError>
    where
        F: FnMut() -> O + 'a,
        O: Outcome,
    {
        self.register_hook(HookKind::Before, hook)
    }

    /// Registers a hook run before every case of the current suite.
    pub fn before_each<F, O>(&mut self, hook: F) -> Result<(), RunnerError>
    where
        F: FnMut() -> O + 'a,
        O: Outcome,
    {
        self.register_hook(HookKind::BeforeEach, hook)
    }

    /// Registers a hook run after every case of the current suite.
    pub fn after_each<F, O>(&mut self, hook: F) -> Result<(), RunnerError>
    where
        F: FnMut() -> O + 'a,
        O: Outcome,
    {
        self.register_hook(HookKind::AfterEach, hook)
    }

    /// Registers a hook run once after the last case of the current suite.
    pub fn after<F, O>(&mut self, hook: F) -> Result<(), RunnerError>
    where
        F: FnMut() -> O + 'a,
        O: Outcome,
    {
        self.register_hook(HookKind::After, hook)
    }

    fn register_hook<F, O>(&mut self, kind: HookKind, mut hook: F) -> Result<(), RunnerError>
    where
        F: FnMut() -> O + 'a,
        O: Outcome,
    {
        let frame = self
            .stack
            .last_mut()
            .ok_or(RunnerError::registration(kind.as_str()))?;
        frame
            .hooks
            .list_mut(kind)
            .push(Box::new(move || guard(&mut hook)));
        Ok(())
    }

    /// The suite registrations currently resolve against, if any.
    pub fn current_suite(&self) -> Option<SuiteId> {
        self.stack.last().map(|frame| frame.id)
    }

    /// Number of open suites.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn suite(&self, id: SuiteId) -> &SuiteNode {
        &self.suites[id.0]
    }

    /// Every suite declared so far, in declaration order, finished or not.
    pub fn suites(&self) -> &[SuiteNode] {
        &self.suites
    }

    /// Suites in the order their execution completed.
    pub fn finished(&self) -> &[SuiteId] {
        &self.finished
    }

    /// Ends the run and regroups the finished suites into a forest.
    pub fn finish(self) -> Forest {
        tree::build(self.suites, self.finished)
    }
}
