//! The execution engine: runs one suite's hooks and cases.
//!
//! Order for a suite with at least one case:
//!
//! ```text
//! before*
//! for each case: before_each*, case, after_each*
//! after*
//! ```
//!
//! A case failure is recorded on the case and execution moves on. A hook
//! failure is returned as [`RunnerError::Hook`] and nothing after it runs.
//! A suite without cases runs nothing at all, hooks included.

use tracing::{debug, trace, warn};

use crate::errors::{HookKind, RunnerError};
use crate::suite::{CaseStatus, Frame, HookFn, SuiteNode};

/// Executes the callbacks in `frame` against the case records of `suite`.
pub fn execute(frame: Frame<'_>, suite: &mut SuiteNode) -> Result<(), RunnerError> {
    if suite.cases.is_empty() {
        debug!(suite = %suite.title, "no cases, skipping hooks");
        return Ok(());
    }

    let Frame {
        mut hooks, cases, ..
    } = frame;

    run_hooks(&mut hooks.before, HookKind::Before, &suite.title)?;

    for (record, callback) in suite.cases.iter_mut().zip(cases) {
        run_hooks(&mut hooks.before_each, HookKind::BeforeEach, &suite.title)?;

        match callback() {
            Ok(()) => {
                record.status = CaseStatus::Success;
                debug!(suite = %suite.title, case = %record.title, "case passed");
            }
            Err(failure) => {
                debug!(suite = %suite.title, case = %record.title, error = %failure, "case failed");
                record.status = CaseStatus::Fail;
                record.error = Some(failure);
            }
        }

        run_hooks(&mut hooks.after_each, HookKind::AfterEach, &suite.title)?;
    }

    run_hooks(&mut hooks.after, HookKind::After, &suite.title)
}

fn run_hooks(hooks: &mut [HookFn<'_>], kind: HookKind, suite: &str) -> Result<(), RunnerError> {
    for hook in hooks.iter_mut() {
        trace!(suite, hook = %kind, "running hook");
        hook().map_err(|failure| {
            warn!(suite, hook = %kind, error = %failure, "hook failed, aborting suite");
            RunnerError::Hook {
                suite: suite.to_string(),
                hook: kind,
                message: failure.message,
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{guard, Failure};
    use crate::suite::{CaseRecord, SuiteId};
    use std::cell::RefCell;

    fn hook<'a>(f: impl FnMut() + 'a) -> HookFn<'a> {
        let mut f = f;
        Box::new(move || guard(&mut f))
    }

    #[test]
    fn empty_suite_runs_no_hooks() {
        let log = RefCell::new(Vec::new());
        let mut frame = Frame::new(SuiteId(0));
        frame.hooks.before.push(hook(|| log.borrow_mut().push("before")));
        frame.hooks.after.push(hook(|| log.borrow_mut().push("after")));
        let mut suite = SuiteNode::new("empty", None);

        execute(frame, &mut suite).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn hooks_surround_each_case() {
        let log = RefCell::new(Vec::new());
        let mut frame = Frame::new(SuiteId(0));
        frame.hooks.before.push(hook(|| log.borrow_mut().push("before")));
        frame.hooks.before_each.push(hook(|| log.borrow_mut().push("before_each")));
        frame.hooks.after_each.push(hook(|| log.borrow_mut().push("after_each")));
        frame.hooks.after.push(hook(|| log.borrow_mut().push("after")));
        frame.cases.push(Box::new(|| {
            log.borrow_mut().push("one");
            Ok::<(), Failure>(())
        }));
        frame.cases.push(Box::new(|| {
            log.borrow_mut().push("two");
            Err(Failure::from_error(&"nope"))
        }));
        let mut suite = SuiteNode::new("s", None);
        suite.cases.push(CaseRecord::new("one"));
        suite.cases.push(CaseRecord::new("two"));

        execute(frame, &mut suite).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                "before",
                "before_each",
                "one",
                "after_each",
                "before_each",
                "two",
                "after_each",
                "after"
            ]
        );
        assert_eq!(suite.cases[0].status, CaseStatus::Success);
        assert_eq!(suite.cases[1].status, CaseStatus::Fail);
        assert_eq!(suite.cases[1].error.as_ref().map(|f| f.message.as_str()), Some("nope"));
    }

    #[test]
    fn failing_before_each_leaves_cases_pending() {
        let mut frame = Frame::new(SuiteId(0));
        frame.hooks.before_each.push(hook(|| panic!("fixture exploded")));
        frame.cases.push(Box::new(|| Ok::<(), Failure>(())));
        let mut suite = SuiteNode::new("s", None);
        suite.cases.push(CaseRecord::new("never"));

        let err = execute(frame, &mut suite).unwrap_err();
        assert_eq!(
            err,
            RunnerError::Hook {
                suite: "s".to_string(),
                hook: HookKind::BeforeEach,
                message: "fixture exploded".to_string(),
            }
        );
        assert_eq!(suite.cases[0].status, CaseStatus::Pending);
    }
}
