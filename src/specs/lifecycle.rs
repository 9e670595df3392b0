//! Shows the hook lifecycle: ordering around cases, nested suites running
//! before their parent's cases, hooks not being inherited, and a case-less
//! wrapper hiding everything below it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Runner, RunnerError};

type Journal = Rc<RefCell<Vec<&'static str>>>;

fn recorder(journal: &Journal, entry: &'static str) -> impl FnMut() + 'static {
    let journal = Rc::clone(journal);
    move || journal.borrow_mut().push(entry)
}

pub fn register(r: &mut Runner<'_>) -> Result<(), RunnerError> {
    r.describe("Lifecycle hooks", |r| {
        let journal: Journal = Rc::default();

        r.before(recorder(&journal, "before"))?;
        r.before_each(recorder(&journal, "before_each"))?;
        r.after_each(recorder(&journal, "after_each"))?;
        r.after(recorder(&journal, "after"))?;

        let seen = Rc::clone(&journal);
        r.after(move || {
            assert_eq!(
                *seen.borrow(),
                [
                    "before",
                    "before_each",
                    "after_each",
                    "before_each",
                    "after_each",
                    "after"
                ]
            );
        })?;

        let seen = Rc::clone(&journal);
        r.it("runs before and before_each ahead of the first case", move || {
            assert_eq!(*seen.borrow(), ["before", "before_each"]);
        })?;

        let seen = Rc::clone(&journal);
        r.it("wraps every case in before_each and after_each", move || {
            assert_eq!(
                *seen.borrow(),
                ["before", "before_each", "after_each", "before_each"]
            );
        })?;

        let parent = Rc::clone(&journal);
        r.describe("Nested suite", |r| {
            let runs = Rc::new(Cell::new(0));

            let counter = Rc::clone(&runs);
            r.before_each(move || counter.set(counter.get() + 1))?;

            r.it("runs before the parent's cases and ignores its hooks", move || {
                assert!(parent.borrow().is_empty());
                assert_eq!(runs.get(), 1);
            })
        })
    })?;

    r.describe("Wrapper without cases", |r| {
        r.before(|| -> () {
            panic!("hooks of a suite without cases never run")
        })?;
        r.describe("Hidden", |r| r.it("runs but is not reported", || ()))
    })
}
