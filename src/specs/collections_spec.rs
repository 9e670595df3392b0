//! Exercises the collection helpers, and the runner along the way: a shared
//! fixture reset by `before`, grown by `before_each`, nested suites with their
//! own fixtures, and two cases that fail on purpose so the report shows both
//! markers.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::collections::{array, find, find_index, object};
use crate::{Runner, RunnerError};

#[derive(Serialize)]
struct Numbered {
    id: usize,
    title: String,
}

#[derive(Serialize)]
struct Random {
    id: usize,
    name: String,
}

type Fixture = Rc<RefCell<Vec<Value>>>;

fn map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn entry<T: Serialize>(item: T) -> Value {
    serde_json::to_value(item).unwrap_or(Value::Null)
}

pub fn register(r: &mut Runner<'_>) -> Result<(), RunnerError> {
    r.describe("General test suite of the lib", |r| {
        let list: Fixture = Rc::default();

        let fixture = Rc::clone(&list);
        r.before(move || fixture.borrow_mut().clear())?;

        let fixture = Rc::clone(&list);
        r.before_each(move || {
            let mut list = fixture.borrow_mut();
            for i in 0..5 {
                list.push(entry(Numbered {
                    id: i,
                    title: format!("Number {}", i + 1),
                }));
            }
        })?;

        r.after_each(|| info!("You can see it after each test case"))?;
        r.after(|| info!("This is the last step of this suite"))?;

        let fixture = Rc::clone(&list);
        r.it("Find an index of the array by an object", move || {
            let list = fixture.borrow();
            assert_eq!(find_index(&list, &map(json!({ "id": 3 }))), Some(3));
        })?;

        let fixture = Rc::clone(&list);
        r.it("Find an element of the array by an object", move || {
            let list = fixture.borrow();
            assert_eq!(
                find(&list, &map(json!({ "id": 1 }))),
                Some(json!({ "title": "Number 2", "id": 1 }))
            );
        })?;

        let fixture = Rc::clone(&list);
        r.it(
            "Try to find an element of the array by an object and fail",
            move || -> Result<(), &'static str> {
                let list = fixture.borrow();
                let found = find(&list, &map(json!({ "id": 1 }))).ok_or("no element with id 1")?;
                if std::ptr::eq(&found, &list[1]) {
                    Ok(())
                } else {
                    Err("find returns a copy, not the stored element")
                }
            },
        )?;

        let fixture = Rc::clone(&list);
        r.it("Check before each hook", move || {
            assert_eq!(fixture.borrow().len(), 20);
        })?;

        immutable_arrays(r)?;
        immutable_objects(r)
    })?;

    r.describe("Another one test suite", |r| {
        r.it("should check boolean expression", || assert_eq!(1 + 1, 2))
    })
}

fn immutable_arrays(r: &mut Runner<'_>) -> Result<(), RunnerError> {
    r.describe("Immutable Arrays", |r| {
        let list: Fixture = Rc::default();

        let fixture = Rc::clone(&list);
        r.before_each(move || {
            let mut rng = rand::thread_rng();
            let mut list = fixture.borrow_mut();
            for id in 0..10 {
                list.push(entry(Random {
                    id,
                    name: format!("Random number{}", rng.gen::<f64>() * 10.0),
                }));
            }
        })?;

        let fixture = Rc::clone(&list);
        r.after_each(move || fixture.borrow_mut().clear())?;

        let fixture = Rc::clone(&list);
        r.it("should add array item", move || {
            let obj = json!({ "id": "new id", "name": "new name" });
            let result = array::push(&fixture.borrow(), obj.clone());
            fixture.borrow_mut().push(obj);

            let list = fixture.borrow();
            assert_eq!(result[0]["id"], list[0]["id"]);
            assert_eq!(list.last(), result.last());
            assert_eq!(list.len(), result.len());
            assert!(!std::ptr::eq(result.as_ptr(), list.as_ptr()));
        })?;

        let fixture = Rc::clone(&list);
        r.it("should remove array item", move || {
            let result = array::remove(&fixture.borrow(), 0);
            assert_eq!(result.len(), 9);
        })
    })
}

fn immutable_objects(r: &mut Runner<'_>) -> Result<(), RunnerError> {
    r.describe("Immutable Objects", |r| {
        r.it("should clone an object", || {
            let obj = map(json!({ "a": 1, "b": 2 }));
            let result = object::clone(&obj);

            assert_eq!(obj["a"], result["a"]);
            assert_eq!(obj["b"], result["b"]);
            assert!(!std::ptr::eq(&obj, &result));
            assert_eq!(obj, result);
        })?;

        r.it("should fail this case to check the report", || {
            let obj = map(json!({ "a": 1, "b": 2 }));
            let result = object::add(&obj, &map(json!({ "c": 3 })));

            assert_eq!(result["c"], 3);
            assert_eq!(obj, result);
        })?;

        r.describe("Immutable 3-d nested level", |r| {
            r.it("should be ok", || assert_eq!(2 * 2, 4))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::CaseStatus;

    #[test]
    fn only_the_deliberate_failures_fail() {
        let mut runner = Runner::new();
        register(&mut runner).unwrap();
        let forest = runner.finish();

        let failed: Vec<_> = forest
            .finished()
            .flat_map(|suite| &suite.cases)
            .filter(|case| case.status == CaseStatus::Fail)
            .map(|case| case.title.as_str())
            .collect();
        assert_eq!(
            failed,
            [
                "should fail this case to check the report",
                "Try to find an element of the array by an object and fail",
            ]
        );
        assert_eq!(forest.summary().passed, 8);
    }
}
