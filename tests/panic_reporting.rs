//! The CLI's quiet panic hook only swallows panics caught by the failure
//! boundary. This lives in its own test binary because panic hooks are
//! process-wide.

use std::panic;
use std::sync::{Arc, Mutex};

use nestest::{logging, Runner, RunnerError};

#[test]
fn panics_outside_callbacks_reach_the_previous_hook() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    panic::set_hook(Box::new(move |info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .unwrap_or("non-literal panic");
        recorder.lock().unwrap().push(message.to_string());
    }));
    logging::quiet_panics();

    let mut runner = Runner::new();
    runner
        .describe("suite", |r| r.it("fails", || -> () { panic!("inside a case") }))
        .unwrap();

    let escaped = panic::catch_unwind(|| {
        let mut runner = Runner::new();
        runner.describe("broken", |_| -> Result<(), RunnerError> {
            panic!("fixture could not be loaded")
        })
    });
    drop(panic::take_hook());

    assert!(escaped.is_err());
    assert_eq!(*seen.lock().unwrap(), ["fixture could not be loaded"]);
}
