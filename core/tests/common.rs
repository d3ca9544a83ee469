use std::sync::{Arc, Mutex};

use weathervane_core::{CallbackObserver, Measurements, Observer};

/// A probe observer plus a closure that drains everything it has seen so far.
#[allow(unused)]
pub fn probe() -> (Arc<dyn Observer>, impl Fn() -> Vec<Measurements>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let observer: Arc<dyn Observer> = {
        let seen = seen.clone();
        Arc::new(CallbackObserver::new(move |reading| seen.lock().unwrap().push(reading)))
    };
    let check = move || seen.lock().unwrap().drain(..).collect();
    (observer, check)
}

/// A probe that records `label` into the shared `log` on every notification,
/// for asserting delivery order across several observers.
#[allow(unused)]
pub fn labeled_probe(label: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Arc<dyn Observer> {
    let log = log.clone();
    Arc::new(CallbackObserver::new(move |_| log.lock().unwrap().push(label)))
}
