use super::Observer;
use crate::Measurements;

/// An observer that forwards every reading to a closure.
///
/// Lets callers wire readings into channels or test probes without writing a
/// dedicated display type.
pub struct CallbackObserver(Box<dyn Fn(Measurements) + Send + Sync>);

impl CallbackObserver {
    pub fn new<F>(callback: F) -> Self
    where F: Fn(Measurements) + Send + Sync + 'static {
        Self(Box::new(callback))
    }
}

impl Observer for CallbackObserver {
    fn update(&self, reading: Measurements) { (self.0)(reading) }
}

impl From<std::sync::mpsc::Sender<Measurements>> for CallbackObserver {
    fn from(sender: std::sync::mpsc::Sender<Measurements>) -> Self {
        Self::new(move |reading| {
            let _ = sender.send(reading); // a receiver that hung up just stops listening
        })
    }
}
