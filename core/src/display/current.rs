use std::sync::{Arc, RwLock};

use crate::{Measurements, Observer, Subject};

/// Shows the reading the station most recently pushed, verbatim.
///
/// The cache seeds at all-zeros, so rendering before the first update shows
/// zeros rather than erroring.
pub struct CurrentConditionsDisplay {
    reading: RwLock<Measurements>,
}

impl CurrentConditionsDisplay {
    /// Create the display and register it with `station` in one step. The
    /// registration ends only through [`Subject::remove_observer`].
    pub fn new(station: &dyn Subject) -> Arc<Self> {
        let display = Arc::new(Self { reading: RwLock::new(Measurements::new(0.0, 0.0, 0.0)) });
        station.register_observer(display.clone());
        display
    }

    /// The last reading received.
    pub fn reading(&self) -> Measurements { *self.reading.read().expect("reading lock poisoned") }

    pub fn render(&self) -> String {
        format!("<====================== Current conditions ======================>\nCurrent conditions: {}", self.reading())
    }

    pub fn display(&self) { println!("{}", self.render()) }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&self, reading: Measurements) {
        *self.reading.write().expect("reading lock poisoned") = reading;
        self.display();
    }
}
