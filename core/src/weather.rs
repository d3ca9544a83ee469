use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::{Measurements, Observer, ObserverSet, Subject, SubjectError};

/// The concrete [`Subject`]: holds the reading most recently pushed from the
/// station hardware and fans it out to the registered displays.
///
/// Only the latest reading is kept. History belongs to the observers that
/// want it (see [`StatisticsDisplay`](crate::StatisticsDisplay)).
pub struct WeatherData {
    reading: RwLock<Measurements>,
    observers: ObserverSet,
}

impl WeatherData {
    pub fn new() -> Self { Self { reading: RwLock::new(Measurements::new(0.0, 0.0, 0.0)), observers: ObserverSet::new() } }

    /// Overwrite the stored reading, then fan it out to every observer.
    ///
    /// There is no dirty check: every call notifies, even when the values are
    /// identical to the previous reading.
    pub fn set_measurements(&self, temperature: f64, humidity: f64, pressure: f64) {
        debug!(temperature, humidity, pressure, "station pushed new measurements");
        *self.reading.write().expect("reading lock poisoned") = Measurements::new(temperature, humidity, pressure);
        self.measurements_changed();
    }

    /// The most recently stored reading.
    pub fn reading(&self) -> Measurements { *self.reading.read().expect("reading lock poisoned") }

    fn measurements_changed(&self) { self.notify_observers() }
}

impl Default for WeatherData {
    fn default() -> Self { Self::new() }
}

impl Subject for WeatherData {
    fn register_observer(&self, observer: Arc<dyn Observer>) { self.observers.register(observer) }

    fn remove_observer(&self, observer: &Arc<dyn Observer>) -> Result<(), SubjectError> { self.observers.remove(observer) }

    fn notify_observers(&self) { self.observers.notify(self.reading()) }
}
