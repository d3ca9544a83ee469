use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::{Measurements, Observer, ObserverId, SubjectError};

/// Contract for anything that owns observable measurement state.
///
/// [`WeatherData`](crate::WeatherData) is the only concrete subject in this
/// crate, but the contract stays open so alternative stations (replay files,
/// test fixtures) can fan out to the same displays.
pub trait Subject {
    /// Append `observer` to the end of the notification sequence.
    ///
    /// Registration is not deduplicated: an observer registered twice is
    /// notified twice per change, once in each of its registered positions.
    fn register_observer(&self, observer: Arc<dyn Observer>);

    /// Remove the first registration of `observer` from the notification
    /// sequence.
    ///
    /// Errors with [`SubjectError::NotRegistered`] when the observer holds no
    /// registration at the time of the call; removal is never a silent no-op.
    fn remove_observer(&self, observer: &Arc<dyn Observer>) -> Result<(), SubjectError>;

    /// Deliver the current reading to every registered observer, in
    /// registration order.
    fn notify_observers(&self);
}

/// An ordered registry of observers, shared by value.
///
/// Registrations keep their insertion order and that order is the notification
/// order. Notification iterates over a snapshot of the sequence, so an
/// observer may register or remove observers (itself included) from inside its
/// own `update` callback; such changes take effect from the next notification.
pub struct ObserverSet(Arc<RwLock<Vec<Arc<dyn Observer>>>>);

impl Clone for ObserverSet {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl Default for ObserverSet {
    fn default() -> Self { Self::new() }
}

impl ObserverSet {
    pub fn new() -> Self { Self(Arc::new(RwLock::new(Vec::new()))) }

    pub fn register(&self, observer: Arc<dyn Observer>) {
        debug!("registering observer {}", ObserverId::of(&observer));
        self.0.write().expect("observer registry lock poisoned").push(observer);
    }

    pub fn remove(&self, observer: &Arc<dyn Observer>) -> Result<(), SubjectError> {
        let id = ObserverId::of(observer);
        let mut observers = self.0.write().expect("observer registry lock poisoned");
        match observers.iter().position(|registered| ObserverId::of(registered) == id) {
            Some(index) => {
                observers.remove(index);
                debug!("removed observer {id}");
                Ok(())
            }
            None => Err(SubjectError::NotRegistered(id)),
        }
    }

    /// Number of live registrations, duplicates included.
    pub fn len(&self) -> usize { self.0.read().expect("observer registry lock poisoned").len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Deliver `reading` to every registered observer in insertion order.
    pub fn notify(&self, reading: Measurements) {
        // Snapshot the sequence so callbacks can touch the registry without
        // invalidating the iteration.
        let observers = { self.0.read().expect("observer registry lock poisoned").clone() };
        for observer in &observers {
            observer.update(reading);
        }
    }
}
