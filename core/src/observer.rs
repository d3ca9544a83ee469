use std::sync::Arc;

use crate::Measurements;

mod callback;
pub use callback::*;

/// A unique identity for a registered observer that cannot be forged or
/// constructed by callers. Derived from the observer allocation's address and
/// used only to match registrations on removal and to label log lines.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
    pub(crate) fn of(observer: &Arc<dyn Observer>) -> Self { Self(Arc::as_ptr(observer) as *const () as usize) }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Push-delivery contract for weather readings.
///
/// The subject calls [`update`](Observer::update) with the full reading every
/// time its state changes. There is no pull step: implementors recompute their
/// derived state and render immediately, before control returns to the
/// subject. `update` is infallible by signature; a panicking observer aborts
/// the remaining notifications of that fan-out.
pub trait Observer: Send + Sync {
    /// Receive the latest reading from a subject this observer is registered with.
    fn update(&self, reading: Measurements);
}
