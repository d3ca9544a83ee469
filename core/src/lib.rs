/*!
Push-based weather-station fan-out in the classic subject/observer shape.

# Design notes:
- A subject holds the latest measurement triple and an ordered observer
  registry; every push of new measurements notifies every registration, in
  registration order, with no dirty check.
- Observers are trait objects behind `Arc`, so new display variants plug in
  without touching the subject.
- Registration is append-only and deliberately not deduplicated; removal is
  explicit and errors when the observer is absent.
- Notification iterates a snapshot of the registry, so observers may touch
  the registry from inside their own callback; changes land next fan-out.
- Everything is synchronous and single-threaded by contract. The `Send + Sync`
  bounds exist so subjects can be shared, not because fan-out is concurrent.

# Basic usage

```rust
use std::sync::Arc;
use weathervane_core::{CurrentConditionsDisplay, Observer, Subject, WeatherData};

let station = WeatherData::new();
let current = CurrentConditionsDisplay::new(&station);

station.set_measurements(80.0, 65.0, 30.4);
assert_eq!(current.reading().temperature, 80.0);

// Unregister; later pushes no longer reach the display.
let observer: Arc<dyn Observer> = current.clone();
station.remove_observer(&observer)?;
station.set_measurements(120.0, 100.0, 1000.0);
assert_eq!(current.reading().temperature, 80.0);
# Ok::<(), weathervane_core::SubjectError>(())
```

# Observing with a closure

```rust
use std::sync::{mpsc, Arc};
use weathervane_core::{CallbackObserver, Subject, WeatherData};

let station = WeatherData::new();
let (tx, rx) = mpsc::channel();
station.register_observer(Arc::new(CallbackObserver::from(tx)));

station.set_measurements(78.0, 90.0, 29.2);
assert_eq!(rx.recv().unwrap().pressure, 29.2);
```
*/

mod display;
mod error;
mod measurement;
mod observer;
mod subject;
mod weather;

pub use display::*;
pub use error::*;
pub use measurement::*;
pub use observer::*;
pub use subject::*;
pub use weather::*;
