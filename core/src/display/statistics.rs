use std::sync::{Arc, RwLock};

use crate::{Measurements, Observer, Subject};

/// Sentinel starting minimum, hotter than any plausible reading, so the first
/// real temperature always replaces it.
const INITIAL_MIN_TEMP: f64 = 200.0;

/// Running temperature aggregate over every reading received.
///
/// Carries the station firmware's seeding quirk: the running maximum starts
/// at 0, so a first reading at or below 0 leaves it untouched.
pub struct StatisticsDisplay {
    stats: RwLock<TemperatureStats>,
}

struct TemperatureStats {
    max_temp: f64,
    min_temp: f64,
    temp_sum: f64,
    num_readings: u32,
}

impl StatisticsDisplay {
    /// Create the display and register it with `station` in one step.
    pub fn new(station: &dyn Subject) -> Arc<Self> {
        let display = Arc::new(Self {
            stats: RwLock::new(TemperatureStats { max_temp: 0.0, min_temp: INITIAL_MIN_TEMP, temp_sum: 0.0, num_readings: 0 }),
        });
        station.register_observer(display.clone());
        display
    }

    /// Mean temperature over all readings so far.
    ///
    /// # Panics
    /// Panics when called before any reading has arrived. Rendering an empty
    /// aggregate is caller misuse, and an f64 division would hide it as NaN.
    pub fn average(&self) -> f64 {
        let stats = self.stats.read().expect("stats lock poisoned");
        assert!(stats.num_readings > 0, "statistics display rendered before any reading");
        stats.temp_sum / stats.num_readings as f64
    }

    /// Highest temperature seen, or the 0.0 seed before any reading above it.
    pub fn max(&self) -> f64 { self.stats.read().expect("stats lock poisoned").max_temp }

    /// Lowest temperature seen, or the sentinel seed before any reading.
    pub fn min(&self) -> f64 { self.stats.read().expect("stats lock poisoned").min_temp }

    /// Number of readings aggregated so far.
    pub fn readings(&self) -> u32 { self.stats.read().expect("stats lock poisoned").num_readings }

    pub fn render(&self) -> String {
        format!(
            "<====================== Weather Statistics ======================>\nAvg/Max/Min temperature = {}/{}/{}",
            self.average(),
            self.max(),
            self.min()
        )
    }

    pub fn display(&self) { println!("{}", self.render()) }
}

impl Observer for StatisticsDisplay {
    fn update(&self, reading: Measurements) {
        {
            let mut stats = self.stats.write().expect("stats lock poisoned");
            stats.temp_sum += reading.temperature;
            stats.num_readings += 1;
            stats.max_temp = stats.max_temp.max(reading.temperature);
            stats.min_temp = stats.min_temp.min(reading.temperature);
        }
        self.display();
    }
}
