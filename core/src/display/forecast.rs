use std::sync::{Arc, RwLock};

use crate::{Measurements, Observer, Subject};

/// Pressure seed used before any reading arrives: standard sea-level pressure
/// in inHg, so the first real reading compares against a plausible sky.
const SEED_PRESSURE: f64 = 29.92;

/// Qualitative pressure trend between the two most recent readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Steady,
    Deteriorating,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = match self {
            Trend::Improving => "Improving weather on the way!",
            Trend::Steady => "More of the same",
            Trend::Deteriorating => "Watch out for cooler, rainy weather",
        };
        write!(f, "{line}")
    }
}

/// Projects the next readings from the current ones with the station's fixed
/// linear model, and classifies the pressure trend against the previous
/// reading.
pub struct ForecastDisplay {
    state: RwLock<ForecastState>,
}

struct ForecastState {
    current_pressure: f64,
    last_pressure: f64,
    forecast: Measurements,
}

impl ForecastDisplay {
    /// Create the display and register it with `station` in one step.
    pub fn new(station: &dyn Subject) -> Arc<Self> {
        let display = Arc::new(Self {
            state: RwLock::new(ForecastState {
                current_pressure: SEED_PRESSURE,
                last_pressure: 0.0,
                forecast: Measurements::new(0.0, 0.0, 0.0),
            }),
        });
        station.register_observer(display.clone());
        display
    }

    /// The projected reading derived from the latest update.
    pub fn forecast(&self) -> Measurements { self.state.read().expect("forecast lock poisoned").forecast }

    /// Trend of the latest pressure against the one before it. The comparison
    /// uses the shifted-out previous value, not the incoming reading, so two
    /// identical consecutive pressures classify as steady.
    pub fn trend(&self) -> Trend {
        let state = self.state.read().expect("forecast lock poisoned");
        if state.current_pressure > state.last_pressure {
            Trend::Improving
        } else if state.current_pressure == state.last_pressure {
            Trend::Steady
        } else {
            Trend::Deteriorating
        }
    }

    pub fn render(&self) -> String {
        let forecast = self.forecast();
        format!(
            "Forecast Temp: {}F\nForecast Humidity: {}%\nForecast Pressure: {}inHg\nGeneral Forecast: {}",
            forecast.temperature, forecast.humidity, forecast.pressure, self.trend()
        )
    }

    pub fn display(&self) { println!("{}", self.render()) }
}

impl Observer for ForecastDisplay {
    fn update(&self, reading: Measurements) {
        {
            let mut state = self.state.write().expect("forecast lock poisoned");
            state.last_pressure = state.current_pressure;
            state.current_pressure = reading.pressure;
            state.forecast = Measurements::new(
                reading.temperature + 0.11 * reading.humidity + 0.2 * reading.pressure,
                reading.humidity - 0.9 * reading.humidity,
                reading.pressure + 0.1 * reading.temperature - 0.21 * reading.pressure,
            );
        }
        self.display();
    }
}
