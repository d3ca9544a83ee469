use std::sync::Arc;

use anyhow::Result;
use tracing::Level;
use weathervane_core::{CurrentConditionsDisplay, ForecastDisplay, Observer, StatisticsDisplay, Subject, WeatherData};

fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let station = WeatherData::new();
    let current = CurrentConditionsDisplay::new(&station);
    let _statistics = StatisticsDisplay::new(&station);
    let _forecast = ForecastDisplay::new(&station);

    station.set_measurements(80.0, 65.0, 30.4);
    station.set_measurements(82.0, 70.0, 29.2);
    station.set_measurements(78.0, 90.0, 29.2);

    // Retire the current-conditions panel; the remaining displays keep
    // receiving whatever the sensors report, however implausible.
    let retired: Arc<dyn Observer> = current;
    station.remove_observer(&retired)?;
    station.set_measurements(120.0, 100.0, 1000.0);

    Ok(())
}
