use std::sync::Arc;
use weathervane_core::{
    CurrentConditionsDisplay, ForecastDisplay, Measurements, Observer, StatisticsDisplay, Subject, Trend, WeatherData,
};

#[test]
fn current_conditions_cache_tracks_latest_reading_until_removed() {
    let station = WeatherData::new();
    let current = CurrentConditionsDisplay::new(&station);

    station.set_measurements(80.0, 65.0, 30.4);
    assert_eq!(current.reading(), Measurements::new(80.0, 65.0, 30.4));

    let observer: Arc<dyn Observer> = current.clone();
    station.remove_observer(&observer).unwrap();

    // The station keeps broadcasting; the removed display keeps its last cache.
    station.set_measurements(120.0, 100.0, 1000.0);
    assert_eq!(current.reading(), Measurements::new(80.0, 65.0, 30.4));
}

#[test]
fn current_conditions_render_shows_the_cached_reading() {
    let station = WeatherData::new();
    let current = CurrentConditionsDisplay::new(&station);

    station.set_measurements(80.0, 65.0, 30.4);
    assert_eq!(
        current.render(),
        "<====================== Current conditions ======================>\n\
         Current conditions: 80 F degrees and 65 [%] humidity and pressure 30.4"
    );
}

#[test]
fn statistics_track_running_average_max_and_min() {
    let station = WeatherData::new();
    let statistics = StatisticsDisplay::new(&station);

    station.set_measurements(80.0, 65.0, 30.4);
    station.set_measurements(82.0, 70.0, 29.2);
    station.set_measurements(78.0, 90.0, 29.2);

    assert_eq!(statistics.readings(), 3);
    assert_eq!(statistics.average(), 80.0);
    assert_eq!(statistics.max(), 82.0);
    assert_eq!(statistics.min(), 78.0);
}

#[test]
#[should_panic(expected = "before any reading")]
fn statistics_average_before_any_reading_is_a_caller_error() {
    let station = WeatherData::new();
    let statistics = StatisticsDisplay::new(&station);
    statistics.average();
}

#[test]
fn forecast_applies_the_fixed_linear_model() {
    let station = WeatherData::new();
    let forecast = ForecastDisplay::new(&station);

    station.set_measurements(80.0, 65.0, 30.4);

    let projected = forecast.forecast();
    assert!((projected.temperature - (80.0 + 0.11 * 65.0 + 0.2 * 30.4)).abs() < 1e-9);
    assert!((projected.humidity - (65.0 - 0.9 * 65.0)).abs() < 1e-9);
    assert!((projected.pressure - (30.4 + 0.1 * 80.0 - 0.21 * 30.4)).abs() < 1e-9);
}

#[test]
fn forecast_accepts_nonsense_readings_without_clamping() {
    let station = WeatherData::new();
    let forecast = ForecastDisplay::new(&station);

    station.set_measurements(120.0, 100.0, 1000.0);

    let projected = forecast.forecast();
    assert!((projected.temperature - 331.0).abs() < 1e-9);
    assert!((projected.humidity - 10.0).abs() < 1e-9);
    assert!((projected.pressure - 802.0).abs() < 1e-9);
}

#[test]
fn pressure_trend_follows_consecutive_readings() {
    let station = WeatherData::new();
    let forecast = ForecastDisplay::new(&station);

    // First reading compares against the 29.92 inHg seed.
    station.set_measurements(80.0, 65.0, 30.4);
    assert_eq!(forecast.trend(), Trend::Improving);

    station.set_measurements(82.0, 70.0, 29.2);
    assert_eq!(forecast.trend(), Trend::Deteriorating);

    station.set_measurements(78.0, 90.0, 29.2);
    assert_eq!(forecast.trend(), Trend::Steady);
}

#[test]
fn trend_lines_render_the_fixed_phrases() {
    assert_eq!(Trend::Improving.to_string(), "Improving weather on the way!");
    assert_eq!(Trend::Steady.to_string(), "More of the same");
    assert_eq!(Trend::Deteriorating.to_string(), "Watch out for cooler, rainy weather");
}

/// The full demonstration sequence the station binary runs, end to end.
#[test]
fn demo_sequence_drives_all_three_displays() {
    let station = WeatherData::new();
    let current = CurrentConditionsDisplay::new(&station);
    let statistics = StatisticsDisplay::new(&station);
    let forecast = ForecastDisplay::new(&station);

    station.set_measurements(80.0, 65.0, 30.4);
    station.set_measurements(82.0, 70.0, 29.2);
    station.set_measurements(78.0, 90.0, 29.2);

    let observer: Arc<dyn Observer> = current.clone();
    station.remove_observer(&observer).unwrap();
    station.set_measurements(120.0, 100.0, 1000.0);

    // The removed display stopped at the third reading.
    assert_eq!(current.reading(), Measurements::new(78.0, 90.0, 29.2));

    // The others saw all four, nonsense values included.
    assert_eq!(statistics.readings(), 4);
    assert_eq!(statistics.average(), 90.0);
    assert_eq!(statistics.max(), 120.0);
    assert_eq!(statistics.min(), 78.0);
    assert_eq!(forecast.trend(), Trend::Improving);
    assert!((forecast.forecast().pressure - 802.0).abs() < 1e-9);
}
