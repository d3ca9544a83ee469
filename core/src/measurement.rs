/// A single reading pushed from the station hardware.
///
/// No bounds are enforced anywhere in the crate: the station reports whatever
/// its sensors produced, physically nonsensical values included, and every
/// display consumes them as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Measurements {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self { Self { temperature, humidity, pressure } }
}

impl std::fmt::Display for Measurements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} F degrees and {} [%] humidity and pressure {}", self.temperature, self.humidity, self.pressure)
    }
}
