/// A single decoded weather observation, independent of any upstream
/// vendor's wire schema.
///
/// Temperatures carry whatever unit system the configured URL template asked
/// the upstream for; the relay does not convert them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherReport {
    pub location_name: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
}

impl WeatherReport {
    /// Render the one-line summary returned to callers.
    ///
    /// Temperatures are fixed to two decimal places; the line ends with a
    /// newline.
    pub fn summary(&self) -> String {
        format!(
            "Location: {} - {}, temperature: {:.2}, feels like {:.2}\n",
            self.location_name, self.country, self.temperature, self.feels_like
        )
    }
}
