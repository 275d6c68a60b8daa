use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A capability that turns a free-text location query into a formatted
/// weather summary.
///
/// The HTTP surface only ever talks to this trait, so an alternate upstream
/// vendor can be substituted without touching the handler.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch weather data for `query` and format it for the caller.
    ///
    /// Errors describe upstream transport failures. They are per-request:
    /// a failed fetch never takes the process down.
    async fn fetch(&self, query: &str) -> anyhow::Result<String>;
}
