use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{config::Config, model::WeatherReport};

use super::WeatherProvider;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Relays queries to an OpenWeather-compatible endpoint.
///
/// The upstream URL comes from [`Config::url`], a template with a single
/// `%s` placeholder the query is substituted into. Each fetch issues exactly
/// one GET; there is no caching, retry, or backoff.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    config: Config,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    /// Substitute `query` into the configured URL template.
    ///
    /// Replaces the first `%s` occurrence verbatim; no percent-encoding is
    /// applied. A template without a placeholder passes through unchanged.
    fn build_url(&self, query: &str) -> String {
        self.config.url.replacen("%s", query, 1)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwSys {
    country: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwResponse {
    name: String,
    main: OwMain,
    sys: OwSys,
}

impl From<OwResponse> for WeatherReport {
    fn from(parsed: OwResponse) -> Self {
        WeatherReport {
            location_name: parsed.name,
            country: parsed.sys.country,
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, query: &str) -> Result<String> {
        let url = self.build_url(query);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to request weather data from upstream")?;

        // The status code is not consulted: any body that does not decode,
        // including error pages, degrades to the zero-valued report.
        let body = res.text().await.unwrap_or_default();

        let parsed: OwResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!("upstream body did not match the schema: {}", err);
                OwResponse::default()
            }
        };

        Ok(WeatherReport::from(parsed).summary())
    }
}
