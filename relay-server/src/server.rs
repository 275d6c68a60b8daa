use axum::{Router, extract::State, http::Uri};
use relay_core::WeatherProvider;
use std::sync::Arc;

/// Shared application state, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn WeatherProvider>,
}

/// Build the relay router.
///
/// Every path on every method is the relay endpoint, so the router is a
/// single fallback rather than a route table.
pub fn router(provider: Arc<dyn WeatherProvider>) -> Router {
    Router::new()
        .fallback(relay)
        .with_state(AppState { provider })
}

/// Relay handler.
///
/// The query is the raw request path with exactly one leading `/` removed;
/// no trimming, decoding, or validation is applied. A provider failure
/// becomes the response body, with the status left at its success default.
async fn relay(State(state): State<AppState>, uri: Uri) -> String {
    let path = uri.path();
    let query = path.strip_prefix('/').unwrap_or(path);

    match state.provider.fetch(query).await {
        Ok(summary) => summary,
        Err(err) => {
            tracing::error!("weather request for {:?} failed: {:#}", query, err);
            format!("{err:#}")
        }
    }
}
