//! Background worker registration
//!
//! At start-up the client fetches the server's update worker script from its
//! well-known path. The outcome is only logged.

use std::fmt;
use url::Url;

/// Well-known path of the background update worker
pub const WORKER_PATH: &str = "/static/js/service-worker.js";

#[derive(Debug)]
pub enum RegistrationError {
    Url(url::ParseError),
    Request(reqwest::Error),
    Status(u16),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(err) => write!(f, "bad worker URL: {err}"),
            Self::Request(err) => write!(f, "worker request failed: {err}"),
            Self::Status(status) => write!(f, "worker script returned HTTP {status}"),
        }
    }
}

impl std::error::Error for RegistrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Url(err) => Some(err),
            Self::Request(err) => Some(err),
            Self::Status(_) => None,
        }
    }
}

/// URL of the worker script on `server`
///
/// # Errors
/// Returns an error if the path cannot be joined onto `server`.
pub fn worker_url(server: &Url) -> Result<Url, url::ParseError> {
    server.join(WORKER_PATH)
}

/// Fetch the worker script; returns its size in bytes
///
/// # Errors
/// Returns `RegistrationError` on transport failure or a non-success status.
pub async fn register_worker(
    http: &reqwest::Client,
    server: &Url,
) -> Result<usize, RegistrationError> {
    let url = worker_url(server).map_err(RegistrationError::Url)?;
    let response = http
        .get(url)
        .send()
        .await
        .map_err(RegistrationError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(RegistrationError::Status(status.as_u16()));
    }

    let script = response.bytes().await.map_err(RegistrationError::Request)?;
    Ok(script.len())
}

/// Register in the background, logging the outcome
#[must_use = "dropping the handle detaches the registration task"]
pub fn spawn_registration(
    runtime: &tokio::runtime::Handle,
    http: reqwest::Client,
    server: Url,
) -> tokio::task::JoinHandle<()> {
    runtime.spawn(async move {
        match register_worker(&http, &server).await {
            Ok(bytes) => tracing::info!(bytes, "background worker registered"),
            Err(err) => tracing::warn!(error = %err, "background worker registration failed"),
        }
    })
}
