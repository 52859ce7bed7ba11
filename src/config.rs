//! Client configuration
//!
//! Built once in `main` from the command line (and `WORD_FILTER_SERVER`).

use crate::core::{LengthError, parse_word_length};
use crate::debounce::DEFAULT_QUIET_PERIOD;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const SERVER_ENV: &str = "WORD_FILTER_SERVER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL of the filtering server
    pub server: Url,
    /// Word length the form starts with
    pub initial_length: usize,
    /// Quiet period before a keystroke triggers a query
    pub quiet_period: Duration,
    /// Where the TUI writes its log
    pub log_file: PathBuf,
}

impl ClientConfig {
    /// Validate raw settings
    ///
    /// # Errors
    /// Returns an error if `server` is not an absolute http(s) URL or
    /// `initial_length` is not a usable word length.
    pub fn new(
        server: &str,
        initial_length: usize,
        quiet_period: Duration,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        let server = parse_server(server)?;
        validate_length(initial_length)
            .with_context(|| format!("Invalid initial word length: {initial_length}"))?;

        Ok(Self {
            server,
            initial_length,
            quiet_period,
            log_file: log_file.unwrap_or_else(default_log_file),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: Url::parse(DEFAULT_SERVER).expect("default server URL is valid"),
            initial_length: DEFAULT_WORD_LENGTH,
            quiet_period: DEFAULT_QUIET_PERIOD,
            log_file: default_log_file(),
        }
    }
}

fn parse_server(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).with_context(|| format!("Invalid server URL: {trimmed}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("Unsupported server URL scheme '{other}' in {trimmed}"),
    }
}

fn validate_length(length: usize) -> Result<usize, LengthError> {
    parse_word_length(&length.to_string())
}

#[must_use]
pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("word_filter.log")
}
