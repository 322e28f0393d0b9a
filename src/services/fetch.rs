use crate::error::ScanError;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

const SCANNER_USER_AGENT: &str = "WebsiteGrader-SecurityScanner/1.0";

/// Outcome of a single guarded fetch. Timeouts and network-level failures
/// are data, not errors: the scanners match over this and treat both
/// non-success variants as "no data for this probe".
pub enum ProbeOutcome {
    Success(reqwest::Response),
    TimedOut,
    NetworkError,
}

impl ProbeOutcome {
    pub fn into_response(self) -> Option<reqwest::Response> {
        match self {
            ProbeOutcome::Success(resp) => Some(resp),
            ProbeOutcome::TimedOut | ProbeOutcome::NetworkError => None,
        }
    }
}

pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    pub fn new() -> Result<Self, ScanError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(SCANNER_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    /// Bounded GET: resolves within `timeout_ms` and never returns an error
    /// for anything the network did to us.
    pub async fn fetch_with_timeout(&self, url: &str, timeout_ms: u64) -> ProbeOutcome {
        let request = self
            .client
            .get(url)
            .timeout(Duration::from_millis(timeout_ms));

        match request.send().await {
            Ok(response) => ProbeOutcome::Success(response),
            Err(e) if e.is_timeout() => {
                debug!("fetch timed out after {}ms: {}", timeout_ms, url);
                ProbeOutcome::TimedOut
            }
            Err(e) => {
                debug!("fetch failed for {}: {}", url, e);
                ProbeOutcome::NetworkError
            }
        }
    }
}
