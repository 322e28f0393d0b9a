use thiserror::Error;

/// Failures that abort a scan and surface to the caller. Per-probe network
/// failures are not errors; the scanners absorb those as "no data".
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to construct HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
