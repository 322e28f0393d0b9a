use crate::error::ScanError;
use crate::models::scan::{ExposedFileFinding, Severity};
use crate::services::fetch::{FetchClient, ProbeOutcome};
use crate::utils::paths::{EXPOSED_PATHS, ExposedPathEntry, SOURCE_MAP_PATHS};
use futures::future::join_all;
use log::debug;
use url::Url;

const MAX_PROBED_PATHS: usize = 20;
const PROBE_TIMEOUT_MS: u64 = 3000;
const SOURCE_MAP_TIMEOUT_MS: u64 = 2000;

// Fallback-page classification bounds.
const HTML_FALLBACK_MIN_BYTES: u64 = 1000;
const MAX_PLAUSIBLE_FILE_BYTES: u64 = 1_000_000;

/// Probes the origin of `base_url` for the highest-priority catalog paths
/// plus common JS source maps. Catalog probes fan out concurrently under a
/// hard cap; source-map probes run sequentially and stop at the first hit.
pub async fn scan_for_exposed_files(
    client: &FetchClient,
    base_url: &str,
) -> Result<Vec<ExposedFileFinding>, ScanError> {
    let origin = derive_origin(base_url)?;

    let probes = EXPOSED_PATHS
        .iter()
        .take(MAX_PROBED_PATHS)
        .map(|entry| probe_path(client, &origin, entry));

    let mut findings: Vec<ExposedFileFinding> =
        join_all(probes).await.into_iter().flatten().collect();

    if let Some(finding) = probe_source_maps(client, &origin).await {
        findings.push(finding);
    }

    Ok(findings)
}

fn derive_origin(base_url: &str) -> Result<String, ScanError> {
    let url = Url::parse(base_url)?;
    Ok(url.origin().ascii_serialization())
}

async fn probe_path(
    client: &FetchClient,
    origin: &str,
    entry: &ExposedPathEntry,
) -> Option<ExposedFileFinding> {
    let target = format!("{}{}", origin, entry.path);

    let response = match client.fetch_with_timeout(&target, PROBE_TIMEOUT_MS).await {
        ProbeOutcome::Success(resp) => resp,
        ProbeOutcome::TimedOut | ProbeOutcome::NetworkError => return None,
    };

    if response.status().as_u16() != 200 {
        return None;
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let content_length: u64 = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    if !passes_header_checks(&content_type, content_length) {
        return None;
    }

    let body = response.text().await.ok()?;
    if is_fallback_document(&body, entry.path) {
        debug!("fallback page served for {}, not a real file", entry.path);
        return None;
    }

    Some(ExposedFileFinding {
        path: entry.path.to_string(),
        file_type: entry.file_type.to_string(),
        severity: entry.severity,
        description: entry.description.to_string(),
        remediation: format!(
            "Remove or restrict access to {}. Configure your web server to block access to sensitive files.",
            entry.path
        ),
    })
}

/// Catch-all routers answer 200 + HTML for any path; a sizable HTML body,
/// or an HTML document at a non-.html path, is the app shell, not a file.
fn passes_header_checks(content_type: &str, content_length: u64) -> bool {
    if content_type.contains("text/html") && content_length > HTML_FALLBACK_MIN_BYTES {
        return false;
    }
    if content_length == 0 || content_length >= MAX_PLAUSIBLE_FILE_BYTES {
        return false;
    }
    true
}

fn is_fallback_document(body: &str, path: &str) -> bool {
    if path.ends_with(".html") {
        return false;
    }
    body.contains("<!DOCTYPE") || body.contains("<html")
}

async fn probe_source_maps(client: &FetchClient, origin: &str) -> Option<ExposedFileFinding> {
    for path in SOURCE_MAP_PATHS {
        let target = format!("{}{}", origin, path);
        let response = match client
            .fetch_with_timeout(&target, SOURCE_MAP_TIMEOUT_MS)
            .await
        {
            ProbeOutcome::Success(resp) => resp,
            ProbeOutcome::TimedOut | ProbeOutcome::NetworkError => continue,
        };

        if response.status().as_u16() != 200 {
            continue;
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if content_type.contains("json") || content_type.contains("octet-stream") {
            return Some(ExposedFileFinding {
                path: path.to_string(),
                file_type: "Source Map".to_string(),
                severity: Severity::Medium,
                description: "JavaScript source map publicly accessible, exposing original source code".to_string(),
                remediation: format!(
                    "Remove or restrict access to {}. Disable source map generation for production builds.",
                    path
                ),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_strips_path_and_query() {
        assert_eq!(
            derive_origin("https://example.com/pricing?plan=pro").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            derive_origin("http://localhost:8080/index.html").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn bad_base_url_is_a_caller_error() {
        assert!(matches!(
            derive_origin("not a url"),
            Err(ScanError::InvalidUrl(_))
        ));
    }

    #[test]
    fn header_checks_reject_spa_fallback_and_implausible_sizes() {
        assert!(!passes_header_checks("text/html; charset=utf-8", 5000));
        assert!(!passes_header_checks("text/plain", 0));
        assert!(!passes_header_checks("text/plain", 1_000_000));
        assert!(passes_header_checks("text/plain", 120));
        // Small HTML bodies survive header checks; the body check decides.
        assert!(passes_header_checks("text/html", 300));
    }

    #[test]
    fn html_document_body_counts_as_fallback_for_non_html_paths() {
        assert!(is_fallback_document("<!DOCTYPE html><html></html>", "/.env"));
        assert!(is_fallback_document("<html><body>404</body></html>", "/.git/config"));
        assert!(!is_fallback_document("DB_PASSWORD=hunter22", "/.env"));
        assert!(!is_fallback_document("<!DOCTYPE html><html></html>", "/readme.html"));
    }
}
