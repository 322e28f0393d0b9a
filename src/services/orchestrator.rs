use crate::error::ScanError;
use crate::models::scan::SecurityScanResult;
use crate::services::fetch::FetchClient;
use crate::services::scoring::calculate_security_score;
use crate::services::{exposed, secrets};
use log::info;
use std::time::Instant;

/// Entry point for one security scan. `url` is the absolute page URL the
/// caller already fetched; `html` is that page's raw body, so the scanner
/// never refetches the primary page. The two sub-scans are independent and
/// run concurrently; each scan owns its own client and findings, so calls
/// for different targets can run side by side.
pub async fn run_security_scan(url: &str, html: &str) -> Result<SecurityScanResult, ScanError> {
    let started = Instant::now();
    let client = FetchClient::new()?;

    let (secrets_found, exposed_files) = tokio::join!(
        secrets::scan_for_secrets(&client, url, html),
        exposed::scan_for_exposed_files(&client, url),
    );
    let exposed_files = exposed_files?;

    let security_score = calculate_security_score(&secrets_found, &exposed_files);
    let scan_duration = started.elapsed().as_millis() as u64;

    info!(
        "scan of {} finished in {}ms: {} secrets, {} exposed files, score {}",
        url,
        scan_duration,
        secrets_found.len(),
        exposed_files.len(),
        security_score
    );

    Ok(SecurityScanResult {
        secrets_found,
        exposed_files,
        security_score,
        scan_duration,
    })
}
