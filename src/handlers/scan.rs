use crate::models::api::{ErrorResponse, ScanRequest, ScanResponse};
use crate::services::fetch::FetchClient;
use crate::services::orchestrator::run_security_scan;
use actix_web::{HttpResponse, Result as ActixResult, web};
use anyhow::{Result, anyhow};
use chrono::Utc;
use log::{error, info};
use uuid::Uuid;

pub struct AppState {
    pub page_fetch_timeout_ms: u64,
}

pub async fn handle_scan_request(
    body: web::Json<ScanRequest>,
    data: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let url = body.url.trim();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("url must be absolute http or https")));
    }

    match process_scan(url, data.page_fetch_timeout_ms).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!("scan of {} failed: {}", url, e);
            Ok(HttpResponse::BadGateway().json(ErrorResponse::new(e.to_string())))
        }
    }
}

async fn process_scan(url: &str, page_fetch_timeout_ms: u64) -> Result<ScanResponse> {
    info!("fetching page for scan: {}", url);

    let client = FetchClient::new()?;
    let response = client
        .fetch_with_timeout(url, page_fetch_timeout_ms)
        .await
        .into_response()
        .ok_or_else(|| anyhow!("target page could not be fetched"))?;

    if !response.status().is_success() {
        return Err(anyhow!("target page returned HTTP {}", response.status()));
    }

    let html = response.text().await?;
    let result = run_security_scan(url, &html).await?;

    Ok(ScanResponse {
        scan_id: Uuid::new_v4(),
        url: url.to_string(),
        scanned_at: Utc::now(),
        result,
    })
}
