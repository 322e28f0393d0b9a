use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use dotenv::dotenv;
use log::info;
use std::env;

use website_scanner::handlers::scan::{AppState, handle_scan_request};

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "website-scanner"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let page_fetch_timeout_ms = env::var("PAGE_FETCH_TIMEOUT_MS")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u64>()
        .unwrap_or(5000);

    let app_state = web::Data::new(AppState {
        page_fetch_timeout_ms,
    });

    let bind_addr = format!("{}:{}", host, port);
    info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .route("/health", web::get().to(health_check))
            .route("/api/scan", web::post().to(handle_scan_request))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
