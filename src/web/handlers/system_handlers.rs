// src/web/handlers/system_handlers.rs
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::json;
use tracing::{info, warn};

use crate::web::types::{ConsoleState, HealthResponse};
use crate::web::views::home;

pub async fn home_handler() -> RawHtml<String> {
    RawHtml(home::home_page())
}

/// Console liveness plus whatever the upstream health endpoint reports.
/// An unreachable upstream degrades the status but still answers 200.
pub async fn health_handler(state: &State<ConsoleState>) -> Json<HealthResponse> {
    let (status, upstream) = match state.api.health().await {
        Ok(body) => {
            info!("Health check: upstream reachable");
            ("ok", body)
        }
        Err(e) => {
            warn!("Health check: upstream unavailable: {}", e);
            ("degraded", json!({ "status": "unreachable", "error": e.to_string() }))
        }
    };

    Json(HealthResponse {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        api_url: state.config.api.base_url.clone(),
        upstream,
    })
}
