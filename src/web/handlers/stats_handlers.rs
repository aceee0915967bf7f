// src/web/handlers/stats_handlers.rs
use rocket::response::content::RawHtml;
use rocket::State;
use tracing::error;

use crate::screens::dashboard::{Dashboard, STATS_FAILED_MESSAGE};
use crate::web::types::ConsoleState;
use crate::web::views::stats as view;

pub const SKILLS_FAILED: &str = "Failed to fetch skill analytics. Please try again later.";

pub async fn stats_handler(state: &State<ConsoleState>) -> RawHtml<String> {
    match state.api.get_stats().await {
        Ok(payload) => {
            let dashboard = Dashboard::from_payload(&payload);
            RawHtml(view::stats_page(Some(&dashboard), None))
        }
        Err(e) => {
            error!("Error fetching stats: {}", e);
            RawHtml(view::stats_page(None, Some(STATS_FAILED_MESSAGE)))
        }
    }
}

pub async fn skill_analytics_handler(state: &State<ConsoleState>) -> RawHtml<String> {
    match state.api.get_skill_analytics().await {
        Ok(analytics) => RawHtml(view::skills_page(Some(&analytics), None)),
        Err(e) => {
            error!("Error fetching skill analytics: {}", e);
            RawHtml(view::skills_page(None, Some(SKILLS_FAILED)))
        }
    }
}
