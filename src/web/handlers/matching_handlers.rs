// src/web/handlers/matching_handlers.rs
use rocket::response::content::RawHtml;
use rocket::State;
use tracing::{error, info, warn};

use crate::screens::matching::MatchingConsole;
use crate::types::ListQuery;
use crate::web::types::{ConsoleState, MatchingQuery};
use crate::web::views::matching as view;

/// Loads the picker, resolves an externally supplied candidate id, and runs
/// a match whenever a candidate ends up selected.
///
/// `path_id` comes from `/matching/<id>` and wins over `?candidate=`.
pub async fn matching_handler(
    state: &State<ConsoleState>,
    path_id: Option<&str>,
    query: MatchingQuery,
) -> RawHtml<String> {
    let mut console = MatchingConsole::new(query.params(state.config.matching.default_top_k));

    console.begin_loading();
    match state.api.list_candidates(&ListQuery::default()).await {
        Ok(candidates) => console.candidates_loaded(candidates),
        Err(e) => {
            error!("Failed to fetch candidates for matching: {}", e);
            console.candidates_failed();
        }
    }

    let requested = path_id
        .filter(|id| !id.trim().is_empty())
        .or_else(|| query.candidate_id());

    if let Some(id) = requested {
        if !console.select_id(id) {
            match state.api.get_candidate(id).await {
                Ok(candidate) => {
                    console.select(candidate);
                }
                Err(e) => warn!("Could not resolve candidate {}: {}", id, e),
            }
        }
    }

    // A submitted form with no candidate surfaces the "select first" banner.
    let wants_match = console.selected().is_some() || query.submitted == Some(true);
    if wants_match {
        if let Ok(ticket) = console.begin_match() {
            if let Some(candidate_id) = console.selected_id().map(str::to_string) {
                info!(
                    "Matching candidate {} (top_k={}, min_score={}, use_ai={})",
                    candidate_id, console.params.top_k, console.params.min_score, console.params.use_ai
                );
                let outcome = state.api.match_candidate(&candidate_id, &console.params).await;
                if let Err(e) = &outcome {
                    error!("Matching failed for {}: {}", candidate_id, e);
                }
                console.finish_match(ticket, outcome);
            }
        }
    }

    RawHtml(view::matching_page(&console))
}
