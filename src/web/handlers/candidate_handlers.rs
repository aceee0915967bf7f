// src/web/handlers/candidate_handlers.rs
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::State;
use tracing::{error, info, warn};

use crate::core::service_client::DEFAULT_RECOMMENDATION_TYPE;
use crate::screens::form::{CandidateDraft, FormMode, FormOutcome, FormScreen};
use crate::screens::list::ListScreen;
use crate::types::Candidate;
use crate::web::html::Banner;
use crate::web::types::{list_uri, CandidateFormInput, ConsoleState, ListParams, PageResponse};
use crate::web::views::candidates as view;

pub const LIST_FAILED: &str = "Failed to fetch candidates. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete candidate. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save candidate. Please try again.";
pub const LOAD_FAILED: &str = "Failed to fetch candidate data. Please try again later.";
pub const DETAIL_FAILED: &str = "Failed to fetch candidate details. Please try again later.";

async fn load_page(state: &ConsoleState, params: &ListParams) -> ListScreen<Candidate> {
    let mut screen = ListScreen::new(params.page(), params.rows(), params.search());
    match state.api.list_candidates(&screen.query()).await {
        Ok(rows) => screen.loaded(rows),
        Err(e) => {
            error!("Failed to fetch candidates: {}", e);
            screen.failed(LIST_FAILED);
        }
    }
    screen
}

pub async fn list_candidates_handler(
    state: &State<ConsoleState>,
    params: ListParams,
    flash: Option<FlashMessage<'_>>,
) -> RawHtml<String> {
    let screen = load_page(state, &params).await;
    RawHtml(view::list_page(&screen, Banner::from_flash(flash)))
}

/// Deletes one row, then sends the browser back to the same list page.
/// A failed delete leaves the row in place on the re-fetched page.
pub async fn delete_candidate_handler(
    state: &State<ConsoleState>,
    id: &str,
    params: ListParams,
) -> Flash<Redirect> {
    let target = Redirect::to(list_uri("/candidates", params.page(), params.rows(), params.search()));

    info!("Deleting candidate {}", id);
    match state.api.delete_candidate(id).await {
        Ok(()) => {
            info!("Candidate {} deleted", id);
            Flash::success(target, "Candidate deleted.")
        }
        Err(e) => {
            error!("Failed to delete candidate {}: {}", id, e);
            Flash::error(target, DELETE_FAILED)
        }
    }
}

pub async fn new_candidate_form_handler() -> RawHtml<String> {
    let screen = FormScreen::new(FormMode::Create, CandidateDraft::default());
    RawHtml(view::form_page(&screen))
}

pub async fn edit_candidate_form_handler(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    let mut screen = FormScreen::new(FormMode::Edit(id.to_string()), CandidateDraft::default());
    match state.api.get_candidate(id).await {
        Ok(candidate) => screen.draft = CandidateDraft::from_candidate(&candidate),
        Err(e) => {
            error!("Failed to fetch candidate {} for editing: {}", id, e);
            screen.error = Some(LOAD_FAILED.to_string());
        }
    }
    RawHtml(view::form_page(&screen))
}

/// Skill edits re-render the posted draft; `save` creates or updates.
pub async fn submit_candidate_form_handler(
    state: &State<ConsoleState>,
    mode: FormMode,
    input: CandidateFormInput,
) -> PageResponse {
    let (draft, skill_input, action) = input.into_parts();
    let mut screen = FormScreen::new(mode, draft);
    screen.skill_input = skill_input;

    if screen.apply(action) == FormOutcome::Rerender {
        return PageResponse::page(view::form_page(&screen));
    }

    let payload = screen.draft.to_payload();
    let result = match &screen.mode {
        FormMode::Create => {
            info!("Creating candidate {}", payload.name);
            state.api.create_candidate(&payload).await
        }
        FormMode::Edit(id) => {
            info!("Updating candidate {}", id);
            state.api.update_candidate(id, &payload).await
        }
    };

    match result {
        Ok(saved) => {
            info!("Candidate saved: {}", saved.id);
            let message = if screen.mode.is_edit() {
                "Candidate updated."
            } else {
                "Candidate created."
            };
            PageResponse::Redirect(Flash::success(Redirect::to("/candidates"), message))
        }
        Err(e) => {
            warn!("Candidate save rejected: {}", e);
            screen.error = Some(e.user_message(SAVE_FAILED));
            PageResponse::page(view::form_page(&screen))
        }
    }
}

/// Recommendations are best effort; their failure never fails the page.
pub async fn candidate_detail_handler(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    let candidate = match state.api.get_candidate(id).await {
        Ok(candidate) => candidate,
        Err(e) => {
            error!("Failed to fetch candidate {}: {}", id, e);
            return RawHtml(view::detail_page(None, &[], Some(DETAIL_FAILED)));
        }
    };

    let recommendations = match state
        .api
        .get_recommendations(id, DEFAULT_RECOMMENDATION_TYPE)
        .await
    {
        Ok(response) => response.recommendations,
        Err(e) => {
            warn!("Failed to fetch recommendations for {}: {}", id, e);
            Vec::new()
        }
    };

    RawHtml(view::detail_page(Some(&candidate), &recommendations, None))
}
