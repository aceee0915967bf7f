// src/web/handlers/offer_handlers.rs
use chrono::Utc;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::State;
use tracing::{error, info, warn};

use crate::screens::form::{FormMode, FormOutcome, FormScreen, OfferDraft};
use crate::screens::list::ListScreen;
use crate::types::Offer;
use crate::web::html::Banner;
use crate::web::types::{list_uri, ConsoleState, ListParams, OfferFormInput, PageResponse};
use crate::web::views::offers as view;

pub const LIST_FAILED: &str = "Failed to fetch job offers. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete job offer. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save job offer. Please try again.";
pub const LOAD_FAILED: &str = "Failed to fetch job offer data. Please try again later.";
pub const DETAIL_FAILED: &str = "Failed to fetch job offer details. Please try again later.";

async fn load_page(state: &ConsoleState, params: &ListParams) -> ListScreen<Offer> {
    let mut screen = ListScreen::new(params.page(), params.rows(), params.search());
    match state.api.list_offers(&screen.query()).await {
        Ok(rows) => screen.loaded(rows),
        Err(e) => {
            error!("Failed to fetch job offers: {}", e);
            screen.failed(LIST_FAILED);
        }
    }
    screen
}

pub async fn list_offers_handler(
    state: &State<ConsoleState>,
    params: ListParams,
    flash: Option<FlashMessage<'_>>,
) -> RawHtml<String> {
    let screen = load_page(state, &params).await;
    RawHtml(view::list_page(&screen, Banner::from_flash(flash), Utc::now()))
}

/// Deletes one row, then sends the browser back to the same list page.
/// A failed delete leaves the row in place on the re-fetched page.
pub async fn delete_offer_handler(
    state: &State<ConsoleState>,
    id: &str,
    params: ListParams,
) -> Flash<Redirect> {
    let target = Redirect::to(list_uri("/offers", params.page(), params.rows(), params.search()));

    info!("Deleting job offer {}", id);
    match state.api.delete_offer(id).await {
        Ok(()) => {
            info!("Job offer {} deleted", id);
            Flash::success(target, "Job offer deleted.")
        }
        Err(e) => {
            error!("Failed to delete job offer {}: {}", id, e);
            Flash::error(target, DELETE_FAILED)
        }
    }
}

pub async fn new_offer_form_handler() -> RawHtml<String> {
    let screen = FormScreen::new(FormMode::Create, OfferDraft::default());
    RawHtml(view::form_page(&screen))
}

pub async fn edit_offer_form_handler(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    let mut screen = FormScreen::new(FormMode::Edit(id.to_string()), OfferDraft::default());
    match state.api.get_offer(id).await {
        Ok(offer) => screen.draft = OfferDraft::from_offer(&offer),
        Err(e) => {
            error!("Failed to fetch job offer {} for editing: {}", id, e);
            screen.error = Some(LOAD_FAILED.to_string());
        }
    }
    RawHtml(view::form_page(&screen))
}

pub async fn submit_offer_form_handler(
    state: &State<ConsoleState>,
    mode: FormMode,
    input: OfferFormInput,
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
            info!("Creating job offer {} at {}", payload.title, payload.company);
            state.api.create_offer(&payload).await
        }
        FormMode::Edit(id) => {
            info!("Updating job offer {}", id);
            state.api.update_offer(id, &payload).await
        }
    };

    match result {
        Ok(saved) => {
            info!("Job offer saved: {}", saved.id);
            let message = if screen.mode.is_edit() {
                "Job offer updated."
            } else {
                "Job offer created."
            };
            PageResponse::Redirect(Flash::success(Redirect::to("/offers"), message))
        }
        Err(e) => {
            warn!("Job offer save rejected: {}", e);
            screen.error = Some(e.user_message(SAVE_FAILED));
            PageResponse::page(view::form_page(&screen))
        }
    }
}

pub async fn offer_detail_handler(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    match state.api.get_offer(id).await {
        Ok(offer) => RawHtml(view::detail_page(Some(&offer), None, Utc::now())),
        Err(e) => {
            error!("Failed to fetch job offer {}: {}", id, e);
            RawHtml(view::detail_page(None, Some(DETAIL_FAILED), Utc::now()))
        }
    }
}
