// src/web/mod.rs

pub mod charts;
pub mod handlers;
pub mod html;
pub mod types;
pub mod views;

pub use types::*;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Data, Request, Response, Rocket, State};
use tracing::info;

use crate::core::{ConfigManager, ServiceClient};
use crate::screens::form::FormMode;
use handlers::{
    candidate_handlers, matching_handlers, offer_handlers, stats_handlers, system_handlers,
};

/// Logs one line per handled request with status and latency.
pub struct RequestLogger;

#[derive(Clone, Copy)]
struct RequestStart(Option<Instant>);

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request logging",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        request.local_cache(|| RequestStart(Some(Instant::now())));
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let start = request.local_cache(|| RequestStart(None));
        let elapsed_ms = start
            .0
            .map(|s| s.elapsed().as_millis() as u64)
            .unwrap_or_default();
        info!(
            method = %request.method(),
            uri = %request.uri(),
            status = response.status().code,
            elapsed_ms,
            "request handled"
        );
    }
}

#[get("/")]
pub async fn home() -> RawHtml<String> {
    system_handlers::home_handler().await
}

#[get("/health")]
pub async fn health(state: &State<ConsoleState>) -> Json<HealthResponse> {
    system_handlers::health_handler(state).await
}

// Candidates

#[get("/candidates?<params..>")]
pub async fn candidates(
    state: &State<ConsoleState>,
    params: ListParams,
    flash: Option<FlashMessage<'_>>,
) -> RawHtml<String> {
    candidate_handlers::list_candidates_handler(state, params, flash).await
}

#[get("/candidates/new")]
pub async fn new_candidate() -> RawHtml<String> {
    candidate_handlers::new_candidate_form_handler().await
}

#[post("/candidates/new", data = "<form>")]
pub async fn create_candidate(
    state: &State<ConsoleState>,
    form: Form<CandidateFormInput>,
) -> PageResponse {
    candidate_handlers::submit_candidate_form_handler(state, FormMode::Create, form.into_inner())
        .await
}

#[get("/candidates/edit/<id>")]
pub async fn edit_candidate(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    candidate_handlers::edit_candidate_form_handler(state, id).await
}

#[post("/candidates/edit/<id>", data = "<form>")]
pub async fn update_candidate(
    state: &State<ConsoleState>,
    id: &str,
    form: Form<CandidateFormInput>,
) -> PageResponse {
    candidate_handlers::submit_candidate_form_handler(
        state,
        FormMode::Edit(id.to_string()),
        form.into_inner(),
    )
    .await
}

#[get("/candidates/<id>")]
pub async fn candidate_detail(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    candidate_handlers::candidate_detail_handler(state, id).await
}

#[post("/candidates/delete/<id>?<params..>")]
pub async fn delete_candidate(
    state: &State<ConsoleState>,
    id: &str,
    params: ListParams,
) -> Flash<Redirect> {
    candidate_handlers::delete_candidate_handler(state, id, params).await
}

// Job offers

#[get("/offers?<params..>")]
pub async fn offers(
    state: &State<ConsoleState>,
    params: ListParams,
    flash: Option<FlashMessage<'_>>,
) -> RawHtml<String> {
    offer_handlers::list_offers_handler(state, params, flash).await
}

#[get("/offers/new")]
pub async fn new_offer() -> RawHtml<String> {
    offer_handlers::new_offer_form_handler().await
}

#[post("/offers/new", data = "<form>")]
pub async fn create_offer(state: &State<ConsoleState>, form: Form<OfferFormInput>) -> PageResponse {
    offer_handlers::submit_offer_form_handler(state, FormMode::Create, form.into_inner()).await
}

#[get("/offers/edit/<id>")]
pub async fn edit_offer(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    offer_handlers::edit_offer_form_handler(state, id).await
}

#[post("/offers/edit/<id>", data = "<form>")]
pub async fn update_offer(
    state: &State<ConsoleState>,
    id: &str,
    form: Form<OfferFormInput>,
) -> PageResponse {
    offer_handlers::submit_offer_form_handler(state, FormMode::Edit(id.to_string()), form.into_inner())
        .await
}

#[get("/offers/<id>")]
pub async fn offer_detail(state: &State<ConsoleState>, id: &str) -> RawHtml<String> {
    offer_handlers::offer_detail_handler(state, id).await
}

#[post("/offers/delete/<id>?<params..>")]
pub async fn delete_offer(
    state: &State<ConsoleState>,
    id: &str,
    params: ListParams,
) -> Flash<Redirect> {
    offer_handlers::delete_offer_handler(state, id, params).await
}

// Matching and statistics

#[get("/matching?<query..>")]
pub async fn matching(state: &State<ConsoleState>, query: MatchingQuery) -> RawHtml<String> {
    matching_handlers::matching_handler(state, None, query).await
}

#[get("/matching/<id>?<query..>")]
pub async fn matching_for(
    state: &State<ConsoleState>,
    id: &str,
    query: MatchingQuery,
) -> RawHtml<String> {
    matching_handlers::matching_handler(state, Some(id), query).await
}

#[get("/stats")]
pub async fn stats(state: &State<ConsoleState>) -> RawHtml<String> {
    stats_handlers::stats_handler(state).await
}

#[get("/stats/skills")]
pub async fn skill_analytics(state: &State<ConsoleState>) -> RawHtml<String> {
    stats_handlers::skill_analytics_handler(state).await
}

// Error catchers

/// Unknown paths land on the home page.
#[rocket::catch(404)]
pub fn not_found() -> RawHtml<String> {
    RawHtml(views::home::home_page())
}

#[rocket::catch(400)]
pub fn bad_request() -> RawHtml<String> {
    RawHtml(views::home::error_page(
        "Invalid request. Check the submitted values and try again.",
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> RawHtml<String> {
    RawHtml(views::home::error_page(
        "Internal server error. Try again in a few moments.",
    ))
}

/// Assembles the console: routes, catchers, request logging and managed
/// state. Rocket's own logger is silenced in favour of the tracing output.
pub fn build_rocket(state: ConsoleState) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", state.config.server.address.clone()))
        .merge(("port", state.config.server.port))
        .merge(("log_level", "off"));

    rocket::custom(figment)
        .attach(RequestLogger)
        .manage(state)
        .register("/", catchers![not_found, bad_request, internal_error])
        .mount(
            "/",
            routes![
                home,
                health,
                candidates,
                new_candidate,
                create_candidate,
                edit_candidate,
                update_candidate,
                candidate_detail,
                delete_candidate,
                offers,
                new_offer,
                create_offer,
                edit_offer,
                update_offer,
                offer_detail,
                delete_offer,
                matching,
                matching_for,
                stats,
                skill_analytics,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let client = ServiceClient::new(config.api.base_url.clone(), config.api.timeout_seconds)?;

    info!("Starting CV matching console ({} environment)", config.environment);
    info!("Matching API: {}", client.base_url());
    info!(
        "Listening on {}:{}",
        config.server.address, config.server.port
    );

    let state = ConsoleState::new(Arc::new(client), config);
    build_rocket(state)
        .launch()
        .await
        .map_err(|e| anyhow!("Web server failed: {}", e))?;

    Ok(())
}
