// src/web/types.rs
use std::sync::Arc;

use rocket::form::FromForm;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect, Responder};
use rocket::serde::Serialize;
use serde_json::Value;

use crate::core::{ConfigManager, ConsoleApi};
use crate::screens::form::{CandidateDraft, FormAction, OfferDraft, SkillEditor};
use crate::screens::list::DEFAULT_ROWS_PER_PAGE;
use crate::types::MatchParams;
use crate::web::html::encode_query;

/// Rocket-managed state: the gateway handle and the loaded configuration.
pub struct ConsoleState {
    pub api: Arc<dyn ConsoleApi>,
    pub config: ConfigManager,
}

impl ConsoleState {
    pub fn new(api: Arc<dyn ConsoleApi>, config: ConfigManager) -> Self {
        Self { api, config }
    }
}

/// A rendered page, or a redirect carrying a flash banner.
#[derive(Responder)]
pub enum PageResponse {
    Page(RawHtml<String>),
    Redirect(Flash<Redirect>),
}

impl PageResponse {
    pub fn page(html: String) -> Self {
        PageResponse::Page(RawHtml(html))
    }
}

#[derive(Debug, Clone, Default, FromForm)]
pub struct ListParams {
    pub page: Option<u32>,
    pub rows: Option<u32>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    pub fn rows(&self) -> u32 {
        self.rows.unwrap_or(DEFAULT_ROWS_PER_PAGE)
    }

    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

/// `/base?page=..&rows=..[&search=..]`
pub fn list_uri(base: &str, page: u32, rows: u32, search: &str) -> String {
    let mut uri = format!("{}?page={}&rows={}", base, page, rows);
    if !search.trim().is_empty() {
        uri.push_str("&search=");
        uri.push_str(&encode_query(search));
    }
    uri
}

/// Candidate form fields as posted; every field is optional so a partial
/// post still re-renders instead of failing the request.
#[derive(Debug, Default, FromForm)]
pub struct CandidateFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub experience_years: Option<String>,
    pub salary_expectation: Option<String>,
    pub availability: Option<String>,
    pub text: Option<String>,
    pub skills: Vec<String>,
    pub skill_input: Option<String>,
    pub action: Option<String>,
}

impl CandidateFormInput {
    pub fn into_parts(self) -> (CandidateDraft, String, FormAction) {
        let action = FormAction::parse(self.action.as_deref().unwrap_or(""));
        let draft = CandidateDraft {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            experience_years: self.experience_years.unwrap_or_default(),
            salary_expectation: self.salary_expectation.unwrap_or_default(),
            availability: self.availability.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            skills: SkillEditor::new(self.skills),
        };
        (draft, self.skill_input.unwrap_or_default(), action)
    }
}

#[derive(Debug, Default, FromForm)]
pub struct OfferFormInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub required_experience: Option<String>,
    pub salary_min: Option<String>,
    pub salary_max: Option<String>,
    pub employment_type: Option<String>,
    pub remote_allowed: bool,
    pub expires_on: Option<String>,
    pub skills: Vec<String>,
    pub skill_input: Option<String>,
    pub action: Option<String>,
}

impl OfferFormInput {
    pub fn into_parts(self) -> (OfferDraft, String, FormAction) {
        let action = FormAction::parse(self.action.as_deref().unwrap_or(""));
        let draft = OfferDraft {
            title: self.title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            required_experience: self.required_experience.unwrap_or_default(),
            salary_min: self.salary_min.unwrap_or_default(),
            salary_max: self.salary_max.unwrap_or_default(),
            employment_type: self.employment_type.unwrap_or_default(),
            remote_allowed: self.remote_allowed,
            expires_on: self.expires_on.unwrap_or_default(),
            skills: SkillEditor::new(self.skills),
        };
        (draft, self.skill_input.unwrap_or_default(), action)
    }
}

/// Matching console query string.
///
/// The parameter form always sends `submitted=true`, so an unchecked AI box
/// (which browsers omit) reads as `use_ai = false`; a bare link keeps the
/// default of true.
#[derive(Debug, Clone, Default, FromForm)]
pub struct MatchingQuery {
    pub candidate: Option<String>,
    pub top_k: Option<u32>,
    pub min_score: Option<f64>,
    pub use_ai: Option<bool>,
    pub submitted: Option<bool>,
}

impl MatchingQuery {
    /// `default_top_k` applies when the query carries no `top_k`.
    pub fn params(&self, default_top_k: u32) -> MatchParams {
        let use_ai = match (self.use_ai, self.submitted) {
            (Some(value), _) => value,
            (None, Some(true)) => false,
            (None, _) => true,
        };
        MatchParams::new(
            self.top_k.unwrap_or(default_top_k),
            self.min_score.unwrap_or(0.0),
            use_ai,
        )
    }

    pub fn candidate_id(&self) -> Option<&str> {
        self.candidate.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub api_url: String,
    pub upstream: Value,
}
