pub mod candidate;
pub mod lenient;
pub mod matching;
pub mod offer;
pub mod stats;

pub use candidate::{Candidate, CandidateFormData};
pub use matching::{MatchParams, MatchRecord, MatchResponse, Recommendation, RecommendationsResponse};
pub use offer::{Offer, OfferFormData};
pub use stats::{SkillAnalytics, Statistics, StatsPayload};

use serde::Serialize;

/// Query parameters shared by the candidate and offer list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ListQuery {
    pub fn active_page(page: u32, rows_per_page: u32) -> Self {
        Self {
            skip: page.saturating_mul(rows_per_page),
            limit: rows_per_page,
            is_active: Some(true),
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
            is_active: Some(true),
        }
    }
}
