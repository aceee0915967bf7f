//! Matching payloads.
//!
//! The matching service returns each match as an open JSON object keyed by
//! display labels ("Score global", "Compétences", ...). Those maps are
//! translated into [`MatchRecord`] while decoding, so nothing past this module
//! touches the label keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::candidate::Candidate;
use super::lenient::{keyed_or_default, lenient_count, null_as_default};

pub const DEFAULT_TOP_K: u32 = 5;
pub const MAX_TOP_K: u32 = 50;

const ID_KEYS: &[&str] = &["ID", "id", "offer_id"];
const TITLE_KEYS: &[&str] = &["title", "Titre"];
const OVERALL_SCORE_KEY: &str = "Score global";
const SKILLS_SCORE_KEY: &str = "Compétences";
const SEMANTIC_SCORE_KEY: &str = "Sémantique";
const RANK_KEY: &str = "Meilleur match";
const PREVIEW_KEY: &str = "Aperçu de l'offre";

/// Parameters sent as the query string of a match request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchParams {
    pub top_k: u32,
    pub min_score: f64,
    pub use_ai: bool,
}

impl MatchParams {
    /// Builds parameters, clamping `top_k` to 1..=50 and `min_score` to 0..=1.
    pub fn new(top_k: u32, min_score: f64, use_ai: bool) -> Self {
        let min_score = if min_score.is_nan() {
            0.0
        } else {
            min_score.clamp(0.0, 1.0)
        };
        Self {
            top_k: top_k.clamp(1, MAX_TOP_K),
            min_score,
            use_ai,
        }
    }
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_score: 0.0,
            use_ai: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchResponse {
    #[serde(default, deserialize_with = "keyed_or_default")]
    pub candidate: Candidate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<MatchRecord>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_matches: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub algorithm_used: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub processing_time_ms: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters_applied: Map<String, Value>,
}

/// Stable view of one ranked match.
///
/// Scores stay as display strings; numeric interpretation lives in
/// `screens::results`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct MatchRecord {
    pub offer_id: Option<String>,
    pub title: Option<String>,
    pub overall_score: Option<String>,
    pub skills_score: Option<String>,
    pub semantic_score: Option<String>,
    pub rank_label: Option<String>,
    pub preview: Option<String>,
    pub raw: Map<String, Value>,
}

impl From<Map<String, Value>> for MatchRecord {
    fn from(raw: Map<String, Value>) -> Self {
        let first = |keys: &[&str]| keys.iter().find_map(|key| display_value(raw.get(*key)));

        Self {
            offer_id: first(ID_KEYS),
            title: first(TITLE_KEYS),
            overall_score: display_value(raw.get(OVERALL_SCORE_KEY)),
            skills_score: display_value(raw.get(SKILLS_SCORE_KEY)),
            semantic_score: display_value(raw.get(SEMANTIC_SCORE_KEY)),
            rank_label: display_value(raw.get(RANK_KEY)),
            preview: display_value(raw.get(PREVIEW_KEY)),
            raw,
        }
    }
}

/// Scalars become display strings; null, empty strings and containers are absent.
fn display_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub priority: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
}
