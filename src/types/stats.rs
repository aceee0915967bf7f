use serde::Deserialize;

use super::lenient::{lenient_count, null_as_default};

/// Response of the aggregate statistics endpoint. Everything defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatsPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub statistics: Statistics,
    #[serde(deserialize_with = "null_as_default")]
    pub skill_analytics: SkillAnalytics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Statistics {
    #[serde(deserialize_with = "lenient_count")]
    pub total_candidates: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub active_candidates: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_offers: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub active_offers: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_matches: u64,
    pub average_match_score: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub match_levels: MatchLevels,
    #[serde(deserialize_with = "null_as_default")]
    pub score_distribution: ScoreDistribution,
    #[serde(deserialize_with = "null_as_default")]
    pub monthly_activity: Vec<MonthlyActivity>,
    #[serde(deserialize_with = "null_as_default")]
    pub system_info: SystemInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatchLevels {
    #[serde(deserialize_with = "lenient_count")]
    pub excellent: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub good: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub average: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub poor: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoreDistribution {
    #[serde(rename = "0-25", deserialize_with = "lenient_count")]
    pub low: u64,
    #[serde(rename = "26-50", deserialize_with = "lenient_count")]
    pub lower_mid: u64,
    #[serde(rename = "51-75", deserialize_with = "lenient_count")]
    pub upper_mid: u64,
    #[serde(rename = "76-100", deserialize_with = "lenient_count")]
    pub high: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonthlyActivity {
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    #[serde(deserialize_with = "lenient_count")]
    pub new_candidates: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub new_offers: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub matches: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    pub database_status: Option<String>,
    pub ai_services_status: Option<String>,
    pub last_update: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillAnalytics {
    #[serde(deserialize_with = "lenient_count")]
    pub unique_skills_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub top_skills: Vec<SkillCount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillCount {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient_count")]
    pub count: u64,
}
