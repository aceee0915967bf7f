//! Statistics payload to chart datasets and summary cards.

use crate::types::StatsPayload;

pub const STATS_FAILED_MESSAGE: &str = "Failed to fetch statistics. Please try again later.";

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: &'static str,
    pub values: Vec<u64>,
}

/// One chart: category labels plus one or more value series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl Dataset {
    fn single(title: &str, labels: Vec<String>, label: &str, color: &'static str, values: Vec<u64>) -> Self {
        Self {
            title: title.to_string(),
            labels,
            series: vec![Series {
                label: label.to_string(),
                color,
                values,
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.values.iter().all(|v| *v == 0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: u64,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: Vec<SummaryCard>,
    pub match_levels: Dataset,
    pub score_distribution: Dataset,
    pub top_skills: Dataset,
    pub monthly_activity: Dataset,
    pub system_info: Vec<SystemRow>,
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// `0.734` -> "73.4%"; absent or zero reads as N/A.
pub fn format_average_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() && s != 0.0 => format!("{:.1}%", s * 100.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn or_unknown(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

impl Dashboard {
    pub fn from_payload(payload: &StatsPayload) -> Self {
        let stats = &payload.statistics;
        let skills = &payload.skill_analytics;

        let levels = &stats.match_levels;
        let match_levels = Dataset::single(
            "Match Results by Level",
            labels(&["Excellent", "Good", "Average", "Poor"]),
            "Match Results by Level",
            "#4bc0c0",
            vec![levels.excellent, levels.good, levels.average, levels.poor],
        );

        let dist = &stats.score_distribution;
        let score_distribution = Dataset::single(
            "Match Score Distribution",
            labels(&["0-25%", "26-50%", "51-75%", "76-100%"]),
            "Match Score Distribution",
            "#ff6384",
            vec![dist.low, dist.lower_mid, dist.upper_mid, dist.high],
        );

        let top_skills = Dataset::single(
            "Top Skills",
            skills.top_skills.iter().map(|s| s.name.clone()).collect(),
            "Skill Frequency",
            "#36a2eb",
            skills.top_skills.iter().map(|s| s.count).collect(),
        );

        let months = &stats.monthly_activity;
        let monthly_activity = Dataset {
            title: "Monthly Activity".to_string(),
            labels: months.iter().map(|m| m.month.clone()).collect(),
            series: vec![
                Series {
                    label: "New Candidates".to_string(),
                    color: "#36a2eb",
                    values: months.iter().map(|m| m.new_candidates).collect(),
                },
                Series {
                    label: "New Offers".to_string(),
                    color: "#ff6384",
                    values: months.iter().map(|m| m.new_offers).collect(),
                },
                Series {
                    label: "Matches".to_string(),
                    color: "#4bc0c0",
                    values: months.iter().map(|m| m.matches).collect(),
                },
            ],
        };

        let most_common = skills
            .top_skills
            .first()
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(NOT_AVAILABLE);

        let summary = vec![
            SummaryCard {
                title: "Candidates",
                value: stats.total_candidates,
                caption: format!("Active: {}", stats.active_candidates),
            },
            SummaryCard {
                title: "Job Offers",
                value: stats.total_offers,
                caption: format!("Active: {}", stats.active_offers),
            },
            SummaryCard {
                title: "Matches",
                value: stats.total_matches,
                caption: format!("Avg. Score: {}", format_average_score(stats.average_match_score)),
            },
            SummaryCard {
                title: "Unique Skills",
                value: skills.unique_skills_count,
                caption: format!("Most common: {}", most_common),
            },
        ];

        let info = &stats.system_info;
        let system_info = vec![
            SystemRow {
                label: "Database Status",
                value: or_unknown(&info.database_status),
            },
            SystemRow {
                label: "AI Services",
                value: or_unknown(&info.ai_services_status),
            },
            SystemRow {
                label: "Last Update",
                value: or_unknown(&info.last_update),
            },
            SystemRow {
                label: "System Version",
                value: or_unknown(&info.version),
            },
        ];

        Self {
            summary,
            match_levels,
            score_distribution,
            top_skills,
            monthly_activity,
            system_info,
        }
    }
}
