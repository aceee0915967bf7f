//! Ranked match list to display cards.

use crate::types::MatchRecord;

pub const NOT_AVAILABLE: &str = "N/A";

/// Integer prefix of a score label: "72" -> 72, "72.9%" -> 72, "abc" -> 0.
///
/// Absent input is 0. Never panics; overflowing digit runs saturate.
pub fn parse_score(value: Option<&str>) -> i64 {
    let Some(raw) = value else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        result = result
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        0
    } else if negative {
        -result
    } else {
        result
    }
}

/// Color band shared by progress bars and score badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Top,
    Second,
    Third,
    Lowest,
    /// No score at all; distinct from `Lowest`.
    Neutral,
}

impl ScoreTier {
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => ScoreTier::Neutral,
            Some(s) if s.is_nan() => ScoreTier::Neutral,
            Some(s) if s >= 85.0 => ScoreTier::Top,
            Some(s) if s >= 70.0 => ScoreTier::Second,
            Some(s) if s >= 50.0 => ScoreTier::Third,
            Some(_) => ScoreTier::Lowest,
        }
    }

    /// Tier of a score label; absent labels are neutral.
    pub fn from_label(label: Option<&str>) -> Self {
        Self::from_score(label.map(|l| parse_score(Some(l)) as f64))
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreTier::Top => "success",
            ScoreTier::Second => "primary",
            ScoreTier::Third => "warning",
            ScoreTier::Lowest => "error",
            ScoreTier::Neutral => "default",
        }
    }
}

/// One sub-score bar on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: String,
    /// Bar fill, 0..=100
    pub value: u8,
    pub tier: ScoreTier,
}

impl ScoreBar {
    fn from_label(label: Option<&str>) -> Self {
        let score = parse_score(label);
        Self {
            label: label.unwrap_or("0").to_string(),
            value: score.clamp(0, 100) as u8,
            tier: ScoreTier::from_score(Some(score as f64)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub title: String,
    pub score_label: String,
    pub score_tier: ScoreTier,
    pub skills: ScoreBar,
    pub semantic: ScoreBar,
    pub preview: String,
    pub rank: String,
    pub offer_link: Option<String>,
}

impl MatchCard {
    pub fn from_record(record: &MatchRecord) -> Self {
        let or_na = |value: &Option<String>| {
            value
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        Self {
            title: or_na(&record.title),
            score_label: or_na(&record.overall_score),
            score_tier: ScoreTier::from_label(record.overall_score.as_deref()),
            skills: ScoreBar::from_label(record.skills_score.as_deref()),
            semantic: ScoreBar::from_label(record.semantic_score.as_deref()),
            preview: or_na(&record.preview),
            rank: or_na(&record.rank_label),
            offer_link: record
                .offer_id
                .as_ref()
                .map(|id| format!("/offers/{}", id)),
        }
    }
}

/// Cards in the order the service ranked them.
pub fn build_cards(matches: &[MatchRecord]) -> Vec<MatchCard> {
    matches.iter().map(MatchCard::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_score_handles_numeric_and_garbage() {
        assert_eq!(parse_score(Some("72")), 72);
        assert_eq!(parse_score(Some("  72.9%")), 72);
        assert_eq!(parse_score(Some("-3")), -3);
        assert_eq!(parse_score(Some("abc")), 0);
        assert_eq!(parse_score(Some("")), 0);
        assert_eq!(parse_score(Some("-")), 0);
        assert_eq!(parse_score(None), 0);
        assert_eq!(parse_score(Some("99999999999999999999999")), i64::MAX);
    }

    #[test]
    fn tiers_partition_the_score_range() {
        let scores = [95.0, 85.0, 84.0, 70.0, 69.0, 50.0, 49.0, 0.0];
        let expected = [
            ScoreTier::Top,
            ScoreTier::Top,
            ScoreTier::Second,
            ScoreTier::Second,
            ScoreTier::Third,
            ScoreTier::Third,
            ScoreTier::Lowest,
            ScoreTier::Lowest,
        ];
        for (score, tier) in scores.iter().zip(expected) {
            assert_eq!(ScoreTier::from_score(Some(*score)), tier, "score {}", score);
        }
    }

    #[test]
    fn missing_score_is_neutral_not_lowest() {
        assert_eq!(ScoreTier::from_score(None), ScoreTier::Neutral);
        assert_eq!(ScoreTier::from_score(Some(f64::NAN)), ScoreTier::Neutral);
        assert_eq!(ScoreTier::from_label(None), ScoreTier::Neutral);
        assert_eq!(ScoreTier::from_label(Some("n/a")), ScoreTier::Lowest);
        assert_ne!(ScoreTier::Neutral.css_class(), ScoreTier::Lowest.css_class());
    }

    #[test]
    fn card_fills_placeholders() {
        let card = MatchCard::from_record(&MatchRecord::default());
        assert_eq!(card.title, NOT_AVAILABLE);
        assert_eq!(card.score_label, NOT_AVAILABLE);
        assert_eq!(card.score_tier, ScoreTier::Neutral);
        assert_eq!(card.skills.label, "0");
        assert_eq!(card.skills.value, 0);
        assert_eq!(card.offer_link, None);
    }

    #[test]
    fn card_projects_record() {
        let record = MatchRecord {
            offer_id: Some("o1".to_string()),
            title: Some("Rust Dev".to_string()),
            overall_score: Some("88%".to_string()),
            skills_score: Some("140".to_string()),
            semantic_score: Some("55".to_string()),
            rank_label: Some("1".to_string()),
            ..Default::default()
        };
        let card = MatchCard::from_record(&record);
        assert_eq!(card.score_tier, ScoreTier::Top);
        assert_eq!(card.skills.value, 100);
        assert_eq!(card.semantic.tier, ScoreTier::Third);
        assert_eq!(card.offer_link.as_deref(), Some("/offers/o1"));
        assert_eq!(card.rank, "1");
    }
}
