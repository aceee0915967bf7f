// src/utils.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an API timestamp: RFC 3339, or naive ISO (assumed UTC), or a bare date
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Short date for tables and detail pages; unparseable input is shown verbatim
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => "Not specified".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// An offer is expired when its expiry parses and lies before `now`
pub fn is_expired(expires_at: Option<&str>, now: DateTime<Utc>) -> bool {
    expires_at
        .and_then(parse_timestamp)
        .map_or(false, |expiry| expiry < now)
}

/// "full_time" -> "Full Time"
pub fn humanize_code(code: &str) -> String {
    code.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-dollar amount with thousands separators: 85000 -> "$85,000"
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}${}", sign, grouped)
}

/// Numbers without a trailing ".0": 5.0 -> "5", 2.5 -> "2.5"
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Form text to an optional number; blank or non-numeric input is None
pub fn parse_optional_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Form text to an optional string; blank input is None
pub fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
