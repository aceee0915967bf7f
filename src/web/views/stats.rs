// src/web/views/stats.rs
use crate::screens::dashboard::Dashboard;
use crate::types::SkillAnalytics;
use crate::web::charts;
use crate::web::html::{escape, layout, Banner, Nav};

fn chart_panel(title: &str, chart: String) -> String {
    format!(
        r#"<div class="paper chart-panel"><h3>{}</h3>{}</div>"#,
        escape(title),
        chart
    )
}

/// Dashboard, or only the banner when the fetch failed.
pub fn stats_page(dashboard: Option<&Dashboard>, error: Option<&str>) -> String {
    let Some(dashboard) = dashboard else {
        let body = Banner::error(error.unwrap_or_default()).render();
        return layout("Statistics", Nav::Stats, &body);
    };

    let cards: String = dashboard
        .summary
        .iter()
        .map(|card| {
            format!(
                r#"<div class="paper summary-card"><h3>{}</h3><p class="value">{}</p><p class="muted">{}</p></div>"#,
                escape(card.title),
                card.value,
                escape(&card.caption)
            )
        })
        .collect();

    let system: String = dashboard
        .system_info
        .iter()
        .map(|row| format!("<dt>{}</dt><dd>{}</dd>", escape(row.label), escape(&row.value)))
        .collect();

    let body = format!(
        r#"<div class="toolbar"><h1>System Statistics</h1><a class="button outlined" href="/stats/skills">Skill Analytics</a></div>
<div class="grid summary">{cards}</div>
<div class="grid">{levels}{distribution}</div>
{skills}
{activity}
<div class="paper system-info"><h3>System Information</h3><dl class="facts">{system}</dl></div>"#,
        cards = cards,
        levels = chart_panel(&dashboard.match_levels.title, charts::pie(&dashboard.match_levels)),
        distribution = chart_panel(
            &dashboard.score_distribution.title,
            charts::pie(&dashboard.score_distribution)
        ),
        skills = chart_panel(&dashboard.top_skills.title, charts::bar(&dashboard.top_skills)),
        activity = chart_panel(
            &dashboard.monthly_activity.title,
            charts::line(&dashboard.monthly_activity)
        ),
        system = system,
    );
    layout("Statistics", Nav::Stats, &body)
}

pub fn skills_page(analytics: Option<&SkillAnalytics>, error: Option<&str>) -> String {
    let Some(analytics) = analytics else {
        let body = Banner::error(error.unwrap_or_default()).render();
        return layout("Skill Analytics", Nav::Stats, &body);
    };

    let rows: String = if analytics.top_skills.is_empty() {
        r#"<tr><td colspan="3" class="empty">No skills recorded yet</td></tr>"#.to_string()
    } else {
        analytics
            .top_skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    i + 1,
                    escape(&skill.name),
                    skill.count
                )
            })
            .collect()
    };

    let body = format!(
        r#"<div class="toolbar"><h1>Skill Analytics</h1><a class="button outlined" href="/stats">Back to Statistics</a></div>
<div class="paper"><p>Unique skills: <strong>{unique}</strong></p><table class="skills"><thead><tr><th>#</th><th>Skill</th><th>Count</th></tr></thead><tbody>{rows}</tbody></table></div>"#,
        unique = analytics.unique_skills_count,
        rows = rows,
    );
    layout("Skill Analytics", Nav::Stats, &body)
}
