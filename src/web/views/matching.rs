// src/web/views/matching.rs
use crate::screens::matching::MatchingConsole;
use crate::screens::results::{build_cards, MatchCard, ScoreBar, NOT_AVAILABLE};
use crate::types::matching::MAX_TOP_K;
use crate::types::MatchResponse;
use crate::utils::format_number;
use crate::web::html::{escape, layout, Banner, Nav};

fn progress(bar: &ScoreBar) -> String {
    format!(
        r#"<div class="progress" role="progressbar" aria-valuenow="{value}" aria-valuemin="0" aria-valuemax="100"><span class="{class}" style="width: {value}%"></span></div><span class="muted">{label}</span>"#,
        value = bar.value,
        class = bar.tier.css_class(),
        label = escape(&bar.label),
    )
}

fn card(card: &MatchCard) -> String {
    let link = card
        .offer_link
        .as_deref()
        .map(|href| {
            format!(
                r#"<a class="button outlined" href="{}">View Job Offer</a>"#,
                escape(href)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="paper match-card"><div class="toolbar"><h3>{title}</h3><span class="chip score {tier}">{score}</span></div>
<div class="grid"><div><h4>Skills Match</h4>{skills}</div><div><h4>Semantic Match</h4>{semantic}</div></div>
<h4>Job Description Preview</h4><p class="muted preview">{preview}</p>
<details><summary>Match Details</summary><dl class="facts"><dt>Rank</dt><dd>{rank}</dd><dt>Score</dt><dd>{score}</dd><dt>Skills Match</dt><dd>{skills_label}</dd><dt>Semantic Match</dt><dd>{semantic_label}</dd></dl></details>
<div class="actions">{link}</div></article>"#,
        title = escape(&card.title),
        tier = card.score_tier.css_class(),
        score = escape(&card.score_label),
        skills = progress(&card.skills),
        semantic = progress(&card.semantic),
        preview = escape(&card.preview),
        rank = escape(&card.rank),
        skills_label = escape(&card.skills.label),
        semantic_label = escape(&card.semantic.label),
        link = link,
    )
}

/// Ranked cards in service order, or the empty-state hint.
pub fn results_list(response: &MatchResponse) -> String {
    let cards = build_cards(&response.matches);
    if cards.is_empty() {
        return r#"<div class="paper empty"><h3>No matching job offers found</h3><p>Try adjusting your matching parameters or select a different candidate</p></div>"#.to_string();
    }
    let items: String = cards.iter().map(card).collect();
    format!(r#"<section class="match-results">{}</section>"#, items)
}

fn or_not_available(text: &str) -> &str {
    if text.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        text
    }
}

fn summary(response: &MatchResponse) -> String {
    format!(
        r#"<div class="paper summary"><h3>Matching Results</h3><p class="muted">Candidate: <strong>{name}</strong></p><p>Total matches: {total}</p><p>Processing time: {time}ms</p><p>Algorithm: {algorithm}</p></div>"#,
        name = escape(or_not_available(&response.candidate.name)),
        total = response.total_matches,
        time = format_number(response.processing_time_ms),
        algorithm = escape(or_not_available(&response.algorithm_used)),
    )
}

fn parameter_form(console: &MatchingConsole) -> String {
    let selected = console.selected_id().unwrap_or("");
    let options: String = console
        .candidates()
        .iter()
        .map(|c| {
            let mark = if c.id == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(&c.id),
                mark,
                escape(&c.name)
            )
        })
        .collect();
    let params = &console.params;
    let banner = console
        .error()
        .map(|e| Banner::error(e).render())
        .unwrap_or_default();

    format!(
        r#"<div class="paper parameters"><h2>Matching Parameters</h2>{banner}
<form method="get" action="/matching" class="matching-form">
<input type="hidden" name="submitted" value="true">
<label for="candidate">Select Candidate</label><select id="candidate" name="candidate" onchange="this.form.submit()"><option value="">Select a candidate</option>{options}</select>
<label for="top_k">Number of Results: {top_k}</label><input type="number" id="top_k" name="top_k" min="1" max="{max_top_k}" step="1" value="{top_k}">
<label for="min_score">Minimum Match Score: {min_pct}%</label><input type="range" id="min_score" name="min_score" min="0" max="1" step="0.05" value="{min_score}">
<label class="checkbox"><input type="checkbox" name="use_ai" value="true"{use_ai}> Use AI</label>
<button type="submit" class="button">Find Matching Jobs</button>
</form></div>"#,
        banner = banner,
        options = options,
        top_k = params.top_k,
        max_top_k = MAX_TOP_K,
        min_pct = format_number((params.min_score * 100.0).round()),
        min_score = params.min_score,
        use_ai = if params.use_ai { " checked" } else { "" },
    )
}

pub fn matching_page(console: &MatchingConsole) -> String {
    let (summary_card, results) = match console.results() {
        Some(response) => (summary(response), results_list(response)),
        None => (
            String::new(),
            r#"<div class="paper empty"><h3>Select a candidate and click "Find Matching Jobs" to see results</h3></div>"#.to_string(),
        ),
    };

    let body = format!(
        r#"<h1>AI-Powered CV Matching</h1>
<div class="matching-layout"><aside>{form}{summary}</aside><section class="results">{results}</section></div>"#,
        form = parameter_form(console),
        summary = summary_card,
        results = results,
    );
    layout("Matching", Nav::Matching, &body)
}
