// src/web/views/home.rs
use crate::web::html::{layout, Nav};

const FEATURE_CARDS: &[(&str, &str, &str, &str)] = &[
    (
        "Candidates",
        "Manage candidate profiles and CVs with automatic skill extraction",
        "/candidates",
        "Manage Candidates",
    ),
    (
        "Job Offers",
        "Create and manage job offers with intelligent skill requirements analysis",
        "/offers",
        "Manage Offers",
    ),
    (
        "Matching",
        "Match candidates with job offers using our advanced AI matching algorithm",
        "/matching",
        "Start Matching",
    ),
    (
        "Statistics",
        "View detailed statistics and analytics about matching results and skills",
        "/stats",
        "View Statistics",
    ),
];

pub fn home_page() -> String {
    let cards: String = FEATURE_CARDS
        .iter()
        .map(|(title, text, href, cta)| {
            format!(
                r#"<div class="paper feature"><h2>{title}</h2><p>{text}</p><a class="button" href="{href}">{cta}</a></div>"#
            )
        })
        .collect();

    let body = format!(
        r#"<section class="paper hero"><h1>AI-Powered CV Matching System</h1><p class="muted">Match the right candidates with the right job offers using advanced AI technology</p></section>
<div class="grid">{cards}</div>"#
    );
    layout("Home", Nav::Home, &body)
}

/// Plain error page for the 500 catcher.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<div class="banner error" role="alert">{}</div><p><a href="/">Back to home</a></p>"#,
        crate::web::html::escape(message)
    );
    layout("Error", Nav::Home, &body)
}
