// src/web/html.rs
//! Page chrome and small HTML building blocks shared by every view.

use rocket::http::RawStr;
use rocket::request::FlashMessage;

pub const BRAND: &str = "CV MATCHING";

const STYLE: &str = r#"
body { margin: 0; font-family: Roboto, Helvetica, Arial, sans-serif; background: #f5f5f5; color: #212121; display: flex; flex-direction: column; min-height: 100vh; }
header { background: #1976d2; color: #fff; }
header nav { max-width: 1200px; margin: 0 auto; display: flex; align-items: center; gap: 8px; padding: 12px 16px; }
header .brand { font-family: monospace; font-weight: 700; letter-spacing: .3rem; color: #fff; text-decoration: none; margin-right: auto; }
header a.nav { color: #fff; text-decoration: none; padding: 6px 12px; border-radius: 4px; }
header a.nav.active { background: rgba(255,255,255,.18); }
main { max-width: 1200px; width: 100%; margin: 24px auto; padding: 0 16px; box-sizing: border-box; flex: 1; }
footer { background: #eee; color: #666; text-align: center; padding: 24px 16px; font-size: .875rem; }
.paper { background: #fff; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,.2); padding: 16px; margin-bottom: 16px; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
.toolbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
.banner { padding: 12px 16px; border-radius: 4px; margin-bottom: 16px; }
.banner.error { background: #fdecea; color: #611a15; }
.banner.success { background: #edf7ed; color: #1e4620; }
.chip { display: inline-block; padding: 2px 10px; border-radius: 16px; background: #e0e0e0; font-size: .8125rem; margin: 2px; }
.chip.outlined { background: transparent; border: 1px solid #bdbdbd; }
.chip.success { background: #2e7d32; color: #fff; }
.chip.primary { background: #1976d2; color: #fff; }
.chip.warning { background: #ed6c02; color: #fff; }
.chip.error { background: #d32f2f; color: #fff; }
.progress { height: 10px; border-radius: 5px; background: #e0e0e0; overflow: hidden; }
.progress > span { display: block; height: 100%; background: #9e9e9e; }
.progress > span.success { background: #2e7d32; }
.progress > span.primary { background: #1976d2; }
.progress > span.warning { background: #ed6c02; }
.progress > span.error { background: #d32f2f; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 10px 8px; border-bottom: 1px solid #e0e0e0; vertical-align: middle; }
tr.expired { opacity: .6; }
.actions { text-align: right; white-space: nowrap; }
.actions form { display: inline; }
.default-action { position: absolute; left: -9999px; width: 1px; height: 1px; overflow: hidden; }
.button { display: inline-block; padding: 6px 16px; border-radius: 4px; border: none; background: #1976d2; color: #fff; text-decoration: none; cursor: pointer; font-size: .875rem; }
.button.secondary { background: #9c27b0; }
.button.danger { background: #d32f2f; }
.button.outlined { background: transparent; color: #1976d2; border: 1px solid #1976d2; }
label { display: block; font-size: .875rem; color: #555; margin: 12px 0 4px; }
input[type=text], input[type=email], input[type=number], input[type=date], select, textarea { width: 100%; box-sizing: border-box; padding: 8px; border: 1px solid #bdbdbd; border-radius: 4px; font: inherit; }
.pagination { display: flex; justify-content: flex-end; align-items: center; gap: 12px; padding-top: 12px; }
.muted { color: #757575; }
.empty { text-align: center; padding: 40px; color: #757575; }
dl.facts dt { font-weight: 500; margin-top: 8px; }
dl.facts dd { margin: 0; color: #616161; }
.pre { white-space: pre-wrap; }
.matching-layout { display: grid; grid-template-columns: minmax(260px, 1fr) 2fr; gap: 16px; }
.summary-card .value { font-size: 2.5rem; margin: 8px 0; }
.legend { margin-top: 8px; }
"#;

/// Top navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Candidates,
    Offers,
    Matching,
    Stats,
}

const NAV_LINKS: &[(Nav, &str, &str)] = &[
    (Nav::Candidates, "/candidates", "Candidates"),
    (Nav::Offers, "/offers", "Job Offers"),
    (Nav::Matching, "/matching", "Matching"),
    (Nav::Stats, "/stats", "Statistics"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn from_flash(flash: Option<FlashMessage<'_>>) -> Option<Self> {
        flash.map(|f| match f.kind() {
            "error" => Banner::error(f.message()),
            _ => Banner::success(f.message()),
        })
    }

    pub fn render(&self) -> String {
        let class = match self.kind {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        };
        format!(
            r#"<div class="banner {}" role="alert">{}</div>"#,
            class,
            escape(&self.message)
        )
    }
}

pub fn escape(text: &str) -> String {
    RawStr::new(text).html_escape().into_owned()
}

/// Percent-encodes a query-string value.
pub fn encode_query(value: &str) -> String {
    RawStr::new(value).percent_encode().as_str().to_string()
}

pub fn render_banners(banners: &[Banner]) -> String {
    banners.iter().map(Banner::render).collect()
}

fn nav_bar(active: Nav) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(nav, href, label)| {
            let class = if *nav == active { "nav active" } else { "nav" };
            format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, label)
        })
        .collect();
    format!(
        r#"<header><nav><a class="brand" href="/">{}</a>{}</nav></header>"#,
        BRAND, links
    )
}

fn footer() -> String {
    let year = chrono::Utc::now().format("%Y");
    format!(
        r#"<footer><div>&copy; {} <a href="/">CV Matching System</a> - AI-Powered Matching Intelligent System</div></footer>"#,
        year
    )
}

/// Wraps a page body in the console chrome.
pub fn layout(title: &str, active: Nav, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | CV Matching</title>
<style>{style}</style>
</head>
<body>
{nav}
<main>
{body}
</main>
{footer}
</body>
</html>"#,
        title = escape(title),
        style = STYLE,
        nav = nav_bar(active),
        body = body,
        footer = footer(),
    )
}

pub fn chip(label: &str, class: &str) -> String {
    if class.is_empty() {
        format!(r#"<span class="chip">{}</span>"#, escape(label))
    } else {
        format!(r#"<span class="chip {}">{}</span>"#, class, escape(label))
    }
}

/// First `limit` skills as chips plus a "+N" chip for the rest.
pub fn skill_chips(skills: &[String], limit: usize) -> String {
    let mut html: String = skills.iter().take(limit).map(|s| chip(s, "")).collect();
    if skills.len() > limit {
        html.push_str(&chip(&format!("+{}", skills.len() - limit), "outlined"));
    }
    html
}

/// All skills as chips, or a muted placeholder.
pub fn all_skill_chips(skills: &[String]) -> String {
    if skills.is_empty() {
        r#"<p class="muted">No skills listed</p>"#.to_string()
    } else {
        skills.iter().map(|s| chip(s, "")).collect()
    }
}

/// `<select>` options with the matching value preselected.
pub fn select_options(options: &[(&str, &str)], selected: &str, placeholder: Option<&str>) -> String {
    let mut html = String::new();
    if let Some(text) = placeholder {
        html.push_str(&format!(r#"<option value="">{}</option>"#, escape(text)));
    }
    for (value, label) in options {
        let mark = if *value == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            escape(value),
            mark,
            escape(label)
        ));
    }
    html
}

/// A labelled fact for detail pages; omitted when the value is absent.
pub fn fact(label: &str, value: Option<String>) -> String {
    match value {
        Some(v) => format!("<dt>{}</dt><dd>{}</dd>", escape(label), escape(&v)),
        None => String::new(),
    }
}
