// src/web/views/offers.rs
use chrono::{DateTime, Utc};

use crate::screens::form::{FormMode, FormScreen, OfferDraft, EMPLOYMENT_TYPES};
use crate::screens::list::ListScreen;
use crate::types::Offer;
use crate::utils::{format_date, format_money, format_number, humanize_code, is_expired};
use crate::web::html::{
    all_skill_chips, chip, escape, layout, render_banners, select_options, skill_chips, Banner, Nav,
};
use crate::web::types::list_uri;
use crate::web::views::{default_save_button, delete_button, paginator, search_box, skill_editor};

const BASE: &str = "/offers";

/// "$min - $max", "From $min", "Up to $max" or "Not specified".
pub fn salary_range(min: Option<f64>, max: Option<f64>) -> String {
    let positive = |v: Option<f64>| v.filter(|n| *n != 0.0);
    match (positive(min), positive(max)) {
        (Some(lo), Some(hi)) => format!("{} - {}", format_money(lo), format_money(hi)),
        (Some(lo), None) => format!("From {}", format_money(lo)),
        (None, Some(hi)) => format!("Up to {}", format_money(hi)),
        (None, None) => "Not specified".to_string(),
    }
}

/// `0.87` -> "87%"
pub fn confidence(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() && s != 0.0 => format!("{}%", (s * 100.0).round() as i64),
        _ => "Not available".to_string(),
    }
}

fn row(offer: &Offer, screen: &ListScreen<Offer>, now: DateTime<Utc>) -> String {
    let expired = is_expired(offer.expires_at.as_deref(), now);
    let id = escape(&offer.id);
    let delete_action = list_uri(
        &format!("{}/delete/{}", BASE, offer.id),
        screen.page,
        screen.rows_per_page,
        &screen.search,
    );
    let experience = match offer.required_experience {
        Some(y) if y != 0.0 => format!("{} years", format_number(y)),
        _ => "N/A".to_string(),
    };
    format!(
        r#"<tr data-id="{id}"{class}><td>{title}{expired}</td><td>{company}</td><td>{skills}</td><td>{location}{remote}</td><td>{experience}</td><td>{created}</td><td class="actions"><a class="button outlined" href="/offers/{id}">View</a> <a class="button" href="/offers/edit/{id}">Edit</a> {delete}</td></tr>"#,
        id = id,
        class = if expired { r#" class="expired""# } else { "" },
        title = escape(&offer.title),
        expired = if expired { chip("Expired", "error") } else { String::new() },
        company = escape(&offer.company),
        skills = skill_chips(&offer.skills, 3),
        location = escape(offer.location.as_deref().unwrap_or("N/A")),
        remote = if offer.remote_allowed { chip("Remote", "outlined") } else { String::new() },
        experience = experience,
        created = escape(&format_date(offer.created_at.as_deref())),
        delete = delete_button(&delete_action, "Are you sure you want to delete this job offer?"),
    )
}

pub fn list_page(screen: &ListScreen<Offer>, notice: Option<Banner>, now: DateTime<Utc>) -> String {
    let mut banners: Vec<Banner> = notice.into_iter().collect();
    if let Some(error) = &screen.error {
        banners.push(Banner::error(error.clone()));
    }

    let filtered = screen.filtered();
    let rows: String = if filtered.is_empty() {
        r#"<tr><td colspan="7" class="empty">No job offers found</td></tr>"#.to_string()
    } else {
        filtered.iter().map(|o| row(o, screen, now)).collect()
    };

    let body = format!(
        r#"<div class="toolbar"><h1>Job Offers</h1><a class="button" href="/offers/new">Add Job Offer</a></div>
<div class="paper">{search}{banners}<table class="offers"><thead><tr><th>Title</th><th>Company</th><th>Skills</th><th>Location</th><th>Experience</th><th>Created</th><th class="actions">Actions</th></tr></thead><tbody>{rows}</tbody></table>{paginator}</div>"#,
        search = search_box(BASE, screen, "Search by title, company or skills on this page..."),
        banners = render_banners(&banners),
        rows = rows,
        paginator = paginator(BASE, screen),
    );
    layout("Job Offers", Nav::Offers, &body)
}

fn input(name: &str, label: &str, kind: &str, value: &str, extra: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label><input type="{kind}" id="{name}" name="{name}" value="{value}"{extra}>"#,
        value = escape(value),
    )
}

pub fn form_page(screen: &FormScreen<OfferDraft>) -> String {
    let draft = &screen.draft;
    let (title, action, submit) = match &screen.mode {
        FormMode::Create => ("Add New Job Offer", "/offers/new".to_string(), "Create Job Offer"),
        FormMode::Edit(id) => ("Edit Job Offer", format!("/offers/edit/{}", id), "Update Job Offer"),
    };
    let banners: Vec<Banner> = screen.error.iter().map(|e| Banner::error(e.clone())).collect();

    let body = format!(
        r#"<h1>{title}</h1>
<div class="paper">{banners}<form method="post" action="{action}" class="offer-form">
{default_save}
{title_field}{company}{location}
<label class="checkbox"><input type="checkbox" name="remote_allowed" value="true"{remote}> Remote Work Allowed</label>
{experience}
<label for="employment_type">Employment Type</label><select id="employment_type" name="employment_type">{employment}</select>
{salary_min}{salary_max}{expires}
<label for="description">Job Description *</label><textarea id="description" name="description" rows="8" required placeholder="Enter the job description here for automatic skill extraction...">{description}</textarea>
{skills}
<div class="toolbar"><a class="button outlined" href="/offers">Cancel</a><button type="submit" name="action" value="save" class="button">{submit}</button></div>
</form></div>"#,
        title = title,
        banners = render_banners(&banners),
        action = escape(&action),
        default_save = default_save_button(),
        title_field = input("title", "Job Title *", "text", &draft.title, " required"),
        company = input("company", "Company *", "text", &draft.company, " required"),
        location = input("location", "Location", "text", &draft.location, ""),
        remote = if draft.remote_allowed { " checked" } else { "" },
        experience = input(
            "required_experience",
            "Required Experience (years)",
            "number",
            &draft.required_experience,
            r#" min="0""#
        ),
        employment = select_options(EMPLOYMENT_TYPES, &draft.employment_type, Some("Not specified")),
        salary_min = input("salary_min", "Minimum Salary", "number", &draft.salary_min, r#" min="0""#),
        salary_max = input("salary_max", "Maximum Salary", "number", &draft.salary_max, r#" min="0""#),
        expires = input("expires_on", "Expiry Date", "date", &draft.expires_on, ""),
        description = escape(&draft.description),
        skills = skill_editor(draft.skills.skills(), &screen.skill_input),
        submit = submit,
    );
    layout(title, Nav::Offers, &body)
}

pub fn detail_page(offer: Option<&Offer>, error: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(offer) = offer else {
        let body = Banner::error(error.unwrap_or("Job offer not found")).render();
        return layout("Job Offer Details", Nav::Offers, &body);
    };

    let id = escape(&offer.id);
    let mut facts = String::new();
    if let Some(location) = &offer.location {
        let remote = if offer.remote_allowed { " (Remote allowed)" } else { "" };
        facts.push_str(&format!(
            "<dt>Location</dt><dd>{}{}</dd>",
            escape(location),
            remote
        ));
    }
    if let Some(years) = offer.required_experience {
        facts.push_str(&format!(
            "<dt>Required Experience</dt><dd>{} years</dd>",
            format_number(years)
        ));
    }
    if offer.salary_min.is_some() || offer.salary_max.is_some() {
        facts.push_str(&format!(
            "<dt>Salary Range</dt><dd>{}</dd>",
            salary_range(offer.salary_min, offer.salary_max)
        ));
    }
    let employment = offer
        .employment_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(humanize_code)
        .unwrap_or_else(|| "Not specified".to_string());
    facts.push_str(&format!(
        "<dt>Employment Type</dt><dd>{}</dd><dt>Expires</dt><dd>{}</dd>",
        escape(&employment),
        escape(&format_date(offer.expires_at.as_deref()))
    ));

    let expired = if is_expired(offer.expires_at.as_deref(), now) {
        chip("Expired", "error")
    } else {
        String::new()
    };
    let last_analysis = offer
        .last_ai_analysis
        .as_deref()
        .map(|d| format_date(Some(d)))
        .unwrap_or_else(|| "Not analyzed yet".to_string());

    let body = format!(
        r#"<div class="toolbar"><h1>Job Offer Details</h1><a class="button" href="/offers/edit/{id}">Edit</a></div>
<div class="grid">
<div class="paper summary"><h2>{title}</h2>{expired}<h3 class="company">{company}</h3><dl class="facts">{facts}</dl><h3>Required Skills</h3><div class="skills">{skills}</div><p class="muted">Created: {created}</p><p class="muted">Last Updated: {updated}</p></div>
<div class="paper description"><h2>Job Description</h2><div class="pre">{description}</div></div>
</div>
<div class="paper analysis"><h2>AI Analysis</h2><dl class="facts"><dt>Skill Extraction Method</dt><dd>{method}</dd><dt>AI Confidence Score</dt><dd>{confidence}</dd><dt>Last AI Analysis</dt><dd>{last_analysis}</dd></dl></div>"#,
        id = id,
        title = escape(&offer.title),
        expired = expired,
        company = escape(&offer.company),
        facts = facts,
        skills = all_skill_chips(&offer.skills),
        created = escape(&format_date(offer.created_at.as_deref())),
        updated = escape(&format_date(offer.updated_at.as_deref())),
        description = escape(&offer.description),
        method = escape(
            offer
                .skill_extraction_method
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or("Standard AI extraction")
        ),
        confidence = confidence(offer.ai_confidence_score),
        last_analysis = escape(&last_analysis),
    );
    layout(&offer.title, Nav::Offers, &body)
}
