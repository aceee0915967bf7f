// src/web/views/candidates.rs
use crate::screens::form::{CandidateDraft, FormMode, FormScreen, AVAILABILITY_OPTIONS};
use crate::screens::list::ListScreen;
use crate::types::{Candidate, Recommendation};
use crate::utils::{format_date, format_money, format_number, humanize_code};
use crate::web::html::{
    all_skill_chips, escape, fact, layout, render_banners, select_options, skill_chips, Banner,
    Nav,
};
use crate::web::types::list_uri;
use crate::web::views::{default_save_button, delete_button, paginator, search_box, skill_editor};

const BASE: &str = "/candidates";

fn experience(years: Option<f64>) -> String {
    match years {
        Some(y) if y != 0.0 => format!("{} years", format_number(y)),
        _ => "N/A".to_string(),
    }
}

fn row(candidate: &Candidate, screen: &ListScreen<Candidate>) -> String {
    let id = escape(&candidate.id);
    let delete_action = list_uri(
        &format!("{}/delete/{}", BASE, candidate.id),
        screen.page,
        screen.rows_per_page,
        &screen.search,
    );
    format!(
        r#"<tr data-id="{id}"><td>{name}</td><td>{skills}</td><td>{location}</td><td>{experience}</td><td>{created}</td><td class="actions"><a class="button outlined" href="/candidates/{id}">View</a> <a class="button" href="/candidates/edit/{id}">Edit</a> {delete}</td></tr>"#,
        id = id,
        name = escape(&candidate.name),
        skills = skill_chips(&candidate.skills, 3),
        location = escape(candidate.location.as_deref().unwrap_or("N/A")),
        experience = experience(candidate.experience_years),
        created = escape(&format_date(candidate.created_at.as_deref())),
        delete = delete_button(&delete_action, "Are you sure you want to delete this candidate?"),
    )
}

pub fn list_page(screen: &ListScreen<Candidate>, notice: Option<Banner>) -> String {
    let mut banners: Vec<Banner> = notice.into_iter().collect();
    if let Some(error) = &screen.error {
        banners.push(Banner::error(error.clone()));
    }

    let filtered = screen.filtered();
    let rows: String = if filtered.is_empty() {
        r#"<tr><td colspan="6" class="empty">No candidates found</td></tr>"#.to_string()
    } else {
        filtered.iter().map(|c| row(c, screen)).collect()
    };

    let body = format!(
        r#"<div class="toolbar"><h1>Candidates</h1><a class="button" href="/candidates/new">Add Candidate</a></div>
<div class="paper">{search}{banners}<table class="candidates"><thead><tr><th>Name</th><th>Skills</th><th>Location</th><th>Experience</th><th>Created</th><th class="actions">Actions</th></tr></thead><tbody>{rows}</tbody></table>{paginator}</div>"#,
        search = search_box(BASE, screen, "Search by name or skills on this page..."),
        banners = render_banners(&banners),
        rows = rows,
        paginator = paginator(BASE, screen),
    );
    layout("Candidates", Nav::Candidates, &body)
}

fn text_field(name: &str, label: &str, kind: &str, value: &str, required: bool) -> String {
    format!(
        r#"<label for="{name}">{label}{star}</label><input type="{kind}" id="{name}" name="{name}" value="{value}"{req}>"#,
        star = if required { " *" } else { "" },
        value = escape(value),
        req = if required { " required" } else { "" },
    )
}

pub fn form_page(screen: &FormScreen<CandidateDraft>) -> String {
    let draft = &screen.draft;
    let (title, action, submit) = match &screen.mode {
        FormMode::Create => (
            "Add New Candidate".to_string(),
            "/candidates/new".to_string(),
            "Create Candidate",
        ),
        FormMode::Edit(id) => (
            "Edit Candidate".to_string(),
            format!("/candidates/edit/{}", id),
            "Update Candidate",
        ),
    };
    let banners: Vec<Banner> = screen.error.iter().map(|e| Banner::error(e.clone())).collect();

    let body = format!(
        r#"<h1>{title}</h1>
<div class="paper">{banners}<form method="post" action="{action}" class="candidate-form">
{default_save}
{name}{email}{phone}{location}
<label for="experience_years">Experience (years)</label><input type="number" min="0" id="experience_years" name="experience_years" value="{experience}">
<label for="salary_expectation">Salary Expectation</label><input type="number" min="0" id="salary_expectation" name="salary_expectation" value="{salary}">
<label for="availability">Availability</label><select id="availability" name="availability">{availability}</select>
<label for="text">Resume/CV Text</label><textarea id="text" name="text" rows="8" placeholder="Paste the candidate's resume text here for automatic skill extraction...">{text}</textarea>
{skills}
<div class="toolbar"><a class="button outlined" href="/candidates">Cancel</a><button type="submit" name="action" value="save" class="button">{submit}</button></div>
</form></div>"#,
        title = title,
        banners = render_banners(&banners),
        action = escape(&action),
        default_save = default_save_button(),
        name = text_field("name", "Name", "text", &draft.name, true),
        email = text_field("email", "Email", "email", &draft.email, false),
        phone = text_field("phone", "Phone", "text", &draft.phone, false),
        location = text_field("location", "Location", "text", &draft.location, false),
        experience = escape(&draft.experience_years),
        salary = escape(&draft.salary_expectation),
        availability = select_options(AVAILABILITY_OPTIONS, &draft.availability, Some("Not specified")),
        text = escape(&draft.text),
        skills = skill_editor(draft.skills.skills(), &screen.skill_input),
        submit = submit,
    );
    layout(&title, Nav::Candidates, &body)
}

fn recommendation_card(rec: &Recommendation) -> String {
    let priority = match &rec.priority {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "N/A".to_string(),
        Some(other) => other.to_string(),
    };
    format!(
        r#"<div class="paper recommendation"><h3>{title}</h3><p class="muted">Priority: {priority}</p><p>{description}</p><h4>Recommended Action:</h4><p>{action}</p></div>"#,
        title = escape(rec.title.as_deref().unwrap_or("")),
        priority = escape(&priority),
        description = escape(rec.description.as_deref().unwrap_or("")),
        action = escape(rec.action.as_deref().unwrap_or("")),
    )
}

/// Detail page. `candidate` is None when the fetch failed; the banner then
/// carries the reason.
pub fn detail_page(
    candidate: Option<&Candidate>,
    recommendations: &[Recommendation],
    error: Option<&str>,
) -> String {
    let Some(candidate) = candidate else {
        let message = error.unwrap_or("Candidate not found");
        let body = Banner::error(message).render();
        return layout("Candidate Profile", Nav::Candidates, &body);
    };

    let id = escape(&candidate.id);
    let contact = [
        fact("Email", candidate.email.clone()),
        fact("Phone", candidate.phone.clone()),
        fact(
            "Experience",
            candidate.experience_years.map(|y| format!("{} years", format_number(y))),
        ),
        fact(
            "Salary Expectation",
            candidate.salary_expectation.map(format_money),
        ),
        fact(
            "Availability",
            candidate.availability.as_deref().map(humanize_code),
        ),
    ]
    .concat();

    let recs = if recommendations.is_empty() {
        r#"<p class="muted">No recommendations available for this candidate yet. Try running a matching operation to generate recommendations.</p>"#.to_string()
    } else {
        recommendations.iter().map(recommendation_card).collect()
    };

    let resume = if candidate.text.trim().is_empty() {
        "No resume text available".to_string()
    } else {
        escape(&candidate.text)
    };

    let body = format!(
        r#"<div class="toolbar"><h1>Candidate Profile</h1><div><a class="button" href="/candidates/edit/{id}">Edit</a> <a class="button secondary" href="/matching/{id}">Match with Jobs</a></div></div>
<div class="grid">
<div class="paper profile"><h2>{name}</h2>{location}<dl class="facts">{contact}</dl><h3>Skills</h3><div class="skills">{skills}</div><p class="muted">Created: {created}</p><p class="muted">Last Updated: {updated}</p></div>
<div class="paper resume"><h2>Resume/CV Text</h2><div class="pre">{resume}</div></div>
</div>
<div class="paper recommendations"><h2>AI Recommendations</h2>{recs}</div>"#,
        id = id,
        name = escape(&candidate.name),
        location = candidate
            .location
            .as_deref()
            .map(|l| format!(r#"<p class="location">{}</p>"#, escape(l)))
            .unwrap_or_default(),
        contact = contact,
        skills = all_skill_chips(&candidate.skills),
        created = escape(&format_date(candidate.created_at.as_deref())),
        updated = escape(&format_date(candidate.updated_at.as_deref())),
        resume = resume,
        recs = recs,
    );
    layout(&candidate.name, Nav::Candidates, &body)
}
