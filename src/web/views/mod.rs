// src/web/views/mod.rs
//! HTML renderers, one module per screen. Each takes view state and
//! returns a complete page.

pub mod candidates;
pub mod home;
pub mod matching;
pub mod offers;
pub mod stats;

use crate::screens::list::{ListScreen, Listable, ROWS_PER_PAGE_OPTIONS};
use crate::web::html::escape;
use crate::web::types::list_uri;

/// Search box scoped to the fetched page.
pub(crate) fn search_box<T: Listable>(base: &str, screen: &ListScreen<T>, placeholder: &str) -> String {
    format!(
        r#"<form method="get" action="{base}" class="search"><input type="hidden" name="page" value="{page}"><input type="hidden" name="rows" value="{rows}"><input type="text" name="search" value="{search}" placeholder="{placeholder}"></form>"#,
        base = base,
        page = screen.page,
        rows = screen.rows_per_page,
        search = escape(&screen.search),
        placeholder = escape(placeholder),
    )
}

pub(crate) fn paginator<T: Listable>(base: &str, screen: &ListScreen<T>) -> String {
    let options: String = ROWS_PER_PAGE_OPTIONS
        .iter()
        .map(|n| {
            let mark = if *n == screen.rows_per_page { " selected" } else { "" };
            format!(r#"<option value="{n}"{mark}>{n}</option>"#)
        })
        .collect();

    let previous = if screen.has_previous_page() {
        format!(
            r#"<a class="button outlined" rel="prev" href="{}">Previous</a>"#,
            escape(&list_uri(base, screen.page.saturating_sub(1), screen.rows_per_page, &screen.search))
        )
    } else {
        String::new()
    };
    let next = if screen.has_next_page() {
        format!(
            r#"<a class="button outlined" rel="next" href="{}">Next</a>"#,
            escape(&list_uri(base, screen.page.saturating_add(1), screen.rows_per_page, &screen.search))
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="pagination"><form method="get" action="{base}"><input type="hidden" name="page" value="0"><input type="hidden" name="search" value="{search}"><label>Rows per page <select name="rows" onchange="this.form.submit()">{options}</select></label></form><span class="range">{range}</span>{previous}{next}</div>"#,
        base = base,
        search = escape(&screen.search),
        options = options,
        range = screen.range_label(),
        previous = previous,
        next = next,
    )
}

/// Delete button; the browser asks for confirmation before posting.
pub(crate) fn delete_button(action: &str, prompt: &str) -> String {
    format!(
        r#"<form method="post" action="{}" onsubmit="return confirm('{}')"><button type="submit" class="button danger">Delete</button></form>"#,
        escape(action),
        escape(prompt)
    )
}

/// Off-screen save button placed first in a form, so Enter in any field
/// saves instead of triggering the first visible submit button.
pub(crate) fn default_save_button() -> &'static str {
    r#"<button type="submit" name="action" value="save" class="default-action" tabindex="-1" aria-hidden="true">Save</button>"#
}

/// Hidden skill fields plus removable chips and the add-skill input.
pub(crate) fn skill_editor(skills: &[String], skill_input: &str) -> String {
    let hidden: String = skills
        .iter()
        .map(|s| format!(r#"<input type="hidden" name="skills" value="{}">"#, escape(s)))
        .collect();
    let chips: String = skills
        .iter()
        .map(|s| {
            format!(
                r#"<span class="chip">{label} <button type="submit" name="action" value="remove_skill:{value}" formnovalidate aria-label="Remove {label}">&times;</button></span>"#,
                label = escape(s),
                value = escape(s),
            )
        })
        .collect();
    format!(
        r#"<fieldset class="skills"><legend>Skills</legend>{hidden}<label for="skill_input">Add Skill</label><input type="text" id="skill_input" name="skill_input" value="{input}"><button type="submit" name="action" value="add_skill" class="button outlined" formnovalidate>Add</button><div class="chips">{chips}</div></fieldset>"#,
        hidden = hidden,
        input = escape(skill_input),
        chips = chips,
    )
}
