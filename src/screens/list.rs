//! View state for the paginated candidate and offer tables.

use crate::types::{Candidate, ListQuery, Offer};

pub const ROWS_PER_PAGE_OPTIONS: [u32; 3] = [5, 10, 25];
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;

/// A row the list screen can identify and search.
pub trait Listable: Clone {
    /// Case-insensitive substring match; `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool;
}

fn any_skill_matches(skills: &[String], needle: &str) -> bool {
    skills
        .iter()
        .any(|skill| skill.to_lowercase().contains(needle))
}

impl Listable for Candidate {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || any_skill_matches(&self.skills, needle)
    }
}

impl Listable for Offer {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
            || any_skill_matches(&self.skills, needle)
    }
}

#[derive(Debug, Clone)]
pub struct ListScreen<T: Listable> {
    pub page: u32,
    pub rows_per_page: u32,
    pub search: String,
    pub rows: Vec<T>,
    pub error: Option<String>,
}

impl<T: Listable> ListScreen<T> {
    /// Unknown page sizes fall back to the default.
    pub fn new(page: u32, rows_per_page: u32, search: impl Into<String>) -> Self {
        let rows_per_page = if ROWS_PER_PAGE_OPTIONS.contains(&rows_per_page) {
            rows_per_page
        } else {
            DEFAULT_ROWS_PER_PAGE
        };
        Self {
            page,
            rows_per_page,
            search: search.into(),
            rows: Vec::new(),
            error: None,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::active_page(self.page, self.rows_per_page)
    }

    pub fn loaded(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Rows of the fetched page that match the search box.
    ///
    /// Only the current page is searched; the list endpoint has no search
    /// parameter.
    pub fn filtered(&self) -> Vec<&T> {
        let needle = self.search.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| needle.is_empty() || row.matches(&needle))
            .collect()
    }

    /// Rows on earlier pages; widened so any page number fits.
    fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.rows_per_page)
    }

    /// Approximate total for the paginator: the server reports no total, so
    /// this is the rows seen so far plus the current page.
    pub fn estimated_total(&self) -> u64 {
        if self.rows.is_empty() {
            0
        } else {
            self.rows.len() as u64 + self.offset()
        }
    }

    /// A full page suggests there may be another one.
    pub fn has_next_page(&self) -> bool {
        self.page < u32::MAX && self.rows.len() as u64 >= u64::from(self.rows_per_page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    /// "11-14 of 24" style range label for the paginator.
    pub fn range_label(&self) -> String {
        let total = self.estimated_total();
        if total == 0 {
            return "0-0 of 0".to_string();
        }
        let first = self.offset() + 1;
        format!("{}-{} of {}", first, total, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, name: &str, skills: &[&str]) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn offer(id: &str, title: &str, company: &str) -> Offer {
        Offer {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn estimated_total_adds_previous_pages() {
        let mut screen = ListScreen::new(2, 10, "");
        screen.loaded((0..4).map(|i| candidate(&i.to_string(), "x", &[])).collect());
        assert_eq!(screen.estimated_total(), 24);
        assert_eq!(screen.range_label(), "21-24 of 24");
        assert!(!screen.has_next_page());
        assert!(screen.has_previous_page());
    }

    #[test]
    fn empty_page_estimates_zero() {
        let screen: ListScreen<Candidate> = ListScreen::new(3, 10, "");
        assert_eq!(screen.estimated_total(), 0);
        assert_eq!(screen.range_label(), "0-0 of 0");
    }

    #[test]
    fn query_uses_skip_and_limit() {
        let screen: ListScreen<Offer> = ListScreen::new(2, 25, "");
        let query = screen.query();
        assert_eq!(query.skip, 50);
        assert_eq!(query.limit, 25);
        assert_eq!(query.is_active, Some(true));
    }

    #[test]
    fn unknown_page_size_falls_back() {
        let screen: ListScreen<Offer> = ListScreen::new(0, 7, "");
        assert_eq!(screen.rows_per_page, DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn candidate_filter_checks_name_and_skills() {
        let mut screen = ListScreen::new(0, 10, "RUST");
        screen.loaded(vec![
            candidate("1", "Ada", &["Rust", "Go"]),
            candidate("2", "Rusty Nail", &[]),
            candidate("3", "Grace", &["COBOL"]),
        ]);
        let ids: Vec<_> = screen.filtered().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn offer_filter_checks_company() {
        let mut screen = ListScreen::new(0, 10, "acme");
        screen.loaded(vec![offer("1", "Dev", "ACME Corp"), offer("2", "Ops", "Initech")]);
        assert_eq!(screen.filtered().len(), 1);

        screen.search = "  ".to_string();
        assert_eq!(screen.filtered().len(), 2);
    }

    #[test]
    fn last_representable_page_does_not_overflow() {
        let mut screen = ListScreen::new(u32::MAX, 25, "");
        screen.loaded((0..25).map(|i| candidate(&i.to_string(), "x", &[])).collect());

        let offset = u64::from(u32::MAX) * 25;
        assert_eq!(screen.estimated_total(), offset + 25);
        assert_eq!(
            screen.range_label(),
            format!("{}-{} of {}", offset + 1, offset + 25, offset + 25)
        );
        assert!(!screen.has_next_page());
        assert_eq!(screen.query().skip, u32::MAX);
    }
}
