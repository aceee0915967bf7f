//! Create/edit form state for candidates and offers.
//!
//! The whole draft round-trips through the HTML form, so adding or removing
//! a skill re-renders the form without touching the API; only `Save` submits.

use crate::types::{Candidate, CandidateFormData, Offer, OfferFormData};
use crate::utils::{non_empty, parse_optional_number};

pub const AVAILABILITY_OPTIONS: &[(&str, &str)] = &[
    ("immediate", "Immediate"),
    ("2_weeks", "2 Weeks Notice"),
    ("1_month", "1 Month Notice"),
    ("3_months", "3+ Months Notice"),
];

pub const EMPLOYMENT_TYPES: &[(&str, &str)] = &[
    ("full_time", "Full-time"),
    ("part_time", "Part-time"),
    ("contract", "Contract"),
    ("internship", "Internship"),
    ("freelance", "Freelance"),
];

/// Tag-style editor over an ordered skill list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillEditor {
    skills: Vec<String>,
}

impl SkillEditor {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Trims `input` and appends it unless blank or already present.
    pub fn add(&mut self, input: &str) -> bool {
        let skill = input.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Removes entries equal to `skill`; the rest keep their order.
    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    AddSkill,
    RemoveSkill(String),
    Save,
}

impl FormAction {
    /// Decodes the submit button value: `add_skill`, `remove_skill:<skill>`,
    /// anything else saves.
    pub fn parse(raw: &str) -> Self {
        if raw == "add_skill" {
            FormAction::AddSkill
        } else if let Some(skill) = raw.strip_prefix("remove_skill:") {
            FormAction::RemoveSkill(skill.to_string())
        } else {
            FormAction::Save
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Drafts expose their skill editor so [`FormScreen`] can drive it.
pub trait Draft {
    fn skill_editor(&mut self) -> &mut SkillEditor;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub experience_years: String,
    pub salary_expectation: String,
    pub availability: String,
    pub text: String,
    pub skills: SkillEditor,
}

impl CandidateDraft {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone().unwrap_or_default(),
            phone: candidate.phone.clone().unwrap_or_default(),
            location: candidate.location.clone().unwrap_or_default(),
            experience_years: number_field(candidate.experience_years),
            salary_expectation: number_field(candidate.salary_expectation),
            availability: candidate.availability.clone().unwrap_or_default(),
            text: candidate.text.clone(),
            skills: SkillEditor::new(candidate.skills.clone()),
        }
    }

    pub fn to_payload(&self) -> CandidateFormData {
        CandidateFormData {
            name: self.name.trim().to_string(),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            text: self.text.clone(),
            skills: self.skills.skills().to_vec(),
            experience_years: parse_optional_number(&self.experience_years),
            location: non_empty(&self.location),
            salary_expectation: parse_optional_number(&self.salary_expectation),
            availability: non_empty(&self.availability),
        }
    }
}

impl Draft for CandidateDraft {
    fn skill_editor(&mut self) -> &mut SkillEditor {
        &mut self.skills
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferDraft {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub required_experience: String,
    pub salary_min: String,
    pub salary_max: String,
    pub employment_type: String,
    pub remote_allowed: bool,
    /// `YYYY-MM-DD` from the date input
    pub expires_on: String,
    pub skills: SkillEditor,
}

impl OfferDraft {
    pub fn from_offer(offer: &Offer) -> Self {
        let expires_on = offer
            .expires_at
            .as_deref()
            .and_then(crate::utils::parse_timestamp)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Self {
            title: offer.title.clone(),
            company: offer.company.clone(),
            description: offer.description.clone(),
            location: offer.location.clone().unwrap_or_default(),
            required_experience: number_field(offer.required_experience),
            salary_min: number_field(offer.salary_min),
            salary_max: number_field(offer.salary_max),
            employment_type: offer.employment_type.clone().unwrap_or_default(),
            remote_allowed: offer.remote_allowed,
            expires_on,
            skills: SkillEditor::new(offer.skills.clone()),
        }
    }

    pub fn to_payload(&self) -> OfferFormData {
        OfferFormData {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            description: self.description.clone(),
            skills: self.skills.skills().to_vec(),
            required_experience: parse_optional_number(&self.required_experience),
            location: non_empty(&self.location),
            salary_min: parse_optional_number(&self.salary_min),
            salary_max: parse_optional_number(&self.salary_max),
            employment_type: non_empty(&self.employment_type),
            remote_allowed: self.remote_allowed,
            expires_at: non_empty(&self.expires_on).map(|date| format!("{}T00:00:00Z", date)),
        }
    }
}

impl Draft for OfferDraft {
    fn skill_editor(&mut self) -> &mut SkillEditor {
        &mut self.skills
    }
}

fn number_field(value: Option<f64>) -> String {
    value.map(crate::utils::format_number).unwrap_or_default()
}

/// What the handler should do after applying a form action.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Rerender,
    Submit,
}

#[derive(Debug, Clone)]
pub struct FormScreen<D: Draft> {
    pub mode: FormMode,
    pub draft: D,
    pub skill_input: String,
    pub error: Option<String>,
}

impl<D: Draft> FormScreen<D> {
    pub fn new(mode: FormMode, draft: D) -> Self {
        Self {
            mode,
            draft,
            skill_input: String::new(),
            error: None,
        }
    }

    pub fn apply(&mut self, action: FormAction) -> FormOutcome {
        match action {
            FormAction::AddSkill => {
                if self.draft.skill_editor().add(&self.skill_input) {
                    self.skill_input.clear();
                }
                FormOutcome::Rerender
            }
            FormAction::RemoveSkill(skill) => {
                self.draft.skill_editor().remove(&skill);
                FormOutcome::Rerender
            }
            FormAction::Save => FormOutcome::Submit,
        }
    }
}
