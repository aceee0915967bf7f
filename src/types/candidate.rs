use serde::{Deserialize, Serialize};

use super::lenient::{default_true, flag_or_true, lenient_id, null_as_default, Keyed};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_expectation: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub cv_file_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default = "default_true", deserialize_with = "flag_or_true")]
    pub is_active: bool,
    #[serde(default)]
    pub ai_confidence_score: Option<f64>,
    #[serde(default)]
    pub skill_extraction_method: Option<String>,
    #[serde(default)]
    pub last_ai_analysis: Option<String>,
}

impl Keyed for Candidate {
    fn id_slot(&mut self) -> &mut String {
        &mut self.id
    }
}

/// Payload sent on candidate create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateFormData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub text: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl From<&Candidate> for CandidateFormData {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            phone: candidate.phone.clone(),
            text: candidate.text.clone(),
            skills: candidate.skills.clone(),
            experience_years: candidate.experience_years,
            location: candidate.location.clone(),
            salary_expectation: candidate.salary_expectation,
            availability: candidate.availability.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lenient::WithObjectId;

    #[test]
    fn sparse_candidate_payload_decodes() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"id": "c1", "name": "Ada"}"#).unwrap();
        assert_eq!(candidate.id, "c1");
        assert!(candidate.skills.is_empty());
        assert!(candidate.is_active);
        assert_eq!(candidate.email, None);
    }

    #[test]
    fn null_scalars_read_as_blank() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"id": "c1", "name": null, "text": null, "skills": null, "is_active": null, "email": null}"#,
        )
        .unwrap();
        assert_eq!(candidate.name, "");
        assert_eq!(candidate.text, "");
        assert!(candidate.skills.is_empty());
        assert!(candidate.is_active);
    }

    #[test]
    fn object_id_fills_in_missing_id() {
        let both: WithObjectId<Candidate> =
            serde_json::from_str(r#"{"_id": "mongo-1", "id": "c1", "name": "Ada"}"#).unwrap();
        assert_eq!(both.into_record().id, "c1");

        let only_object_id: WithObjectId<Candidate> =
            serde_json::from_str(r#"{"_id": {"$oid": "mongo-2"}, "name": "Ada"}"#).unwrap();
        let candidate = only_object_id.into_record();
        assert_eq!(candidate.id, "mongo-2");
        assert_eq!(candidate.name, "Ada");
    }

    #[test]
    fn numeric_id_becomes_text() {
        let candidate: Candidate = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(candidate.id, "42");
    }

    #[test]
    fn form_payload_omits_absent_optionals() {
        let form = CandidateFormData {
            name: "Ada".to_string(),
            text: "resume".to_string(),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Ada");
        assert!(json.get("email").is_none());
        assert_eq!(json["skills"][0], "Rust");
    }
}
