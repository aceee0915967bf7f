use serde::{Deserialize, Serialize};

use super::lenient::{default_true, flag_or_true, lenient_id, null_as_default, Keyed};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub required_experience: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remote_allowed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default = "default_true", deserialize_with = "flag_or_true")]
    pub is_active: bool,
    #[serde(default)]
    pub ai_confidence_score: Option<f64>,
    #[serde(default)]
    pub skill_extraction_method: Option<String>,
    #[serde(default)]
    pub last_ai_analysis: Option<String>,
}

impl Keyed for Offer {
    fn id_slot(&mut self) -> &mut String {
        &mut self.id
    }
}

/// Payload sent on offer create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferFormData {
    pub title: String,
    pub company: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_experience: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    pub remote_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl From<&Offer> for OfferFormData {
    fn from(offer: &Offer) -> Self {
        Self {
            title: offer.title.clone(),
            company: offer.company.clone(),
            description: offer.description.clone(),
            skills: offer.skills.clone(),
            required_experience: offer.required_experience,
            location: offer.location.clone(),
            salary_min: offer.salary_min,
            salary_max: offer.salary_max,
            employment_type: offer.employment_type.clone(),
            remote_allowed: offer.remote_allowed,
            expires_at: offer.expires_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lenient::WithObjectId;

    #[test]
    fn null_fields_keep_the_offer() {
        let offer: Offer = serde_json::from_str(
            r#"{"id": "o1", "title": "Dev", "company": null, "description": null,
                "skills": null, "remote_allowed": null, "is_active": null}"#,
        )
        .unwrap();
        assert_eq!(offer.title, "Dev");
        assert_eq!(offer.company, "");
        assert!(offer.skills.is_empty());
        assert!(!offer.remote_allowed);
        assert!(offer.is_active);
    }

    #[test]
    fn id_wins_over_object_id() {
        let offers: Vec<WithObjectId<Offer>> = serde_json::from_str(
            r#"[{"_id": "m1", "id": "o1", "title": "Dev"}, {"_id": "m2", "title": "Ops"}]"#,
        )
        .unwrap();
        let ids: Vec<String> = offers.into_iter().map(|o| o.into_record().id).collect();
        assert_eq!(ids, ["o1", "m2"]);
    }
}
