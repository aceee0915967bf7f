use std::sync::{Arc, Mutex};

use cv_console::core::config_manager::MatchingConfig;
use cv_console::core::{ApiError, ApiResult, ConfigManager, ConsoleApi};
use cv_console::types::{
    Candidate, CandidateFormData, ListQuery, MatchParams, MatchResponse, Offer, OfferFormData,
    RecommendationsResponse, SkillAnalytics, StatsPayload,
};
use cv_console::{build_rocket, ConsoleState};
use reqwest::StatusCode;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use scraper::{Html, Selector};
use serde_json::{json, Value};

/// In-memory platform API that records what the console asked for.
#[derive(Default)]
struct FakeApi {
    candidates: Vec<Candidate>,
    /// Reachable by id only, never listed.
    unlisted: Vec<Candidate>,
    offers: Vec<Offer>,
    fail_delete: bool,
    fail_stats: bool,
    sparse_match: bool,
    deleted: Mutex<Vec<String>>,
    created: Mutex<Vec<CandidateFormData>>,
    updated: Mutex<Vec<(String, CandidateFormData)>>,
    updated_offers: Mutex<Vec<(String, OfferFormData)>>,
    match_requests: Mutex<Vec<(String, MatchParams)>>,
}

fn rejected(body: &str) -> ApiError {
    ApiError::Status {
        url: "http://api.test/fake".to_string(),
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: body.to_string(),
    }
}

fn candidate(id: &str, name: &str, skills: &[&str]) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        is_active: true,
        ..Default::default()
    }
}

#[rocket::async_trait]
impl ConsoleApi for FakeApi {
    async fn list_candidates(&self, _query: &ListQuery) -> ApiResult<Vec<Candidate>> {
        Ok(self.candidates.clone())
    }

    async fn get_candidate(&self, id: &str) -> ApiResult<Candidate> {
        self.candidates
            .iter()
            .chain(&self.unlisted)
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| rejected(r#"{"detail": "Candidate not found"}"#))
    }

    async fn create_candidate(&self, data: &CandidateFormData) -> ApiResult<Candidate> {
        self.created.lock().unwrap().push(data.clone());
        Ok(candidate("NEW", &data.name, &[]))
    }

    async fn update_candidate(&self, id: &str, data: &CandidateFormData) -> ApiResult<Candidate> {
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), data.clone()));
        Ok(candidate(id, &data.name, &[]))
    }

    async fn delete_candidate(&self, id: &str) -> ApiResult<()> {
        if self.fail_delete {
            return Err(rejected("boom"));
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn list_offers(&self, _query: &ListQuery) -> ApiResult<Vec<Offer>> {
        Ok(self.offers.clone())
    }

    async fn get_offer(&self, id: &str) -> ApiResult<Offer> {
        self.offers
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| rejected("not found"))
    }

    async fn create_offer(&self, _data: &OfferFormData) -> ApiResult<Offer> {
        Err(rejected(r#"{"detail": "An offer with this title already exists"}"#))
    }

    async fn update_offer(&self, id: &str, data: &OfferFormData) -> ApiResult<Offer> {
        self.updated_offers
            .lock()
            .unwrap()
            .push((id.to_string(), data.clone()));
        Ok(Offer {
            id: id.to_string(),
            title: data.title.clone(),
            ..Default::default()
        })
    }

    async fn delete_offer(&self, _id: &str) -> ApiResult<()> {
        Err(rejected("read only"))
    }

    async fn match_candidate(
        &self,
        candidate_id: &str,
        params: &MatchParams,
    ) -> ApiResult<MatchResponse> {
        self.match_requests
            .lock()
            .unwrap()
            .push((candidate_id.to_string(), params.clone()));

        let body = if self.sparse_match {
            json!({
                "candidate": null,
                "matches": [ { "ID": "O1", "title": "Rust Engineer", "Score global": "92" } ],
                "total_matches": null,
                "algorithm_used": null,
                "processing_time_ms": null,
                "filters_applied": null
            })
        } else {
            json!({
                "candidate": { "id": candidate_id, "name": "Ada Lovelace" },
                "matches": [
                    {
                        "ID": "O1",
                        "title": "Rust Engineer",
                        "Score global": "92",
                        "Compétences": "88",
                        "Sémantique": "75",
                        "Meilleur match": "1",
                        "Aperçu de l'offre": "Build async services"
                    },
                    {
                        "ID": "O2",
                        "title": "Data Engineer",
                        "Score global": "61",
                        "Compétences": "40",
                        "Sémantique": "70"
                    }
                ],
                "total_matches": 2,
                "algorithm_used": "hybrid",
                "processing_time_ms": 12.5
            })
        };
        serde_json::from_value(body).map_err(|e| ApiError::Decode {
            url: "http://api.test/match".to_string(),
            message: e.to_string(),
        })
    }

    async fn get_recommendations(
        &self,
        _candidate_id: &str,
        _recommendation_type: &str,
    ) -> ApiResult<RecommendationsResponse> {
        Err(rejected("no recommendations"))
    }

    async fn get_stats(&self) -> ApiResult<StatsPayload> {
        if self.fail_stats {
            return Err(rejected("stats down"));
        }
        let body = json!({
            "statistics": {
                "total_candidates": 12,
                "active_candidates": 10,
                "total_offers": 4,
                "active_offers": 3,
                "total_matches": 30,
                "average_match_score": 73.4,
                "match_levels": { "excellent": 5, "good": 10, "average": 10, "poor": 5 }
            },
            "skill_analytics": {
                "unique_skills_count": 2,
                "top_skills": [ { "name": "Rust", "count": 7 }, { "name": "Go", "count": 3 } ]
            }
        });
        serde_json::from_value(body).map_err(|e| ApiError::Decode {
            url: "http://api.test/stats".to_string(),
            message: e.to_string(),
        })
    }

    async fn get_skill_analytics(&self) -> ApiResult<SkillAnalytics> {
        Ok(SkillAnalytics::default())
    }

    async fn health(&self) -> ApiResult<Value> {
        Ok(json!({ "status": "healthy" }))
    }
}

fn roster() -> FakeApi {
    FakeApi {
        candidates: vec![
            candidate("C1", "Ada Lovelace", &["Rust", "SQL"]),
            candidate("C2", "Grace Hopper", &["COBOL"]),
        ],
        ..Default::default()
    }
}

fn job_board() -> FakeApi {
    FakeApi {
        offers: vec![
            Offer {
                id: "O1".to_string(),
                title: "Rust Engineer".to_string(),
                company: "Ferrous Labs".to_string(),
                description: "Build async services".to_string(),
                skills: vec!["Rust".to_string(), "Tokio".to_string()],
                remote_allowed: true,
                expires_at: Some("2020-01-31T00:00:00Z".to_string()),
                is_active: true,
                ..Default::default()
            },
            Offer {
                id: "O2".to_string(),
                title: "Data Engineer".to_string(),
                company: "Initech".to_string(),
                is_active: true,
                ..Default::default()
            },
        ],
        ..roster()
    }
}

async fn client_for(fake: Arc<FakeApi>) -> Client {
    client_with_config(fake, ConfigManager::default()).await
}

async fn client_with_config(fake: Arc<FakeApi>, config: ConfigManager) -> Client {
    let api: Arc<dyn ConsoleApi> = fake;
    let state = ConsoleState::new(api, config);
    Client::tracked(build_rocket(state))
        .await
        .expect("valid rocket instance")
}

async fn html_of(client: &Client, uri: &str) -> Html {
    let response = client.get(uri).dispatch().await;
    assert_eq!(response.status(), Status::Ok, "GET {}", uri);
    Html::parse_document(&response.into_string().await.expect("body"))
}

fn attrs(doc: &Html, selector: &str, attr: &str) -> Vec<String> {
    let selector = Selector::parse(selector).expect("valid selector");
    doc.select(&selector)
        .filter_map(|el| el.value().attr(attr))
        .map(str::to_string)
        .collect()
}

fn texts(doc: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).expect("valid selector");
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[tokio::test]
async fn selecting_a_candidate_issues_one_match_with_the_form_parameters() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    let doc = html_of(
        &client,
        "/matching?candidate=C1&top_k=5&min_score=0.3&use_ai=true&submitted=true",
    )
    .await;

    let requests = fake.match_requests.lock().unwrap().clone();
    assert_eq!(requests, vec![("C1".to_string(), MatchParams::new(5, 0.3, true))]);

    assert_eq!(
        texts(&doc, "article.match-card h3"),
        vec!["Rust Engineer".to_string(), "Data Engineer".to_string()]
    );
    assert_eq!(texts(&doc, ".chip.score.success"), vec!["92".to_string()]);
}

#[tokio::test]
async fn unchecked_ai_box_turns_ai_off() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    html_of(&client, "/matching?candidate=C2&top_k=8&min_score=0&submitted=true").await;

    let requests = fake.match_requests.lock().unwrap().clone();
    assert_eq!(requests, vec![("C2".to_string(), MatchParams::new(8, 0.0, false))]);
}

#[tokio::test]
async fn matching_path_id_uses_default_parameters() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    html_of(&client, "/matching/C1").await;

    let requests = fake.match_requests.lock().unwrap().clone();
    assert_eq!(requests, vec![("C1".to_string(), MatchParams::new(5, 0.0, true))]);
}

#[tokio::test]
async fn submitting_without_a_candidate_prompts_for_one() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    let doc = html_of(&client, "/matching?top_k=5&submitted=true").await;

    assert!(fake.match_requests.lock().unwrap().is_empty());
    assert_eq!(
        texts(&doc, ".banner.error"),
        vec!["Please select a candidate first.".to_string()]
    );
    assert!(texts(&doc, "article.match-card").is_empty());
}

#[tokio::test]
async fn rejected_delete_redirects_back_and_keeps_the_row() {
    let fake = Arc::new(FakeApi {
        fail_delete: true,
        ..roster()
    });
    let client = client_for(fake.clone()).await;

    let response = client
        .post("/candidates/delete/C1?page=0&rows=10")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    let location = response.headers().get_one("Location").expect("redirect target");
    assert_eq!(location, "/candidates?page=0&rows=10");
    assert!(fake.deleted.lock().unwrap().is_empty());

    let doc = html_of(&client, location).await;

    assert_eq!(
        texts(&doc, ".banner.error"),
        vec!["Failed to delete candidate. Please try again.".to_string()]
    );
    assert_eq!(texts(&doc, r#"tr[data-id="C1"]"#).len(), 1);
    assert_eq!(texts(&doc, "tr[data-id]").len(), 2);
}

#[tokio::test]
async fn successful_delete_redirects_with_a_flash_banner() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    let response = client
        .post("/candidates/delete/C2?page=0&rows=10&search=grace")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    let location = response.headers().get_one("Location").expect("redirect target");
    assert_eq!(location, "/candidates?page=0&rows=10&search=grace");
    assert_eq!(*fake.deleted.lock().unwrap(), vec!["C2".to_string()]);

    let doc = html_of(&client, location).await;
    assert_eq!(texts(&doc, ".banner.success"), vec!["Candidate deleted.".to_string()]);
}

#[tokio::test]
async fn search_filters_the_loaded_page() {
    let client = client_for(Arc::new(roster())).await;

    let doc = html_of(&client, "/candidates?search=sql").await;
    let selector = Selector::parse("tr[data-id]").expect("valid selector");
    let ids: Vec<&str> = doc
        .select(&selector)
        .filter_map(|row| row.value().attr("data-id"))
        .collect();
    assert_eq!(ids, vec!["C1"]);
}

#[tokio::test]
async fn empty_list_shows_placeholder_row() {
    let client = client_for(Arc::new(FakeApi::default())).await;

    let doc = html_of(&client, "/candidates").await;
    assert_eq!(texts(&doc, "td.empty"), vec!["No candidates found".to_string()]);
}

#[tokio::test]
async fn add_skill_rerenders_the_draft_without_saving() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    let response = client
        .post("/candidates/new")
        .header(ContentType::Form)
        .body("name=Ada&text=Resume&skills=Rust&skills=Go&skill_input=Go&action=add_skill")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let doc = Html::parse_document(&response.into_string().await.expect("body"));

    let selector = Selector::parse(r#"input[type="hidden"][name="skills"]"#).expect("valid selector");
    let skills: Vec<&str> = doc
        .select(&selector)
        .filter_map(|input| input.value().attr("value"))
        .collect();
    assert_eq!(skills, vec!["Rust", "Go"]);
    assert!(fake.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn saving_a_new_candidate_posts_the_payload() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    let response = client
        .post("/candidates/new")
        .header(ContentType::Form)
        .body("name=Ada&email=&text=Resume&experience_years=4&skills=Rust&action=save")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/candidates"));

    let created = fake.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "Ada");
    assert_eq!(created[0].email, None);
    assert_eq!(created[0].experience_years, Some(4.0));
    assert_eq!(created[0].skills, vec!["Rust".to_string()]);
}

#[tokio::test]
async fn candidate_detail_survives_missing_recommendations() {
    let client = client_for(Arc::new(roster())).await;

    let response = client.get("/candidates/C1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.expect("body");
    assert!(body.contains("Ada Lovelace"));
}

#[tokio::test]
async fn stats_page_renders_summary_cards() {
    let client = client_for(Arc::new(roster())).await;

    let doc = html_of(&client, "/stats").await;
    let titles = texts(&doc, ".summary-card h3");
    assert_eq!(titles, vec!["Candidates", "Job Offers", "Matches", "Unique Skills"]);
    assert!(texts(&doc, ".summary-card .value").contains(&"12".to_string()));
    let charts = Selector::parse(".chart-panel svg").expect("valid selector");
    assert!(doc.select(&charts).count() > 0);
}

#[tokio::test]
async fn stats_failure_shows_a_banner() {
    let fake = Arc::new(FakeApi {
        fail_stats: true,
        ..roster()
    });
    let client = client_for(fake).await;

    let doc = html_of(&client, "/stats").await;
    assert_eq!(
        texts(&doc, ".banner.error"),
        vec!["Failed to fetch statistics. Please try again later.".to_string()]
    );
}

#[tokio::test]
async fn unknown_paths_fall_back_to_home() {
    let client = client_for(Arc::new(roster())).await;

    let response = client.get("/no/such/page").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_string().await.expect("body");
    assert!(body.contains("AI-Powered CV Matching System"));
}

#[tokio::test]
async fn health_reports_upstream_status() {
    let client = client_for(Arc::new(roster())).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = serde_json::from_str(&response.into_string().await.expect("body"))
        .expect("json body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "cv-console");
    assert_eq!(body["upstream"]["status"], "healthy");
}

#[tokio::test]
async fn matching_path_id_resolves_a_candidate_outside_the_picker() {
    let fake = Arc::new(FakeApi {
        unlisted: vec![candidate("C9", "Alan Turing", &["Math"])],
        ..roster()
    });
    let client = client_for(fake.clone()).await;

    let doc = html_of(&client, "/matching/C9").await;

    let requests = fake.match_requests.lock().unwrap().clone();
    assert_eq!(requests, vec![("C9".to_string(), MatchParams::new(5, 0.0, true))]);
    assert_eq!(texts(&doc, "option[selected]"), vec!["Alan Turing".to_string()]);
}

#[tokio::test]
async fn configured_top_k_seeds_match_requests() {
    let fake = Arc::new(roster());
    let config = ConfigManager {
        matching: MatchingConfig { default_top_k: 9 },
        ..ConfigManager::default()
    };
    let client = client_with_config(fake.clone(), config).await;

    html_of(&client, "/matching/C1").await;
    html_of(&client, "/matching/C2?top_k=3").await;

    let requests = fake.match_requests.lock().unwrap().clone();
    assert_eq!(
        requests,
        vec![
            ("C1".to_string(), MatchParams::new(9, 0.0, true)),
            ("C2".to_string(), MatchParams::new(3, 0.0, true)),
        ]
    );
}

#[tokio::test]
async fn null_match_summary_fields_render_as_not_available() {
    let fake = Arc::new(FakeApi {
        sparse_match: true,
        ..roster()
    });
    let client = client_for(fake).await;

    let doc = html_of(&client, "/matching/C1").await;

    assert_eq!(texts(&doc, ".summary strong"), vec!["N/A".to_string()]);
    let lines = texts(&doc, ".summary p");
    assert!(lines.contains(&"Algorithm: N/A".to_string()));
    assert!(lines.contains(&"Total matches: 0".to_string()));
    assert_eq!(texts(&doc, "article.match-card h3"), vec!["Rust Engineer".to_string()]);
}

#[tokio::test]
async fn last_page_number_renders_without_overflow() {
    let client = client_for(Arc::new(roster())).await;

    let doc = html_of(&client, "/candidates?page=4294967295&rows=10").await;

    assert_eq!(
        texts(&doc, ".pagination .range"),
        vec!["42949672951-42949672952 of 42949672952".to_string()]
    );
    assert!(texts(&doc, r#"a[rel="next"]"#).is_empty());
    assert_eq!(
        attrs(&doc, r#"a[rel="prev"]"#, "href"),
        vec!["/candidates?page=4294967294&rows=10".to_string()]
    );
}

#[tokio::test]
async fn offer_list_flags_expired_and_remote_offers() {
    let client = client_for(Arc::new(job_board())).await;

    let doc = html_of(&client, "/offers").await;

    assert_eq!(attrs(&doc, "tr[data-id]", "data-id"), vec!["O1", "O2"]);
    assert_eq!(attrs(&doc, "tr.expired", "data-id"), vec!["O1"]);
    assert_eq!(texts(&doc, r#"tr[data-id="O1"] .chip.error"#), vec!["Expired".to_string()]);
    assert_eq!(texts(&doc, r#"tr[data-id="O1"] .chip.outlined"#), vec!["Remote".to_string()]);
    assert!(texts(&doc, r#"tr[data-id="O2"] .chip.error"#).is_empty());
    assert!(texts(&doc, r#"tr[data-id="O2"] .chip.outlined"#).is_empty());
}

#[tokio::test]
async fn offer_detail_shows_the_offer_or_an_error() {
    let client = client_for(Arc::new(job_board())).await;

    let doc = html_of(&client, "/offers/O1").await;
    assert_eq!(texts(&doc, ".summary h2"), vec!["Rust Engineer".to_string()]);
    assert_eq!(texts(&doc, "h3.company"), vec!["Ferrous Labs".to_string()]);
    assert_eq!(texts(&doc, ".summary .chip.error"), vec!["Expired".to_string()]);
    assert_eq!(attrs(&doc, r#"a[href="/offers/edit/O1"]"#, "href").len(), 1);

    let doc = html_of(&client, "/offers/missing").await;
    assert_eq!(
        texts(&doc, ".banner.error"),
        vec!["Failed to fetch job offer details. Please try again later.".to_string()]
    );
}

#[tokio::test]
async fn rejected_offer_keeps_the_draft_and_shows_the_server_detail() {
    let client = client_for(Arc::new(job_board())).await;

    let response = client
        .post("/offers/new")
        .header(ContentType::Form)
        .body("title=Rust%20Engineer&company=Ferrous%20Labs&description=Build&skills=Rust&remote_allowed=true&action=save")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let doc = Html::parse_document(&response.into_string().await.expect("body"));

    assert_eq!(
        texts(&doc, ".banner.error"),
        vec!["An offer with this title already exists".to_string()]
    );
    assert_eq!(attrs(&doc, r#"input[name="title"]"#, "value"), vec!["Rust Engineer"]);
    assert_eq!(attrs(&doc, r#"input[name="company"]"#, "value"), vec!["Ferrous Labs"]);
    assert_eq!(
        attrs(&doc, r#"input[type="hidden"][name="skills"]"#, "value"),
        vec!["Rust"]
    );
    assert_eq!(attrs(&doc, r#"input[name="remote_allowed"][checked]"#, "value").len(), 1);
}

#[tokio::test]
async fn editing_a_candidate_prefills_and_updates_by_id() {
    let fake = Arc::new(roster());
    let client = client_for(fake.clone()).await;

    let doc = html_of(&client, "/candidates/edit/C1").await;
    assert_eq!(attrs(&doc, "form.candidate-form", "action"), vec!["/candidates/edit/C1"]);
    assert_eq!(attrs(&doc, r#"input[name="name"]"#, "value"), vec!["Ada Lovelace"]);
    assert_eq!(
        attrs(&doc, r#"input[type="hidden"][name="skills"]"#, "value"),
        vec!["Rust", "SQL"]
    );

    let response = client
        .post("/candidates/edit/C1")
        .header(ContentType::Form)
        .body("name=Ada%20King&text=Resume&skills=Rust&skills=SQL&action=save")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/candidates"));

    let updated = fake.updated.lock().unwrap().clone();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "C1");
    assert_eq!(updated[0].1.name, "Ada King");
    assert_eq!(updated[0].1.skills, vec!["Rust".to_string(), "SQL".to_string()]);
    assert!(fake.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn editing_an_offer_prefills_and_updates_by_id() {
    let fake = Arc::new(job_board());
    let client = client_for(fake.clone()).await;

    let doc = html_of(&client, "/offers/edit/O1").await;
    assert_eq!(attrs(&doc, "form.offer-form", "action"), vec!["/offers/edit/O1"]);
    assert_eq!(attrs(&doc, r#"input[name="title"]"#, "value"), vec!["Rust Engineer"]);
    assert_eq!(attrs(&doc, r#"input[name="expires_on"]"#, "value"), vec!["2020-01-31"]);

    let response = client
        .post("/offers/edit/O1")
        .header(ContentType::Form)
        .body("title=Senior%20Rust%20Engineer&company=Ferrous%20Labs&description=Build&skills=Rust&expires_on=2030-06-30&action=save")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/offers"));

    let updated = fake.updated_offers.lock().unwrap().clone();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "O1");
    assert_eq!(updated[0].1.title, "Senior Rust Engineer");
    assert_eq!(updated[0].1.expires_at.as_deref(), Some("2030-06-30T00:00:00Z"));
    assert!(!updated[0].1.remote_allowed);
}

#[tokio::test]
async fn enter_in_a_form_submits_save_before_add_skill() {
    let client = client_for(Arc::new(job_board())).await;

    for (uri, form) in [
        ("/candidates/new", "form.candidate-form"),
        ("/candidates/edit/C1", "form.candidate-form"),
        ("/offers/new", "form.offer-form"),
    ] {
        let doc = html_of(&client, uri).await;
        let values = attrs(&doc, &format!(r#"{} button[type="submit"]"#, form), "value");
        assert_eq!(values.first().map(String::as_str), Some("save"), "{}", uri);
        assert!(values.contains(&"add_skill".to_string()), "{}", uri);
    }
}
