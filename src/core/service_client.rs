// src/core/service_client.rs
//! HTTP client for the matching platform API - one call per resource/verb, JSON in and out

use anyhow::Context;
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::error::{ApiError, ApiResult};
use crate::types::lenient::{Keyed, WithObjectId};
use crate::types::{
    Candidate, CandidateFormData, ListQuery, MatchParams, MatchResponse, Offer, OfferFormData,
    RecommendationsResponse, SkillAnalytics, StatsPayload,
};

const CANDIDATES_ENDPOINT: &str = "/api/mongodb/candidates";
const OFFERS_ENDPOINT: &str = "/api/mongodb/offers";
const MATCH_ENDPOINT: &str = "/api/mongodb/match";
const STATS_ENDPOINT: &str = "/api/mongodb/stats";
const SKILL_STATS_ENDPOINT: &str = "/api/mongodb/stats/skills";
const HEALTH_ENDPOINT: &str = "/api/mongodb/health";

pub const DEFAULT_RECOMMENDATION_TYPE: &str = "skills";

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client for `base_url`. Without a timeout the transport default applies.
    pub fn new(base_url: impl Into<String>, timeout_seconds: Option<u64>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Candidates

    pub async fn list_candidates(&self, query: &ListQuery) -> ApiResult<Vec<Candidate>> {
        let rows: Vec<WithObjectId<Candidate>> = self
            .fetch(Method::GET, CANDIDATES_ENDPOINT, |req| req.query(query))
            .await?;
        Ok(rows.into_iter().map(WithObjectId::into_record).collect())
    }

    pub async fn get_candidate(&self, id: &str) -> ApiResult<Candidate> {
        record(self.get(&format!("{}/{}", CANDIDATES_ENDPOINT, id)).await)
    }

    pub async fn create_candidate(&self, data: &CandidateFormData) -> ApiResult<Candidate> {
        record(self.send_json(Method::POST, CANDIDATES_ENDPOINT, data).await)
    }

    pub async fn update_candidate(
        &self,
        id: &str,
        data: &CandidateFormData,
    ) -> ApiResult<Candidate> {
        record(
            self.send_json(Method::PUT, &format!("{}/{}", CANDIDATES_ENDPOINT, id), data)
                .await,
        )
    }

    pub async fn delete_candidate(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("{}/{}", CANDIDATES_ENDPOINT, id)).await
    }

    // Offers

    pub async fn list_offers(&self, query: &ListQuery) -> ApiResult<Vec<Offer>> {
        let rows: Vec<WithObjectId<Offer>> = self
            .fetch(Method::GET, OFFERS_ENDPOINT, |req| req.query(query))
            .await?;
        Ok(rows.into_iter().map(WithObjectId::into_record).collect())
    }

    pub async fn get_offer(&self, id: &str) -> ApiResult<Offer> {
        record(self.get(&format!("{}/{}", OFFERS_ENDPOINT, id)).await)
    }

    pub async fn create_offer(&self, data: &OfferFormData) -> ApiResult<Offer> {
        record(self.send_json(Method::POST, OFFERS_ENDPOINT, data).await)
    }

    pub async fn update_offer(&self, id: &str, data: &OfferFormData) -> ApiResult<Offer> {
        record(
            self.send_json(Method::PUT, &format!("{}/{}", OFFERS_ENDPOINT, id), data)
                .await,
        )
    }

    pub async fn delete_offer(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("{}/{}", OFFERS_ENDPOINT, id)).await
    }

    // Matching

    /// POST with an empty body; parameters travel in the query string.
    pub async fn match_candidate(
        &self,
        candidate_id: &str,
        params: &MatchParams,
    ) -> ApiResult<MatchResponse> {
        let endpoint = format!("{}/{}", MATCH_ENDPOINT, candidate_id);
        self.fetch(Method::POST, &endpoint, |req| req.query(params))
            .await
    }

    pub async fn get_recommendations(
        &self,
        candidate_id: &str,
        recommendation_type: &str,
    ) -> ApiResult<RecommendationsResponse> {
        let endpoint = format!("{}/{}/recommendations", CANDIDATES_ENDPOINT, candidate_id);
        self.fetch(Method::GET, &endpoint, |req| {
            req.query(&[("recommendation_type", recommendation_type)])
        })
        .await
    }

    // Statistics and health

    pub async fn get_stats(&self) -> ApiResult<StatsPayload> {
        self.get(STATS_ENDPOINT).await
    }

    pub async fn get_skill_analytics(&self) -> ApiResult<SkillAnalytics> {
        self.get(SKILL_STATS_ENDPOINT).await
    }

    pub async fn health(&self) -> ApiResult<Value> {
        self.get(HEALTH_ENDPOINT).await
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        self.fetch(Method::GET, endpoint, |req| req).await
    }

    /// Request with a JSON body
    pub async fn send_json<T, R>(&self, method: Method, endpoint: &str, payload: &T) -> ApiResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.fetch(method, endpoint, |req| req.json(payload)).await
    }

    /// DELETE request; any success status counts, the body is ignored
    pub async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        self.execute(Method::DELETE, endpoint, |req| req).await?;
        Ok(())
    }

    async fn fetch<R, F>(&self, method: Method, endpoint: &str, build: F) -> ApiResult<R>
    where
        R: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let (url, body) = self.execute(method, endpoint, build).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            ApiError::Decode {
                url,
                message: e.to_string(),
            }
        })
    }

    /// Issues one request and returns the URL and raw body of a successful response.
    async fn execute<F>(&self, method: Method, endpoint: &str, build: F) -> ApiResult<(String, String)>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("{} {}", method, url);

        let request = build(
            self.client
                .request(method.clone(), &url)
                .header(reqwest::header::CONTENT_TYPE, "application/json"),
        );

        let response = request.send().await.map_err(|source| {
            warn!("{} {} failed: {}", method, url, source);
            ApiError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        debug!("{} {} -> {}", method, url, status);

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        if status.is_success() {
            Ok((url, body))
        } else {
            warn!("{} {} returned {}: {}", method, url, status, body);
            Err(ApiError::Status { url, status, body })
        }
    }
}

/// Unwraps an entity decoded with its `_id` beside it.
fn record<T: Keyed>(decoded: ApiResult<WithObjectId<T>>) -> ApiResult<T> {
    decoded.map(WithObjectId::into_record)
}
