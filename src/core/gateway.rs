// src/core/gateway.rs
//! The operations the console needs from the platform API.
//!
//! Screens hold an `Arc<dyn ConsoleApi>`; production wires in
//! [`ServiceClient`], tests wire in an in-memory fake.

use serde_json::Value;

use crate::core::error::ApiResult;
use crate::core::service_client::ServiceClient;
use crate::types::{
    Candidate, CandidateFormData, ListQuery, MatchParams, MatchResponse, Offer, OfferFormData,
    RecommendationsResponse, SkillAnalytics, StatsPayload,
};

#[rocket::async_trait]
pub trait ConsoleApi: Send + Sync {
    async fn list_candidates(&self, query: &ListQuery) -> ApiResult<Vec<Candidate>>;
    async fn get_candidate(&self, id: &str) -> ApiResult<Candidate>;
    async fn create_candidate(&self, data: &CandidateFormData) -> ApiResult<Candidate>;
    async fn update_candidate(&self, id: &str, data: &CandidateFormData) -> ApiResult<Candidate>;
    async fn delete_candidate(&self, id: &str) -> ApiResult<()>;

    async fn list_offers(&self, query: &ListQuery) -> ApiResult<Vec<Offer>>;
    async fn get_offer(&self, id: &str) -> ApiResult<Offer>;
    async fn create_offer(&self, data: &OfferFormData) -> ApiResult<Offer>;
    async fn update_offer(&self, id: &str, data: &OfferFormData) -> ApiResult<Offer>;
    async fn delete_offer(&self, id: &str) -> ApiResult<()>;

    async fn match_candidate(
        &self,
        candidate_id: &str,
        params: &MatchParams,
    ) -> ApiResult<MatchResponse>;
    async fn get_recommendations(
        &self,
        candidate_id: &str,
        recommendation_type: &str,
    ) -> ApiResult<RecommendationsResponse>;

    async fn get_stats(&self) -> ApiResult<StatsPayload>;
    async fn get_skill_analytics(&self) -> ApiResult<SkillAnalytics>;
    async fn health(&self) -> ApiResult<Value>;
}

#[rocket::async_trait]
impl ConsoleApi for ServiceClient {
    async fn list_candidates(&self, query: &ListQuery) -> ApiResult<Vec<Candidate>> {
        ServiceClient::list_candidates(self, query).await
    }

    async fn get_candidate(&self, id: &str) -> ApiResult<Candidate> {
        ServiceClient::get_candidate(self, id).await
    }

    async fn create_candidate(&self, data: &CandidateFormData) -> ApiResult<Candidate> {
        ServiceClient::create_candidate(self, data).await
    }

    async fn update_candidate(&self, id: &str, data: &CandidateFormData) -> ApiResult<Candidate> {
        ServiceClient::update_candidate(self, id, data).await
    }

    async fn delete_candidate(&self, id: &str) -> ApiResult<()> {
        ServiceClient::delete_candidate(self, id).await
    }

    async fn list_offers(&self, query: &ListQuery) -> ApiResult<Vec<Offer>> {
        ServiceClient::list_offers(self, query).await
    }

    async fn get_offer(&self, id: &str) -> ApiResult<Offer> {
        ServiceClient::get_offer(self, id).await
    }

    async fn create_offer(&self, data: &OfferFormData) -> ApiResult<Offer> {
        ServiceClient::create_offer(self, data).await
    }

    async fn update_offer(&self, id: &str, data: &OfferFormData) -> ApiResult<Offer> {
        ServiceClient::update_offer(self, id, data).await
    }

    async fn delete_offer(&self, id: &str) -> ApiResult<()> {
        ServiceClient::delete_offer(self, id).await
    }

    async fn match_candidate(
        &self,
        candidate_id: &str,
        params: &MatchParams,
    ) -> ApiResult<MatchResponse> {
        ServiceClient::match_candidate(self, candidate_id, params).await
    }

    async fn get_recommendations(
        &self,
        candidate_id: &str,
        recommendation_type: &str,
    ) -> ApiResult<RecommendationsResponse> {
        ServiceClient::get_recommendations(self, candidate_id, recommendation_type).await
    }

    async fn get_stats(&self) -> ApiResult<StatsPayload> {
        ServiceClient::get_stats(self).await
    }

    async fn get_skill_analytics(&self) -> ApiResult<SkillAnalytics> {
        ServiceClient::get_skill_analytics(self).await
    }

    async fn health(&self) -> ApiResult<Value> {
        ServiceClient::health(self).await
    }
}
