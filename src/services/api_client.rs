// ============================================================================
// API CLIENT - GraphQL communication only (stateless)
// ============================================================================
// No business logic here, just GraphQL requests against the backend.
// Every operation posts a {query, variables} document and unwraps the
// {data, errors} envelope; a non-empty errors array is always an Err.
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::models::{CheckInResult, CheckOutResult, ExpertReview, HikeRecord, RecentHiker, TrailDetail, TrailSummary};
use crate::services::auth_service;
use crate::utils::constants::graphql_url;

const TRAIL_DETAIL_QUERY: &str = r#"
query ($trailID: Int!) {
    trailDetails(trailID: $trailID) {
        id
        name
        prop
        city
        state
        description
        isOpen
        altitudeChange
        distance
        fee
        image
        suggestedEquipment { equipmentTypeID { equType } }
        tags { tag }
        avgDifficulty
        avgEnjoyability
    }
    expertReviews(trailID: $trailID) {
        hiker { id user { username } }
        review
        difficulty
        enjoyability
        date
    }
    recentHikers(trailID: $trailID) {
        hiker { id user { username } }
    }
}"#;

const SEARCH_TRAILS_QUERY: &str = r#"
query ($search: String) {
    trails(search: $search) {
        id
        name
        prop
        city
        state
    }
}"#;

const MOST_RECENT_HIKE_QUERY: &str = r#"
query ($trailID: Int!) {
    hikerMostRecentHikeOnTrail(trailID: $trailID) {
        date
        checkOutDate
    }
}"#;

const CHECK_IN_MUTATION: &str = r#"
mutation ($trailID: Int!) {
    checkIn(trailID: $trailID) {
        hike { id }
        date
    }
}"#;

const CHECK_OUT_MUTATION: &str = r#"
mutation ($trailID: Int!) {
    checkOut(trailID: $trailID) {
        hike { id }
    }
}"#;

/// GraphQL API client - communication only (stateless)
#[derive(Clone)]
pub struct ApiClient {
    endpoint: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            endpoint: graphql_url(),
        }
    }

    /// Trail detail bundle: details + expert reviews + recent hikers.
    pub async fn fetch_trail_detail(&self, trail_id: i32) -> Result<TrailDetailData, String> {
        log::info!("🥾 Fetching trail detail for trail: {}", trail_id);

        let data: TrailDetailData = self
            .execute(TRAIL_DETAIL_QUERY, json!({ "trailID": trail_id }))
            .await?;

        log::info!(
            "✅ Trail detail received: {} trail(s), {} reviews, {} recent hikers",
            data.trail_details.len(),
            data.expert_reviews.len(),
            data.recent_hikers.len()
        );

        Ok(data)
    }

    /// Search trails by name, property, city or state.
    pub async fn search_trails(&self, search: &str) -> Result<Vec<TrailSummary>, String> {
        log::info!("🔍 Searching trails: '{}'", search);

        let data: SearchTrailsData = self
            .execute(SEARCH_TRAILS_QUERY, json!({ "search": search }))
            .await?;

        log::info!("✅ Search returned {} trails", data.trails.len());
        Ok(data.trails)
    }

    /// Most recent hike records for the logged-in hiker on this trail,
    /// most recent first (zero or one rows expected).
    pub async fn fetch_most_recent_hike(&self, trail_id: i32) -> Result<Vec<HikeRecord>, String> {
        log::info!("📋 Fetching most recent hike for trail: {}", trail_id);

        let data: MostRecentHikeData = self
            .execute(MOST_RECENT_HIKE_QUERY, json!({ "trailID": trail_id }))
            .await?;

        Ok(data.records)
    }

    /// Check in on a trail. Returns the new hike and its check-in date.
    pub async fn check_in(&self, trail_id: i32) -> Result<CheckInResult, String> {
        log::info!("🟢 Check-in mutation for trail: {}", trail_id);

        let data: CheckInData = self
            .execute(CHECK_IN_MUTATION, json!({ "trailID": trail_id }))
            .await?;

        log::info!("✅ Checked in: hike {} on {}", data.check_in.hike.id, data.check_in.date);
        Ok(data.check_in)
    }

    /// Check out of the open hike on a trail.
    pub async fn check_out(&self, trail_id: i32) -> Result<CheckOutResult, String> {
        log::info!("🔴 Check-out mutation for trail: {}", trail_id);

        let data: CheckOutData = self
            .execute(CHECK_OUT_MUTATION, json!({ "trailID": trail_id }))
            .await?;

        log::info!("✅ Checked out: hike {}", data.check_out.hike.id);
        Ok(data.check_out)
    }

    /// Execute one GraphQL document and unwrap the response envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, String> {
        let body = json!({ "query": query, "variables": variables });

        let mut request = Request::post(&self.endpoint);
        // JWT-backed identity: attach the stored token when present,
        // anonymous requests simply go out without it
        if let Some(token) = auth_service::auth_token() {
            request = request.header("Authorization", &format!("JWT {}", token));
        }

        let response = request
            .json(&body)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        unwrap_envelope(envelope)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// GraphQL response envelope. `errors` wins over partial `data`.
#[derive(Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

fn unwrap_envelope<T>(envelope: GraphQlResponse<T>) -> Result<T, String> {
    if let Some(errors) = envelope.errors {
        if let Some(first) = errors.first() {
            return Err(format!("GraphQL error: {}", first.message));
        }
    }
    envelope
        .data
        .ok_or_else(|| "GraphQL response had no data".to_string())
}

#[derive(Deserialize)]
pub struct TrailDetailData {
    #[serde(rename = "trailDetails")]
    pub trail_details: Vec<TrailDetail>,
    #[serde(rename = "expertReviews")]
    pub expert_reviews: Vec<ExpertReview>,
    #[serde(rename = "recentHikers")]
    pub recent_hikers: Vec<RecentHiker>,
}

#[derive(Deserialize)]
struct SearchTrailsData {
    trails: Vec<TrailSummary>,
}

#[derive(Deserialize)]
struct MostRecentHikeData {
    #[serde(rename = "hikerMostRecentHikeOnTrail")]
    records: Vec<HikeRecord>,
}

#[derive(Deserialize)]
struct CheckInData {
    #[serde(rename = "checkIn")]
    check_in: CheckInResult,
}

#[derive(Deserialize)]
struct CheckOutData {
    #[serde(rename = "checkOut")]
    check_out: CheckOutResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_errors_is_an_err_even_with_data() {
        let envelope: GraphQlResponse<serde_json::Value> = serde_json::from_str(
            r#"{"data": {"checkIn": null}, "errors": [{"message": "Not logged in."}]}"#,
        )
        .unwrap();

        let result = unwrap_envelope(envelope);
        assert_eq!(result.unwrap_err(), "GraphQL error: Not logged in.");
    }

    #[test]
    fn envelope_without_data_is_an_err() {
        let envelope: GraphQlResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(unwrap_envelope(envelope).is_err());
    }

    #[test]
    fn most_recent_hike_rows_deserialize() {
        let envelope: GraphQlResponse<MostRecentHikeData> = serde_json::from_str(
            r#"{"data": {"hikerMostRecentHikeOnTrail": [
                {"date": "2024-05-01", "checkOutDate": null}
            ]}}"#,
        )
        .unwrap();

        let data = unwrap_envelope(envelope).unwrap();
        assert_eq!(data.records.len(), 1);
        assert!(data.records[0].is_open());
    }

    #[test]
    fn check_in_payload_deserializes() {
        let envelope: GraphQlResponse<CheckInData> = serde_json::from_str(
            r#"{"data": {"checkIn": {"hike": {"id": "42"}, "date": "2024-05-02"}}}"#,
        )
        .unwrap();

        let data = unwrap_envelope(envelope).unwrap();
        assert_eq!(data.check_in.hike.id, "42");
        assert_eq!(data.check_in.date, "2024-05-02");
    }
}
