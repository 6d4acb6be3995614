use crate::models::domain::{DimensionScores, ScoredCompanion};
use serde::{Deserialize, Serialize};

/// Response for the single-dimension scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionScoreResponse {
    pub dimension: String,
    pub score: f64,
    #[serde(rename = "adventureType")]
    pub adventure_type: Option<String>,
}

/// Response for the profile comparison endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareTraitsResponse {
    pub overall: f64,
    pub dimensions: DimensionScores,
    #[serde(rename = "adventureType")]
    pub adventure_type: Option<String>,
}

/// Response for the companion ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindCompanionsResponse {
    pub matches: Vec<ScoredCompanion>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
