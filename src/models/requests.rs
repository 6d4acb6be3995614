use crate::models::domain::{CandidateProfile, TraitProfile};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score a single trait dimension
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreDimensionRequest {
    #[validate(length(min = 1))]
    pub dimension: String,
    pub value1: f64,
    pub value2: f64,
    #[serde(default)]
    #[serde(alias = "adventure_type", rename = "adventureType")]
    pub adventure_type: Option<String>,
}

/// Request to compare two full trait profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareTraitsRequest {
    pub traits: TraitProfile,
    #[serde(alias = "target_traits", rename = "targetTraits")]
    pub target_traits: TraitProfile,
    #[serde(default)]
    #[serde(alias = "adventure_type", rename = "adventureType")]
    pub adventure_type: Option<String>,
}

/// Request to rank candidate companions for a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindCompanionsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub traits: TraitProfile,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default)]
    #[serde(alias = "adventure_type", rename = "adventureType")]
    pub adventure_type: Option<String>,
    #[serde(default)]
    pub limit: Option<u16>,
}
