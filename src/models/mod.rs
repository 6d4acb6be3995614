// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AdventureType, CandidateProfile, CompatibilityBreakdown, DimensionScores, DimensionWeights,
    ScoredCompanion, TraitDimension, TraitProfile,
};
pub use requests::{CompareTraitsRequest, FindCompanionsRequest, ScoreDimensionRequest};
pub use responses::{
    CompareTraitsResponse, DimensionScoreResponse, ErrorResponse, FindCompanionsResponse,
    HealthResponse,
};
