//! Wander Algo - Trait compatibility scoring service for the Wander travel app
//!
//! This library provides the compatibility scoring engine used to match
//! travel companions: piecewise scoring curves over the four personality
//! dimensions from the travel quiz, adventure-type reweighting for the risk
//! dimension, and weighted aggregation into an overall match score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::{score_dimension, score_dimension_by_name, Matcher, ScoringError, NEUTRAL_SCORE};
pub use self::models::{
    AdventureType, CandidateProfile, CompatibilityBreakdown, DimensionScores, DimensionWeights,
    ScoredCompanion, TraitDimension, TraitProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let score = score_dimension(TraitDimension::Social, 20.0, 20.0, None).unwrap();
        assert_eq!(score, 1.0);
    }
}
