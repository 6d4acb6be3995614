// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod weights;

pub use matcher::{MatchResult, Matcher};
pub use scoring::{score_dimension, score_dimension_by_name, ScoringError, NEUTRAL_SCORE};
pub use weights::{adventure_type_weight, weights_for, TypeWeights};
