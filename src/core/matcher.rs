use crate::core::scoring::{score_dimension, ScoringError};
use crate::models::{
    AdventureType, CandidateProfile, CompatibilityBreakdown, DimensionScores, DimensionWeights,
    ScoredCompanion, TraitDimension, TraitProfile,
};

/// Result of ranking a candidate pool
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCompanion>,
    pub total_candidates: usize,
}

/// Aggregates per-dimension compatibility scores into an overall match
/// score and ranks candidate companions.
///
/// # Pipeline
/// 1. Score each of the four dimensions for the pair
/// 2. Combine them with the configured weights (normalized over their sum)
/// 3. Drop candidates below the minimum overall score
/// 4. Sort by score, truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: DimensionWeights,
    min_score: f64,
}

impl Matcher {
    pub fn new(weights: DimensionWeights, min_score: f64) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: DimensionWeights::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    /// Compare two trait profiles.
    ///
    /// Returns the per-dimension scores plus the weighted overall score in
    /// [0.0, 1.0]. A non-finite trait value on either side fails the whole
    /// comparison rather than producing a partial breakdown.
    pub fn compare(
        &self,
        profile: &TraitProfile,
        other: &TraitProfile,
        adventure_type: Option<AdventureType>,
    ) -> Result<CompatibilityBreakdown, ScoringError> {
        let dimensions = DimensionScores {
            social: score_dimension(
                TraitDimension::Social,
                profile.social,
                other.social,
                adventure_type,
            )?,
            adventure: score_dimension(
                TraitDimension::Adventure,
                profile.adventure,
                other.adventure,
                adventure_type,
            )?,
            planning: score_dimension(
                TraitDimension::Planning,
                profile.planning,
                other.planning,
                adventure_type,
            )?,
            risk: score_dimension(
                TraitDimension::Risk,
                profile.risk,
                other.risk,
                adventure_type,
            )?,
        };

        Ok(CompatibilityBreakdown {
            overall: self.weighted_overall(&dimensions),
            dimensions,
        })
    }

    /// Rank candidate companions for a profile.
    ///
    /// Candidates with non-finite trait values are skipped, candidates
    /// below the minimum overall score are dropped, and the survivors are
    /// sorted by score descending with user id as the tiebreaker.
    pub fn find_companions(
        &self,
        profile: &TraitProfile,
        candidates: Vec<CandidateProfile>,
        adventure_type: Option<AdventureType>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredCompanion> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let breakdown = self
                    .compare(profile, &candidate.traits, adventure_type)
                    .ok()?;

                if breakdown.overall >= self.min_score {
                    Some(ScoredCompanion {
                        user_id: candidate.user_id,
                        overall_score: breakdown.overall,
                        dimensions: breakdown.dimensions,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }

    /// Weighted mean of the four dimension scores.
    ///
    /// Weights are normalized over their sum, so a config whose weights do
    /// not add up to 1.0 still yields an overall in [0.0, 1.0]. An all-zero
    /// weight config falls back to a plain mean.
    fn weighted_overall(&self, scores: &DimensionScores) -> f64 {
        let sum = self.weights.sum();
        if sum <= f64::EPSILON {
            let mean = TraitDimension::ALL
                .iter()
                .map(|&d| scores.get(d))
                .sum::<f64>()
                / TraitDimension::ALL.len() as f64;
            return mean.clamp(0.0, 1.0);
        }

        let weighted = TraitDimension::ALL
            .iter()
            .map(|&d| scores.get(d) * self.weights.get(d))
            .sum::<f64>();

        (weighted / sum).clamp(0.0, 1.0)
    }
}

const DEFAULT_MIN_SCORE: f64 = 0.05;

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
