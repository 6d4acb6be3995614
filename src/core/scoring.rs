use crate::core::weights::adventure_type_weight;
use crate::models::{AdventureType, TraitDimension};
use thiserror::Error;

/// Score returned when a wire-format dimension name is not recognized.
///
/// Unknown dimension names resolve to this neutral value instead of an
/// error so that adding a new quiz dimension does not break older
/// deployments of this service. See [`score_dimension_by_name`].
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Errors from the compatibility engine
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoringError {
    #[error("trait value is not a finite number: {0}")]
    InvalidTraitValue(f64),
}

/// Score one trait dimension for a pair of 0-100 trait values.
///
/// Only the absolute difference between the two values matters, so the
/// result is symmetric in `value1`/`value2`, and out-of-range inputs fall
/// into the curve's last bucket rather than failing. The adventure type
/// multiplier applies to the risk dimension only; the weighted result is
/// clamped back into [0.0, 1.0].
pub fn score_dimension(
    dimension: TraitDimension,
    value1: f64,
    value2: f64,
    adventure_type: Option<AdventureType>,
) -> Result<f64, ScoringError> {
    if !value1.is_finite() {
        return Err(ScoringError::InvalidTraitValue(value1));
    }
    if !value2.is_finite() {
        return Err(ScoringError::InvalidTraitValue(value2));
    }

    let diff = (value1 - value2).abs();

    let score = match dimension {
        TraitDimension::Social => social_curve(diff),
        TraitDimension::Adventure => adventure_curve(diff),
        TraitDimension::Planning => planning_curve(diff),
        TraitDimension::Risk => {
            let weight = adventure_type_weight(adventure_type, TraitDimension::Risk);
            (risk_curve(diff) * weight).clamp(0.0, 1.0)
        }
    };

    Ok(score)
}

/// String-keyed entry point used by the HTTP layer.
///
/// A dimension name that is not one of `social`, `adventure`, `planning`,
/// `risk` scores as [`NEUTRAL_SCORE`] (0.5) rather than an error. The
/// adventure type tag gets the same forgiving treatment: unrecognized tags
/// resolve to a neutral weight of 1.0.
pub fn score_dimension_by_name(
    dimension: &str,
    value1: f64,
    value2: f64,
    adventure_type: Option<&str>,
) -> Result<f64, ScoringError> {
    let Some(dimension) = TraitDimension::parse(dimension) else {
        // Still reject junk values before falling back to neutral
        if !value1.is_finite() {
            return Err(ScoringError::InvalidTraitValue(value1));
        }
        if !value2.is_finite() {
            return Err(ScoringError::InvalidTraitValue(value2));
        }
        return Ok(NEUTRAL_SCORE);
    };

    let adventure_type = adventure_type.and_then(AdventureType::parse);
    score_dimension(dimension, value1, value2, adventure_type)
}

/// Social curve: smaller difference is strictly better
#[inline]
fn social_curve(diff: f64) -> f64 {
    if diff <= 10.0 {
        1.0
    } else if diff <= 25.0 {
        0.85
    } else if diff <= 40.0 {
        0.65
    } else if diff <= 60.0 {
        0.4
    } else {
        0.2
    }
}

/// Adventure curve. A small spread (6-15) outscores near-identical values;
/// past that the curve degrades with distance like the others.
#[inline]
fn adventure_curve(diff: f64) -> f64 {
    if diff <= 5.0 {
        0.85
    } else if diff <= 15.0 {
        0.9
    } else if diff <= 30.0 {
        0.75
    } else if diff <= 50.0 {
        0.5
    } else {
        0.25
    }
}

/// Planning curve. Same shape as adventure: a little contrast in planning
/// style (9-20) scores above identical styles (0-8).
#[inline]
fn planning_curve(diff: f64) -> f64 {
    if diff <= 8.0 {
        0.8
    } else if diff <= 20.0 {
        0.9
    } else if diff <= 35.0 {
        0.7
    } else if diff <= 55.0 {
        0.45
    } else {
        0.2
    }
}

/// Risk base curve, before the adventure type multiplier
#[inline]
fn risk_curve(diff: f64) -> f64 {
    if diff <= 10.0 {
        0.95
    } else if diff <= 25.0 {
        0.8
    } else if diff <= 40.0 {
        0.6
    } else if diff <= 60.0 {
        0.35
    } else {
        0.15
    }
}
