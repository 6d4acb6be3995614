use crate::models::{AdventureType, TraitDimension};

/// Per-dimension weight multipliers for one adventure type
#[derive(Debug, Clone, Copy)]
pub struct TypeWeights {
    pub risk: f64,
    pub adventure: f64,
    pub planning: f64,
    pub social: f64,
}

impl TypeWeights {
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Risk => self.risk,
            TraitDimension::Adventure => self.adventure,
            TraitDimension::Planning => self.planning,
            TraitDimension::Social => self.social,
        }
    }
}

/// Neutral weights applied when no adventure type is in play
pub const NEUTRAL_WEIGHTS: TypeWeights = TypeWeights {
    risk: 1.0,
    adventure: 1.0,
    planning: 1.0,
    social: 1.0,
};

const EXTREME_SPORTS: TypeWeights = TypeWeights {
    risk: 1.3,
    adventure: 1.2,
    planning: 0.9,
    social: 1.0,
};

const CULTURAL_IMMERSION: TypeWeights = TypeWeights {
    risk: 0.8,
    adventure: 0.9,
    planning: 1.2,
    social: 1.1,
};

const LUXURY_TRAVEL: TypeWeights = TypeWeights {
    risk: 0.7,
    adventure: 0.8,
    planning: 1.3,
    social: 1.0,
};

const BUDGET_BACKPACKING: TypeWeights = TypeWeights {
    risk: 1.1,
    adventure: 1.1,
    planning: 0.8,
    social: 1.2,
};

const FAMILY_FRIENDLY: TypeWeights = TypeWeights {
    risk: 0.6,
    adventure: 0.7,
    planning: 1.4,
    social: 1.0,
};

const WELLNESS_RETREAT: TypeWeights = TypeWeights {
    risk: 0.5,
    adventure: 0.6,
    planning: 1.1,
    social: 0.9,
};

/// Look up the weight table for an adventure type
pub fn weights_for(adventure_type: AdventureType) -> &'static TypeWeights {
    match adventure_type {
        AdventureType::ExtremeSports => &EXTREME_SPORTS,
        AdventureType::CulturalImmersion => &CULTURAL_IMMERSION,
        AdventureType::LuxuryTravel => &LUXURY_TRAVEL,
        AdventureType::BudgetBackpacking => &BUDGET_BACKPACKING,
        AdventureType::FamilyFriendly => &FAMILY_FRIENDLY,
        AdventureType::WellnessRetreat => &WELLNESS_RETREAT,
    }
}

/// Weight multiplier for an (adventure type, dimension) pair.
///
/// An absent adventure type resolves to the neutral weight 1.0. Callers
/// that parse wire tags feed unrecognized strings through here as None,
/// so unknown tags also land on 1.0 rather than an error.
#[inline]
pub fn adventure_type_weight(
    adventure_type: Option<AdventureType>,
    dimension: TraitDimension,
) -> f64 {
    match adventure_type {
        Some(t) => weights_for(t).get(dimension),
        None => NEUTRAL_WEIGHTS.get(dimension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_weight_lookups() {
        assert_eq!(
            adventure_type_weight(Some(AdventureType::ExtremeSports), TraitDimension::Risk),
            1.3
        );
        assert_eq!(
            adventure_type_weight(Some(AdventureType::FamilyFriendly), TraitDimension::Risk),
            0.6
        );
    }

    #[test]
    fn test_unknown_tag_is_neutral() {
        // Unrecognized wire tags parse to None and fall back to 1.0
        let parsed = AdventureType::parse("unknown-type");
        assert_eq!(parsed, None);
        assert_eq!(adventure_type_weight(parsed, TraitDimension::Risk), 1.0);
    }

    #[test]
    fn test_absent_tag_is_neutral_for_all_dimensions() {
        for dim in TraitDimension::ALL {
            assert_eq!(adventure_type_weight(None, dim), 1.0);
        }
    }

    #[test]
    fn test_table_covers_all_dimensions() {
        assert_eq!(
            adventure_type_weight(Some(AdventureType::LuxuryTravel), TraitDimension::Planning),
            1.3
        );
        assert_eq!(
            adventure_type_weight(
                Some(AdventureType::BudgetBackpacking),
                TraitDimension::Social
            ),
            1.2
        );
        assert_eq!(
            adventure_type_weight(
                Some(AdventureType::WellnessRetreat),
                TraitDimension::Adventure
            ),
            0.6
        );
    }
}
