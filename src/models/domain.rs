use serde::{Deserialize, Serialize};

/// One of the four personality axes scored by the travel quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitDimension {
    Social,
    Adventure,
    Planning,
    Risk,
}

impl TraitDimension {
    /// All dimensions, in the order the quiz reports them
    pub const ALL: [TraitDimension; 4] = [
        TraitDimension::Social,
        TraitDimension::Adventure,
        TraitDimension::Planning,
        TraitDimension::Risk,
    ];

    /// Parse a wire-format dimension name. Returns None for anything
    /// other than the four recognized tags.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "social" => Some(TraitDimension::Social),
            "adventure" => Some(TraitDimension::Adventure),
            "planning" => Some(TraitDimension::Planning),
            "risk" => Some(TraitDimension::Risk),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TraitDimension::Social => "social",
            TraitDimension::Adventure => "adventure",
            TraitDimension::Planning => "planning",
            TraitDimension::Risk => "risk",
        }
    }
}

/// Trip category used to contextually reweight compatibility scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdventureType {
    ExtremeSports,
    CulturalImmersion,
    LuxuryTravel,
    BudgetBackpacking,
    FamilyFriendly,
    WellnessRetreat,
}

impl AdventureType {
    /// Parse a wire-format adventure type tag. Unrecognized tags map to
    /// None, which downstream resolves to a neutral weight of 1.0.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "extreme-sports" => Some(AdventureType::ExtremeSports),
            "cultural-immersion" => Some(AdventureType::CulturalImmersion),
            "luxury-travel" => Some(AdventureType::LuxuryTravel),
            "budget-backpacking" => Some(AdventureType::BudgetBackpacking),
            "family-friendly" => Some(AdventureType::FamilyFriendly),
            "wellness-retreat" => Some(AdventureType::WellnessRetreat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdventureType::ExtremeSports => "extreme-sports",
            AdventureType::CulturalImmersion => "cultural-immersion",
            AdventureType::LuxuryTravel => "luxury-travel",
            AdventureType::BudgetBackpacking => "budget-backpacking",
            AdventureType::FamilyFriendly => "family-friendly",
            AdventureType::WellnessRetreat => "wellness-retreat",
        }
    }
}

/// Quiz results for one person: a normalized 0-100 value per dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraitProfile {
    pub social: f64,
    pub adventure: f64,
    pub planning: f64,
    pub risk: f64,
}

impl TraitProfile {
    pub fn value(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Social => self.social,
            TraitDimension::Adventure => self.adventure,
            TraitDimension::Planning => self.planning,
            TraitDimension::Risk => self.risk,
        }
    }
}

/// A candidate travel companion as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub traits: TraitProfile,
}

/// Per-dimension compatibility scores for one pair of profiles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionScores {
    pub social: f64,
    pub adventure: f64,
    pub planning: f64,
    pub risk: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Social => self.social,
            TraitDimension::Adventure => self.adventure,
            TraitDimension::Planning => self.planning,
            TraitDimension::Risk => self.risk,
        }
    }
}

/// Full comparison result: per-dimension scores plus the weighted overall
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub overall: f64,
    pub dimensions: DimensionScores,
}

/// Scored companion result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCompanion {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    pub dimensions: DimensionScores,
}

/// Aggregation weights applied across the four dimensions
#[derive(Debug, Clone, Copy)]
pub struct DimensionWeights {
    pub social: f64,
    pub adventure: f64,
    pub planning: f64,
    pub risk: f64,
}

impl DimensionWeights {
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Social => self.social,
            TraitDimension::Adventure => self.adventure,
            TraitDimension::Planning => self.planning,
            TraitDimension::Risk => self.risk,
        }
    }

    pub fn sum(&self) -> f64 {
        self.social + self.adventure + self.planning + self.risk
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            social: 0.25,
            adventure: 0.25,
            planning: 0.25,
            risk: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parse_roundtrip() {
        for dim in TraitDimension::ALL {
            assert_eq!(TraitDimension::parse(dim.as_str()), Some(dim));
        }
        assert_eq!(TraitDimension::parse("socail"), None);
        assert_eq!(TraitDimension::parse(""), None);
    }

    #[test]
    fn test_adventure_type_parse() {
        assert_eq!(
            AdventureType::parse("extreme-sports"),
            Some(AdventureType::ExtremeSports)
        );
        assert_eq!(
            AdventureType::parse("wellness-retreat"),
            Some(AdventureType::WellnessRetreat)
        );
        assert_eq!(AdventureType::parse("space-tourism"), None);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = DimensionWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_value_lookup() {
        let profile = TraitProfile {
            social: 10.0,
            adventure: 20.0,
            planning: 30.0,
            risk: 40.0,
        };
        assert_eq!(profile.value(TraitDimension::Social), 10.0);
        assert_eq!(profile.value(TraitDimension::Risk), 40.0);
    }
}
