use crate::core::{score_dimension_by_name, Matcher, ScoringError};
use crate::models::{
    AdventureType, CompareTraitsRequest, CompareTraitsResponse, DimensionScoreResponse,
    ErrorResponse, FindCompanionsRequest, FindCompanionsResponse, HealthResponse,
    ScoreDimensionRequest, TraitDimension,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility/dimension", web::post().to(score_dimension))
        .route("/compatibility/compare", web::post().to(compare_traits))
        .route("/compatibility/match", web::post().to(find_companions));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    // No backing services to probe; the engine is pure computation
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn invalid_trait_value_response(err: ScoringError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid trait value".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Score a single trait dimension
///
/// POST /api/v1/compatibility/dimension
///
/// Request body:
/// ```json
/// {
///   "dimension": "risk",
///   "value1": 80,
///   "value2": 85,
///   "adventureType": "extreme-sports"
/// }
/// ```
///
/// An unrecognized dimension scores as neutral 0.5 rather than failing,
/// so older service deployments tolerate new quiz dimensions.
async fn score_dimension(req: web::Json<ScoreDimensionRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for dimension request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if TraitDimension::parse(&req.dimension).is_none() {
        tracing::debug!(
            "Unknown trait dimension '{}', scoring as neutral",
            req.dimension
        );
    }

    let score = match score_dimension_by_name(
        &req.dimension,
        req.value1,
        req.value2,
        req.adventure_type.as_deref(),
    ) {
        Ok(score) => score,
        Err(e) => {
            tracing::info!("Rejected dimension request: {}", e);
            return invalid_trait_value_response(e);
        }
    };

    HttpResponse::Ok().json(DimensionScoreResponse {
        dimension: req.dimension.clone(),
        score,
        adventure_type: req.adventure_type.clone(),
    })
}

/// Compare two full trait profiles
///
/// POST /api/v1/compatibility/compare
///
/// Request body:
/// ```json
/// {
///   "traits": {"social": 60, "adventure": 70, "planning": 40, "risk": 55},
///   "targetTraits": {"social": 65, "adventure": 80, "planning": 55, "risk": 50},
///   "adventureType": "budget-backpacking"
/// }
/// ```
async fn compare_traits(
    state: web::Data<AppState>,
    req: web::Json<CompareTraitsRequest>,
) -> impl Responder {
    let adventure_type = req.adventure_type.as_deref().and_then(AdventureType::parse);

    let breakdown = match state
        .matcher
        .compare(&req.traits, &req.target_traits, adventure_type)
    {
        Ok(breakdown) => breakdown,
        Err(e) => {
            tracing::info!("Rejected compare request: {}", e);
            return invalid_trait_value_response(e);
        }
    };

    tracing::debug!(
        "Compared profiles (adventureType: {:?}): overall {:.3}",
        adventure_type,
        breakdown.overall
    );

    HttpResponse::Ok().json(CompareTraitsResponse {
        overall: breakdown.overall,
        dimensions: breakdown.dimensions,
        adventure_type: adventure_type.map(|t| t.as_str().to_string()),
    })
}

/// Rank candidate companions for a user's trait profile
///
/// POST /api/v1/compatibility/match
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "traits": {"social": 60, "adventure": 70, "planning": 40, "risk": 55},
///   "candidates": [{"userId": "string", "traits": {...}}],
///   "adventureType": "extreme-sports",
///   "limit": 20
/// }
/// ```
async fn find_companions(
    state: web::Data<AppState>,
    req: web::Json<FindCompanionsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;
    let adventure_type = req.adventure_type.as_deref().and_then(AdventureType::parse);

    tracing::info!(
        "Finding companions for user: {}, candidates: {}, limit: {}",
        req.user_id,
        req.candidates.len(),
        limit
    );

    let result = state.matcher.find_companions(
        &req.traits,
        req.candidates.clone(),
        adventure_type,
        limit,
    );

    let skipped = result.total_candidates - result.matches.len();
    if skipped > 0 {
        tracing::debug!(
            "Dropped {} candidates for {} (below minimum score or invalid traits)",
            skipped,
            req.user_id
        );
    }

    let response = FindCompanionsResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        request_id: uuid::Uuid::new_v4().to_string(),
    };

    tracing::info!(
        "Returning {} companions for user {} (from {} candidates)",
        response.matches.len(),
        req.user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_match_request_deserializes_aliases() {
        let json = r#"{
            "user_id": "u1",
            "traits": {"social": 60, "adventure": 70, "planning": 40, "risk": 55},
            "candidates": [],
            "adventure_type": "luxury-travel"
        }"#;

        let req: FindCompanionsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.adventure_type.as_deref(), Some("luxury-travel"));
        assert_eq!(req.limit, None);
    }
}
