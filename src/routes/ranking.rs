use actix_web::{web, HttpResponse, Responder};
use std::path::PathBuf;
use validator::Validate;
use crate::core::{RankError, Ranker};
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse, SaveRequest, SaveResponse};
use crate::services::{StorageError, SubmissionStore};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub store: SubmissionStore,
    pub index_path: PathBuf,
}

/// Configure all ranking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/save", web::post().to(save_submission))
        .route("/rank", web::post().to(rank_points));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Serve the index page
///
/// GET /
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    match tokio::fs::read_to_string(&state.index_path).await {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::warn!("Failed to read index page {}: {}", state.index_path.display(), e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: "Index page is not available".to_string(),
                status_code: 404,
            })
        }
    }
}

/// Persist submitted points and criteria
///
/// POST /save (also POST /api/v1/save)
///
/// Request body:
/// ```json
/// {
///   "points": [{"latitude": 0.0, "longitude": 0.0}],
///   "criteria": ["school", "park"]
/// }
/// ```
pub async fn save_submission(
    state: web::Data<AppState>,
    req: web::Json<SaveRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for save request: field_errors={:?}", errors);
        return validation_failed(&errors);
    }

    let SaveRequest { points, criteria } = req.into_inner();
    let store = state.store.clone();

    let saved = web::block(move || store.save(&points, &criteria))
        .await
        .map_err(|e| StorageError::BlockingError(e.to_string()))
        .and_then(|result| result);

    match saved {
        Ok(saved) => HttpResponse::Ok().json(SaveResponse {
            success: true,
            filename: saved.points_filename(),
            criteria_file: saved.criteria_filename(),
        }),
        Err(e) => {
            tracing::error!("Failed to save submission: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save submission".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Rank candidate points
///
/// POST /api/v1/rank
///
/// Request body:
/// ```json
/// {
///   "points": [{"latitude": 0.0, "longitude": 0.0}],
///   "criteria": ["school", "park"],
///   "criterionLocations": {"school": {"latitude": 0.0, "longitude": 0.0}, "park": null},
///   "comparisons": {"school_park": "school"}
/// }
/// ```
async fn rank_points(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("rank", %request_id);
    let _guard = span.enter();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return validation_failed(&errors);
    }

    let RankRequest {
        points,
        criteria,
        criterion_locations,
        comparisons,
    } = req.into_inner();

    tracing::info!(
        "Ranking {} points over {} criteria with {} comparisons",
        points.len(),
        criteria.len(),
        comparisons.len()
    );

    let comparisons = comparisons.into_records();

    match state
        .ranker
        .rank_points(&points, &criteria, &criterion_locations, &comparisons)
    {
        Ok(ranking) => {
            tracing::info!("Ranking complete: {:?}", ranking.ranks);
            HttpResponse::Ok().json(RankResponse::from(ranking))
        }
        Err(e) => rank_failed(&e),
    }
}

fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn rank_failed(err: &RankError) -> HttpResponse {
    if err.is_invalid_input() {
        tracing::info!("Rejected rank request: {}", err);
        HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_input".to_string(),
            message: err.to_string(),
            status_code: 400,
        })
    } else {
        tracing::error!("Ranking failed: {}", err);
        HttpResponse::InternalServerError().json(ErrorResponse {
            error: "ranking_failed".to_string(),
            message: err.to_string(),
            status_code: 500,
        })
    }
}
