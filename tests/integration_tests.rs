// Integration tests for POI Rank

use actix_web::{http::StatusCode, test, web, App};
use poi_rank::core::Ranker;
use poi_rank::models::{RankResponse, SaveResponse};
use poi_rank::routes::{configure_routes, AppState};
use poi_rank::services::SubmissionStore;
use serde_json::{json, Value};
use std::path::Path;

fn app_state(output_dir: &Path) -> AppState {
    AppState {
        ranker: Ranker::default(),
        store: SubmissionStore::new(output_dir),
        index_path: output_dir.join("index.html"),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_rank_single_school_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let req = test::TestRequest::post()
        .uri("/api/v1/rank")
        .set_json(json!({
            "points": [{"lat": 0, "lon": 0}, {"lat": 10, "lon": 10}],
            "criteria": ["school"],
            "criterionLocations": {"school": {"latitude": 0, "longitude": 0}},
            "comparisons": {}
        }))
        .to_request();

    let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.weights, vec![1.0]);
    assert_eq!(resp.ranking, vec![1, 2]);
    assert_eq!(resp.scores[0], 0.0);
    assert!(resp.unlocated_criteria.is_empty());
}

#[actix_web::test]
async fn test_rank_with_keyed_comparisons() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let body = json!({
        "points": [
            {"latitude": 0.0, "longitude": 0.0},
            {"latitude": 0.0, "longitude": 2.0},
            {"latitude": 0.0, "longitude": 1.0}
        ],
        "criteria": ["school", "park"],
        "criterionLocations": {
            "school": {"latitude": 0.0, "longitude": 0.0},
            "park": {"latitude": 0.0, "longitude": 2.0}
        },
        "comparisons": {"school_park": "park"}
    });

    let req = test::TestRequest::post().uri("/api/v1/rank").set_json(&body).to_request();
    let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.weights, vec![0.0, 1.0]);
    assert_eq!(resp.ranking, vec![3, 1, 2]);

    // Same input, same answer
    let req = test::TestRequest::post().uri("/api/v1/rank").set_json(&body).to_request();
    let again: RankResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(again.weights, resp.weights);
    assert_eq!(again.ranking, resp.ranking);
    assert_eq!(again.scores, resp.scores);
}

#[actix_web::test]
async fn test_rank_with_record_comparisons_and_missing_location() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let req = test::TestRequest::post()
        .uri("/api/v1/rank")
        .set_json(json!({
            "points": [{"latitude": 5.0, "longitude": 5.0}, {"latitude": 1.0, "longitude": 1.0}],
            "criteria": ["school", "hospital"],
            "criterionLocations": {"school": {"latitude": 0.0, "longitude": 0.0}, "hospital": null},
            "comparisons": [{"first": "school", "second": "hospital", "outcome": "equal"}]
        }))
        .to_request();

    let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.weights, vec![0.5, 0.5]);
    assert_eq!(resp.ranking, vec![2, 1]);
    assert_eq!(resp.unlocated_criteria, vec!["hospital".to_string()]);
}

#[actix_web::test]
async fn test_rank_rejects_empty_points() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let req = test::TestRequest::post()
        .uri("/api/v1/rank")
        .set_json(json!({"points": [], "criteria": ["school"]}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_input");
}

#[actix_web::test]
async fn test_rank_rejects_out_of_range_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let req = test::TestRequest::post()
        .uri("/api/v1/rank")
        .set_json(json!({
            "points": [{"latitude": 95.0, "longitude": 0.0}],
            "criteria": ["school"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_save_writes_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let req = test::TestRequest::post()
        .uri("/save")
        .set_json(json!({
            "points": [{"latitude": 52.5, "longitude": 13.4}],
            "criteria": ["school", "park"]
        }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    let filename = body["filename"].as_str().unwrap();
    let criteria_file = body["criteria_file"].as_str().unwrap();
    assert!(body.get("criteriaFile").is_none());

    assert!(filename.starts_with("points_") && filename.ends_with(".csv"));
    assert!(criteria_file.starts_with("criteria_") && criteria_file.ends_with(".csv"));
    assert_eq!(filename.trim_start_matches("points_"), criteria_file.trim_start_matches("criteria_"));

    let points_csv = std::fs::read_to_string(dir.path().join(filename)).unwrap();
    assert_eq!(points_csv, "latitude,longitude\n52.5,13.4\n");

    let criteria_csv = std::fs::read_to_string(dir.path().join(criteria_file)).unwrap();
    assert_eq!(criteria_csv, "criteria\nschool\npark\n");
}

#[actix_web::test]
async fn test_save_is_also_served_under_api_scope() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let req = test::TestRequest::post()
        .uri("/api/v1/save")
        .set_json(json!({"points": [], "criteria": ["school"]}))
        .to_request();

    let resp: SaveResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.success);
    assert!(dir.path().join(&resp.criteria_file).exists());
}

#[actix_web::test]
async fn test_health_check() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_app!(app_state(dir.path()));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_index_page() {
    let dir = tempfile::tempdir().unwrap();
    let state = app_state(dir.path());

    let app = init_app!(state.clone());
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    std::fs::write(&state.index_path, "<html>hello</html>").unwrap();
    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "<html>hello</html>".as_bytes());
}
