use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::admissions::admissions_router;

fn evaluation_payload(school: &str, round: &str) -> Value {
    json!({
        "gpa_unweighted": 3.95,
        "gpa_by_year": { "9th": 3.9, "10th": 3.95, "11th": 4.0 },
        "sat_score": 1580,
        "ap_courses": [
            { "subject": "AP Calculus BC", "score": 5 },
            { "subject": "AP Computer Science A", "score": 5 }
        ],
        "curriculum_difficulty": "very_high",
        "extracurriculars": [
            { "name": "Robotics Team", "role": "Captain" }
        ],
        "competitions": [
            { "name": "USA Computing Olympiad", "level": "National" }
        ],
        "lor_quality": 4,
        "essay_quality": 4,
        "country": "United States",
        "target_school": school,
        "target_major": "Computer Science",
        "application_round": round
    })
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload")))
        .expect("request")
}

#[tokio::test]
async fn evaluate_route_returns_full_result() {
    let router = admissions_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/admissions/evaluate",
            &evaluation_payload("Duke University", "ED"),
        ))
        .await
        .expect("response");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["decision"].is_string());
    let probability = body["admission_probability"].as_f64().expect("probability");
    assert!((0.01..=0.95).contains(&probability));
    assert_eq!(
        body["application_round_impact"]["round"],
        "Early Decision (ED)"
    );
    assert_eq!(body["application_round_impact"]["multiplier"], 3.0);
    assert!(body["score_breakdown"]["major_alignment"].is_number());
    assert!(body.get("probability_blend").is_none());
}

#[tokio::test]
async fn evaluate_route_blends_supplied_estimate() {
    let router = admissions_router(service());
    let mut payload = evaluation_payload("MIT", "Regular Decision (RD)");
    payload["external_estimate"] = json!({ "neural_network": 0.6, "gradient_boosting": 0.5 });

    let response = router
        .oneshot(post_json("/api/v1/admissions/evaluate", &payload))
        .await
        .expect("response");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["probability_blend"]["method"], "full_ensemble");
}

#[tokio::test]
async fn evaluate_route_reports_unknown_school_as_result() {
    let router = admissions_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/admissions/evaluate",
            &evaluation_payload("Not A Real University", "RD"),
        ))
        .await
        .expect("response");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decision"], "Unknown");
    assert_eq!(body["admission_probability"], 0.0);
    assert!(body["score_breakdown"].is_null());
}

#[tokio::test]
async fn evaluate_route_rejects_malformed_payload() {
    let router = admissions_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/admissions/evaluate",
            &json!({ "gpa_unweighted": "high" }),
        ))
        .await
        .expect("response");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn schools_route_lists_sorted_names() {
    let router = admissions_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/admissions/schools")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 53);
    let names: Vec<&str> = body["schools"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn school_route_returns_record_or_not_found() {
    let router = admissions_router(service());

    let found = router
        .clone()
        .oneshot(
            Request::get("/api/v1/admissions/schools/Duke%20University")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let (status, body) = json_body(found).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selectivity_tier"], "most_competitive");

    let missing = router
        .oneshot(
            Request::get("/api/v1/admissions/schools/Hogwarts")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let (status, body) = json_body(missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "school 'Hogwarts' not found");
}

#[tokio::test]
async fn ap_subjects_route_lists_reference_subjects() {
    let router = admissions_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/admissions/ap-subjects")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let (status, body) = json_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ap_subjects"].as_array().map(Vec::len), Some(38));
}
