use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::ApplicantProfile;
use super::evaluation::ExternalEstimate;
use super::service::{AdmissionsService, AdmissionsServiceError, ExternalPredictor};

/// Evaluation payload: the profile fields at the top level plus an optional
/// pre-computed model estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(flatten)]
    pub profile: ApplicantProfile,
    #[serde(default)]
    pub external_estimate: Option<ExternalEstimate>,
}

/// Router builder exposing evaluation and reference-data endpoints.
pub fn admissions_router<P>(service: Arc<AdmissionsService<P>>) -> Router
where
    P: ExternalPredictor + 'static,
{
    Router::new()
        .route("/api/v1/admissions/evaluate", post(evaluate_handler::<P>))
        .route("/api/v1/admissions/schools", get(schools_handler::<P>))
        .route(
            "/api/v1/admissions/schools/:name",
            get(school_handler::<P>),
        )
        .route(
            "/api/v1/admissions/ap-subjects",
            get(ap_subjects_handler::<P>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<P>(
    State(service): State<Arc<AdmissionsService<P>>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response
where
    P: ExternalPredictor + 'static,
{
    let result = service.evaluate(&request.profile, request.external_estimate);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn schools_handler<P>(
    State(service): State<Arc<AdmissionsService<P>>>,
) -> Response
where
    P: ExternalPredictor + 'static,
{
    let schools = service.schools();
    let payload = json!({
        "count": schools.len(),
        "schools": schools,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn school_handler<P>(
    State(service): State<Arc<AdmissionsService<P>>>,
    Path(name): Path<String>,
) -> Response
where
    P: ExternalPredictor + 'static,
{
    match service.school(&name) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error @ AdmissionsServiceError::UnknownSchool(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn ap_subjects_handler<P>(
    State(service): State<Arc<AdmissionsService<P>>>,
) -> Response
where
    P: ExternalPredictor + 'static,
{
    let payload = json!({
        "ap_subjects": service.ap_subjects(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
