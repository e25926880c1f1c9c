//! Axum Handlers for the REST API
//!
//! This module contains the logic for handling HTTP requests: browsing the
//! catalog, running an analysis, and downloading the learning plan document.
//! It uses `utoipa` doc comments to generate OpenAPI documentation.

use advisor_core::{
    AnalysisRequest, ConfidenceScore, LookupError, Ratings, analyze,
    document::{MIME_TYPE, render_document},
    summarize,
};
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    models::{
        AnalysisPayload, AnalysisResponse, ErrorResponse, RatingScale, SubjectDetail,
        SubjectList, SubjectSummary,
    },
    state::AppState,
};

pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { message })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Catalog misses surface as 404s with the lookup diagnostic.
fn not_found(err: LookupError) -> ApiError {
    warn!(error = %err, "Catalog lookup failed");
    ApiError::NotFound(err.to_string())
}

/// Validates a payload into a core analysis request.
fn to_request(payload: AnalysisPayload) -> Result<AnalysisRequest, ApiError> {
    if payload.ratings.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one rating is required".to_string(),
        ));
    }
    let mut ratings = Ratings::new();
    for input in payload.ratings {
        let score = ConfidenceScore::new(input.score).map_err(|e| {
            ApiError::BadRequest(format!("Rating for '{}': {}", input.topic, e))
        })?;
        ratings.insert(input.topic, score);
    }
    Ok(AnalysisRequest::new(payload.subject, ratings))
}

/// List every subject with its topics and the rating scale.
#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "Subjects available for analysis", body = SubjectList)
    )
)]
pub async fn list_subjects(State(state): State<Arc<AppState>>) -> Json<SubjectList> {
    Json(SubjectList {
        title: state.config.page_title.clone(),
        subjects: state
            .catalog
            .subjects()
            .iter()
            .map(SubjectSummary::from)
            .collect(),
        scale: RatingScale::default(),
    })
}

/// Get a subject's topics and their key concepts.
#[utoipa::path(
    get,
    path = "/subjects/{subject}",
    responses(
        (status = 200, description = "Subject details", body = SubjectDetail),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    params(
        ("subject" = String, Path, description = "Subject name, e.g. Mathematics")
    )
)]
pub async fn get_subject(
    State(state): State<Arc<AppState>>,
    Path(subject): Path<String>,
) -> Result<Json<SubjectDetail>, ApiError> {
    let subject = state.catalog.subject(&subject).map_err(not_found)?;
    Ok(Json(SubjectDetail::from(subject)))
}

/// Analyze learning gaps and build the study plan views.
#[utoipa::path(
    post,
    path = "/analysis",
    request_body = AnalysisPayload,
    responses(
        (status = 200, description = "Gap analysis, learning plan and chart data", body = AnalysisResponse),
        (status = 400, description = "Invalid ratings", body = ErrorResponse),
        (status = 404, description = "Unknown subject or topic", body = ErrorResponse)
    )
)]
pub async fn create_analysis(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalysisPayload>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let request = to_request(payload)?;
    let analysis = analyze(&state.catalog, &request).map_err(not_found)?;
    let summary = summarize(&analysis);
    Ok(Json(AnalysisResponse::new(
        &summary,
        analysis.plan.file_name(),
    )))
}

/// Download the learning plan as a PDF document.
#[utoipa::path(
    post,
    path = "/analysis/document",
    request_body = AnalysisPayload,
    responses(
        (status = 200, description = "PDF learning plan (application/pdf)"),
        (status = 400, description = "Invalid ratings", body = ErrorResponse),
        (status = 404, description = "Unknown subject or topic", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalysisPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let request = to_request(payload)?;
    let analysis = analyze(&state.catalog, &request).map_err(not_found)?;
    let bytes = render_document(&analysis.plan)?;
    let file_name = analysis.plan.file_name();
    info!(file = %file_name, bytes = bytes.len(), "Serving learning plan document");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}
