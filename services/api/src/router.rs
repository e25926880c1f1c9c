//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API and OpenAPI documentation.

use crate::{
    handlers,
    models::{
        AnalysisPayload, AnalysisResponse, BarView, ErrorResponse, GapView, PanelView,
        PriorityLevel, RatingInput, RatingScale, SubjectDetail, SubjectList, SubjectSummary,
        TopicDetail,
    },
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_subjects,
        handlers::get_subject,
        handlers::create_analysis,
        handlers::download_document,
    ),
    components(
        schemas(SubjectList, SubjectSummary, SubjectDetail, TopicDetail, RatingScale, AnalysisPayload, RatingInput, AnalysisResponse, GapView, PanelView, BarView, PriorityLevel, ErrorResponse)
    ),
    tags(
        (name = "Smart Learning Advisor API", description = "Confidence-based study plans")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/subjects", get(handlers::list_subjects))
        .route("/subjects/{subject}", get(handlers::get_subject))
        .route("/analysis", post(handlers::create_analysis))
        .route("/analysis/document", post(handlers::download_document))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
