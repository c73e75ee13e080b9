use super::types::{ErrorResponse, HealthResponse, SyllabusResponse};
use crate::{
    Error,
    tutor::{AskRequest, TutorResponse, TutorService},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub tutor: Arc<TutorService>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<TutorResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .tutor
        .ask(request)
        .await
        .map(Json)
        .map_err(|e| error_response(&e))
}

pub async fn syllabus(State(state): State<AppState>) -> Json<SyllabusResponse> {
    let syllabus = state.tutor.syllabus();
    Json(SyllabusResponse {
        class_levels: syllabus.class_levels().to_vec(),
        subjects: syllabus
            .subjects()
            .map(|subject| {
                (
                    subject.to_string(),
                    syllabus.chapters(subject).unwrap_or_default().to_vec(),
                )
            })
            .collect(),
    })
}

fn error_response(e: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        error!("Failed to answer question: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let detail = match e {
        Error::Validation(v) => v.to_string(),
        other => other.to_string(),
    };

    (
        status,
        Json(ErrorResponse {
            error: e.reason().to_string(),
            detail,
        }),
    )
}
