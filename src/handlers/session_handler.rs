use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::domain::{QuizPhase, QuizSession},
    models::dto::response::{SessionCreatedResponse, SessionView},
    services::grading_service,
};

pub(crate) async fn load_session(state: &AppState, id: &Uuid) -> AppResult<QuizSession> {
    state
        .sessions
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
}

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[post("/api/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session_id = state.sessions.create().await?;
    log::info!("created session {session_id}");

    Ok(HttpResponse::Created().json(SessionCreatedResponse { session_id }))
}

/// Current session view. The grading report is derived on demand once the
/// session is submitted; it is never stored.
#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = load_session(&state, &id).await?;

    let report = match (&session.phase, &session.quiz) {
        (QuizPhase::Submitted, Some(quiz)) => Some(grading_service::grade(
            quiz,
            &session.user_answers,
            session.started_at,
            session.submitted_at,
        )),
        _ => None,
    };

    Ok(HttpResponse::Ok().json(SessionView::new(&session, report)))
}
