use actix_web::{post, put, web, HttpResponse};
use chrono::Utc;
use secrecy::SecretString;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts::MIN_SOURCE_CHARS,
    errors::{AppError, AppResult},
    handlers::session_handler::load_session,
    models::domain::DifficultyLevel,
    models::dto::request::{AnswerRequest, CredentialRequest, GenerateQuizRequest},
    models::dto::response::SessionView,
    services::grading_service,
};

/// Resolve the source text for generation: pasted text wins, the URL is
/// fetched only when no text was supplied.
async fn resolve_source(state: &AppState, request: &GenerateQuizRequest) -> AppResult<String> {
    if let Some(text) = request.raw_text() {
        return Ok(text.to_string());
    }

    let url = request.url().ok_or_else(|| {
        AppError::ValidationError("Provide a URL or pasted text".to_string())
    })?;
    state.content.fetch_body(url).await
}

/// Generate a new quiz into the session. Success replaces the previous quiz
/// and resets all progress; any failure leaves the session untouched.
#[post("/api/sessions/{id}/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let id = id.into_inner();
    let mut session = load_session(&state, &id).await?;

    let source = resolve_source(&state, &request).await?;
    if source.chars().count() < MIN_SOURCE_CHARS {
        return Err(AppError::InputTooShort(format!(
            "source text must be at least {MIN_SOURCE_CHARS} characters"
        )));
    }

    let level = DifficultyLevel::from_label(request.level.as_deref().unwrap_or_default());
    let quiz = state.generator.generate(&source, level).await?;

    session.install_quiz(quiz);
    state.sessions.save(&id, session.clone()).await?;

    Ok(HttpResponse::Created().json(SessionView::new(&session, None)))
}

/// Begin the timed run; records the start timestamp.
#[post("/api/sessions/{id}/start")]
pub async fn start_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let mut session = load_session(&state, &id).await?;

    session.start(Utc::now())?;
    state.sessions.save(&id, session.clone()).await?;

    Ok(HttpResponse::Ok().json(SessionView::new(&session, None)))
}

/// Record (or overwrite) the answer for one question while timing.
#[put("/api/sessions/{id}/answers")]
pub async fn select_answer(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<AnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let id = id.into_inner();
    let mut session = load_session(&state, &id).await?;

    session.select_answer(request.question_id, request.selected)?;
    state.sessions.save(&id, session.clone()).await?;

    Ok(HttpResponse::Ok().json(SessionView::new(&session, None)))
}

/// Stop the clock, move to Submitted and return the grading report.
/// Unanswered questions grade as incorrect.
#[post("/api/sessions/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    let mut session = load_session(&state, &id).await?;

    session.submit(Utc::now())?;

    let quiz = session
        .quiz
        .as_ref()
        .ok_or_else(|| AppError::InvalidState("no quiz has been generated".to_string()))?;
    let report = grading_service::grade(
        quiz,
        &session.user_answers,
        session.started_at,
        session.submitted_at,
    );

    state.sessions.save(&id, session.clone()).await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Interactive credential entry, the last step of the resolution chain. The
/// key is held in memory for the process lifetime and never persisted.
#[post("/api/credential")]
pub async fn set_credential(
    state: web::Data<AppState>,
    request: web::Json<CredentialRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    state
        .set_credential(SecretString::from(request.api_key))
        .await;
    log::info!("API credential supplied interactively; held in memory only");

    Ok(HttpResponse::NoContent().finish())
}
