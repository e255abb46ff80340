// src/handlers/api.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::survey::RawSurveyFields,
    session::{FormController, SessionPhase, SessionRegistry, SurveySession},
    utils::session::SessionId,
    views::{SummaryView, schema::FormSchema},
};

/// Declarative description of every field: widget, bounds, defaults, choices.
pub async fn get_schema() -> impl IntoResponse {
    Json(FormSchema::movie_survey())
}

/// Returns the caller's session: its phase and, once submitted, the record
/// and where it was stored.
pub async fn get_state(
    State(sessions): State<SessionRegistry>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> impl IntoResponse {
    Json(sessions.snapshot(id).await)
}

/// Submits raw field values.
///
/// * 400 when a value is outside its widget's bounds.
/// * 422 when the name or the genre selection is missing.
/// * 409 when this session already submitted.
/// * 500 when the record could not be written.
pub async fn submit_survey(
    State(sessions): State<SessionRegistry>,
    State(controller): State<FormController>,
    Extension(SessionId(id)): Extension<SessionId>,
    Json(raw): Json<RawSurveyFields>,
) -> Result<impl IntoResponse, AppError> {
    raw.validate()?;

    let session = sessions.get_or_create(id).await;
    let mut session = session.lock().await;

    controller.submit(&mut session, raw).await.map_err(|e| {
        tracing::warn!("Survey submission via API failed: {}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(session.clone())))
}

pub async fn reset_survey(
    State(sessions): State<SessionRegistry>,
    State(controller): State<FormController>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> impl IntoResponse {
    let Some(session) = sessions.get(id).await else {
        return Json(SurveySession::new());
    };
    let mut session = session.lock().await;
    controller.reset(&mut session);
    Json(session.clone())
}

/// Summary lines and chart data for the submitted record.
pub async fn get_summary(
    State(sessions): State<SessionRegistry>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    let session = sessions.snapshot(id).await;

    match session.phase() {
        SessionPhase::Submitted { record, location } => Ok(Json(SummaryView::new(record, location))),
        SessionPhase::Collecting => Err(AppError::NotFound(
            "No survey has been submitted in this session".to_string(),
        )),
    }
}

/// Reads the submitted record back from disk.
pub async fn get_stored(
    State(sessions): State<SessionRegistry>,
    State(controller): State<FormController>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    let session = sessions.snapshot(id).await;

    let record = controller
        .stored_record(&session)
        .await
        .ok_or_else(|| {
            AppError::NotFound("No survey has been submitted in this session".to_string())
        })??;

    Ok(Json(record))
}
