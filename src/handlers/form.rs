// src/handlers/form.rs

//! Browser-facing pages: the render pass, the submit event and the reset event.

use axum::{
    Extension,
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::{
    error::AppError,
    models::survey::RawSurveyFields,
    session::{FormController, SessionRegistry, SurveySession},
    utils::session::SessionId,
    views::html,
};

const SUBMITTED_NOTICE: &str = "✅ Survey submitted successfully!";

/// Render pass: the form while collecting, the summary once submitted.
pub async fn show_page(
    State(sessions): State<SessionRegistry>,
    State(controller): State<FormController>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> Html<String> {
    let session = sessions.snapshot(id).await;

    Html(html::render(&controller.render(&session, None, None), None))
}

/// Submit event from the HTML form.
///
/// On failure the form comes back with the respondent's answers still filled
/// in and the reason shown above it.
pub async fn submit_form(
    State(sessions): State<SessionRegistry>,
    State(controller): State<FormController>,
    Extension(SessionId(id)): Extension<SessionId>,
    body: Bytes,
) -> Response {
    let raw = match parse_form(&body) {
        Ok(raw) => raw,
        Err(err) => {
            let session = sessions.snapshot(id).await;
            return error_page(&controller, &session, None, err);
        }
    };

    let session = sessions.get_or_create(id).await;
    let mut session = session.lock().await;

    match controller.submit(&mut session, raw.clone()).await {
        Ok(()) => {
            let page = controller.render(&session, None, None);
            Html(html::render(&page, Some(SUBMITTED_NOTICE))).into_response()
        }
        Err(err) => error_page(&controller, &session, Some(&raw), err.into()),
    }
}

/// Reset event. Always lands back on an empty form.
pub async fn reset_form(
    State(sessions): State<SessionRegistry>,
    State(controller): State<FormController>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> Redirect {
    if let Some(session) = sessions.get(id).await {
        controller.reset(&mut *session.lock().await);
    }

    Redirect::to("/")
}

fn parse_form(body: &[u8]) -> Result<RawSurveyFields, AppError> {
    let raw = RawSurveyFields::from_urlencoded(body)?;
    raw.validate()?;
    Ok(raw)
}

fn error_page(
    controller: &FormController,
    session: &SurveySession,
    draft: Option<&RawSurveyFields>,
    err: AppError,
) -> Response {
    match &err {
        AppError::InternalServerError(msg) => tracing::error!("Survey submission failed: {}", msg),
        other => tracing::info!("Survey submission rejected: {}", other.user_message()),
    }

    let page = controller.render(session, draft, Some(err.user_message()));
    (err.status(), Html(html::render(&page, None))).into_response()
}
