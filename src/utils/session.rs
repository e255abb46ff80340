// src/utils/session.rs

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request, header},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "survey_session";

/// Identifier of the respondent's session, injected by `session_middleware`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

/// Extracts the session id from the `Cookie` headers, if present and valid.
pub fn session_from_cookies(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Axum Middleware: Session.
///
/// Reads the `survey_session` cookie and injects `SessionId` into the request
/// extensions for handlers to use. Requests without a usable cookie start a
/// new session, and the response carries the `Set-Cookie` for it.
pub async fn session_middleware(mut req: Request<Body>, next: Next) -> Response {
    let (id, is_new) = match session_from_cookies(req.headers()) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };

    req.extensions_mut().insert(SessionId(id));
    let mut response = next.run(req).await;

    if is_new {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Failed to build session cookie: {:?}", e),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_session_among_other_cookies() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}; lang=en")).unwrap(),
        );

        assert_eq!(session_from_cookies(&headers), Some(id));
    }

    #[test]
    fn ignores_missing_or_garbled_cookie() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_from_cookies(&headers), None);

        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("survey_session=not-a-uuid"),
        );
        assert_eq!(session_from_cookies(&headers), None);
    }
}
