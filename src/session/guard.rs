//! Middleware that gates the read endpoints behind the session cookie.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{Error, session::get_session_id};

/// Middleware function that checks for a `sessionId` cookie.
///
/// If the cookie is missing or does not hold a valid UUID, the request is
/// short-circuited with a 401 response and the inner handler never runs.
/// Otherwise the parsed [SessionId](crate::SessionId) is placed into the
/// request extensions and the request executed normally.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(session_id): Extension<SessionId>` to receive the session ID.
pub async fn session_guard(jar: CookieJar, mut request: Request, next: Next) -> Response {
    let session_id = match get_session_id(&jar) {
        Some(session_id) => session_id,
        None => return Error::Unauthorized.into_response(),
    };

    request.extensions_mut().insert(session_id);

    next.run(request).await
}
