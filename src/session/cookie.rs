//! Helpers for reading and writing the session cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

use crate::session::SessionId;

/// The name of the cookie holding the session ID.
pub const SESSION_COOKIE: &str = "sessionId";

/// How long the session cookie remains valid for (seven days).
pub const SESSION_COOKIE_DURATION: Duration = Duration::days(7);

/// Read the session ID from the `sessionId` cookie in `jar`.
///
/// Returns `None` if the cookie is absent or its value is not a valid UUID.
pub fn get_session_id(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Add a `sessionId` cookie for `session_id` to `jar` and return the updated
/// jar.
///
/// The cookie is scoped to the root path and expires after
/// [SESSION_COOKIE_DURATION].
pub fn set_session_cookie(jar: CookieJar, session_id: SessionId) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, session_id.to_string()))
            .path("/")
            .max_age(SESSION_COOKIE_DURATION)
            .build(),
    )
}

#[cfg(test)]
mod session_cookie_tests {
    use axum_extra::extract::cookie::{Cookie, CookieJar};
    use time::Duration;

    use crate::session::SessionId;

    use super::{SESSION_COOKIE, get_session_id, set_session_cookie};

    #[test]
    fn set_session_cookie_sets_path_and_max_age() {
        let session_id = SessionId::new();

        let jar = set_session_cookie(CookieJar::new(), session_id);

        let cookie = jar.get(SESSION_COOKIE).expect("expected session cookie");
        assert_eq!(cookie.value(), session_id.to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn get_session_id_round_trips() {
        let session_id = SessionId::new();
        let jar = set_session_cookie(CookieJar::new(), session_id);

        assert_eq!(get_session_id(&jar), Some(session_id));
    }

    #[test]
    fn get_session_id_returns_none_without_cookie() {
        assert_eq!(get_session_id(&CookieJar::new()), None);
    }

    #[test]
    fn get_session_id_returns_none_for_malformed_value() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "FOOBAR"));

        assert_eq!(get_session_id(&jar), None);
    }
}
