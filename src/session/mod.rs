//! Anonymous sessions.
//!
//! There is no session table and no server-side session object: a session is
//! nothing more than the set of transactions sharing a [SessionId], and the
//! id itself lives in the client's `sessionId` cookie.

mod cookie;
mod guard;

#[cfg(test)]
pub(crate) use cookie::SESSION_COOKIE;
pub(crate) use cookie::{get_session_id, set_session_cookie};
pub(crate) use guard::session_guard;

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identifier correlating transactions to an anonymous client session.
///
/// Possession of this value is the only access-control boundary in the
/// application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Mint a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}
