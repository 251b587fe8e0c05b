//! Signed-in session record and its typed parse.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow persists the backend's user record as JSON text; every
//! navigation re-reads it. Parsing is total: a value that does not decode to a
//! record with a string `role` is reported as malformed, never as a panic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Role string that unlocks admin-only routes.
pub const ADMIN_ROLE: &str = "admin";

/// The persisted "logged in user" record.
///
/// Only `role` decides whether a record parses. The optional string fields
/// read as `None` when the backend stores another JSON type there, and fields
/// beyond these are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub token: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

impl Session {
    /// A session carrying only a role.
    pub fn with_role(role: impl Into<String>) -> Self {
        Self { role: role.into(), id: None, username: None, email: None, token: None }
    }

    /// Exact, case-sensitive comparison against [`ADMIN_ROLE`].
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Parse a stored session value.
///
/// Returns `None` for anything that is not a JSON object with a string `role`,
/// including the literal `null`.
pub fn parse_session(raw: &str) -> Option<Session> {
    serde_json::from_str::<Option<Session>>(raw).ok().flatten()
}

/// What the session store held at the moment of a navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing stored.
    #[default]
    Anonymous,
    /// Something stored, but it does not decode to a [`Session`].
    Malformed,
    Authenticated(Session),
}

impl SessionState {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Anonymous,
            Some(raw) => parse_session(raw).map_or(Self::Malformed, Self::Authenticated),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous | Self::Malformed => None,
        }
    }

    /// True only for a well-formed session; malformed values count as absent.
    pub fn is_present(&self) -> bool {
        self.session().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session().is_some_and(Session::is_admin)
    }
}
