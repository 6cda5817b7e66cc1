//! Error type shared by the service client and the flows built on it.

/// Failure talking to the auth/database service.
///
/// `Rejected` displays the service's own message unchanged so the login and
/// password pages can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("no active session")]
    NoSession,
    #[error("profile lookup returned {0} rows")]
    AmbiguousProfile(usize),
    #[error("auth service is not available during server rendering")]
    Unavailable,
}

impl AuthError {
    /// `true` when the service answered and refused, as opposed to the
    /// request never completing.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
