//! Session error types.

use lindagrades_core::ExtractError;
use thiserror::Error;

/// Errors that can occur while talking to the LINDA portal.
///
/// None of these are retried; each one ends the current call.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Records or the session token were requested before a successful log-in.
    #[error("not logged in")]
    NotAuthenticated,

    /// The log-in response lacked the logged-in marker.
    ///
    /// Wrong credentials and an unexpected page layout look the same here.
    #[error("log-in does not appear to be successful (maybe wrong credentials?)")]
    AuthenticationFailed,

    /// The overview page carried no `asi` token.
    #[error("could not find the session token (asi) on the overview page")]
    TokenNotFound,

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The grade page came back without rows and without the logged-in marker.
    #[error("session expired: the grade page is no longer logged in")]
    SessionExpired,

    /// The grade page could not be turned into records.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl SessionError {
    /// Returns `true` for failures of the HTTP exchange itself.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SessionError::HttpStatus { .. } | SessionError::Timeout(_) | SessionError::Network(_)
        )
    }
}
