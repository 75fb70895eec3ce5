use axum::response::{IntoResponse, Response};
use respond_core::envelope::{bad_request, internal_server_error, Envelope};
use respond_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a standard envelope, so clients see the same
/// JSON shape for failures as for successes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure raised by `respond_core` (pagination limits, projection,
    /// parameter parsing).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Stop handling the request and answer with this envelope.
    ///
    /// Produced by `?` on any `Result<_, Envelope>`:
    ///
    /// ```ignore
    /// let item = find(id).ok_or_else(not_found)?;
    /// ```
    #[error("request aborted with {} ({})", .0.code(), .0.message())]
    Respond(Envelope),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<Envelope> for AppError {
    fn from(envelope: Envelope) -> Self {
        AppError::Respond(envelope)
    }
}

impl AppError {
    /// The envelope this error is answered with.
    ///
    /// Malformed query parameters are the client's fault and echo the
    /// detail. Everything else from `respond_core` is a server-side
    /// misconfiguration: it is logged and the body is sanitized.
    pub fn into_envelope(self) -> Envelope {
        match self {
            AppError::Respond(envelope) => envelope,
            AppError::Core(err @ CoreError::InvalidParameter { .. }) => {
                bad_request().with_message(err.to_string())
            }
            AppError::Core(err) => {
                tracing::error!(error = %err, "Internal core error");
                internal_server_error()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ApiResponse(self.into_envelope()).into_response()
    }
}
