//! Application-level response codes.
//!
//! A [`Code`] travels alongside the HTTP status in every envelope so that
//! clients can branch on a stable, framework-independent value.

use serde::{Deserialize, Serialize};

/// Enumerated application status, serialized as `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
    Ok,
    BadRequest,
    NotAuthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    RequestTimeout,
    InternalServerError,
    NotImplemented,
}

impl Code {
    /// Wire representation, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::BadRequest => "BAD_REQUEST",
            Code::NotAuthorized => "NOT_AUTHORIZED",
            Code::Forbidden => "FORBIDDEN",
            Code::NotFound => "NOT_FOUND",
            Code::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Code::RequestTimeout => "REQUEST_TIMEOUT",
            Code::InternalServerError => "INTERNAL_SERVER_ERROR",
            Code::NotImplemented => "NOT_IMPLEMENTED",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
