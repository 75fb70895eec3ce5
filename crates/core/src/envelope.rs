//! The uniform JSON response envelope.
//!
//! Every response body has the shape
//!
//! ```text
//! { "code": "OK", "message": "ok", "status": 200, "data": ..., "pagination": {...}? }
//! ```
//!
//! An [`Envelope`] is a plain value. Turning it into an HTTP response, or
//! short-circuiting a handler with it, is the caller's decision.

use serde::Serialize;
use serde_json::Value;

use crate::code::Code;
use crate::error::CoreError;
use crate::pagination::PaginationDescriptor;
use crate::projection::Projectable;

/// A fully-formed response body plus the HTTP status it travels with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    code: Code,
    message: String,
    status: u16,
    data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationDescriptor>,
}

impl Envelope {
    /// Build an envelope from an arbitrary status/code/message triple.
    ///
    /// Fails with [`CoreError::InvalidStatus`] when `status` is outside
    /// the HTTP range `100..=599`.
    pub fn new(
        status: u16,
        code: Code,
        message: impl Into<String>,
        data: Value,
    ) -> Result<Self, CoreError> {
        if !(100..=599).contains(&status) {
            return Err(CoreError::InvalidStatus(status));
        }
        Ok(Self::fixed(status, code, message, data))
    }

    fn fixed(status: u16, code: Code, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            status,
            data,
            pagination: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_code(mut self, code: Code) -> Self {
        self.code = code;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationDescriptor) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn pagination(&self) -> Option<&PaginationDescriptor> {
        self.pagination.as_ref()
    }
}

/// Payload accepted by [`ok`].
pub enum Data<'a> {
    /// Anything already representable as JSON.
    Value(Value),
    /// A domain record; requires an explicit field list.
    Record(&'a dyn Projectable),
}

impl<'a> Data<'a> {
    /// Convert any `Serialize` value into a payload.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, CoreError> {
        Ok(Data::Value(serde_json::to_value(value)?))
    }

    pub fn record(record: &'a dyn Projectable) -> Self {
        Data::Record(record)
    }

    fn resolve(self, fields: Option<&[&str]>) -> Result<Value, CoreError> {
        match (self, fields) {
            (Data::Value(value), _) => Ok(value),
            (Data::Record(_), None) => Err(CoreError::SerializationNotSupported),
            (Data::Record(record), Some(fields)) => Ok(Value::Object(record.project(fields)?)),
        }
    }
}

impl From<Value> for Data<'_> {
    fn from(value: Value) -> Self {
        Data::Value(value)
    }
}

// ---------------------------------------------------------------------------
// Convenience builders
// ---------------------------------------------------------------------------

/// `200 OK` carrying `data`.
///
/// Records must come with `fields`; plain JSON ignores it.
pub fn ok(data: Data<'_>, fields: Option<&[&str]>) -> Result<Envelope, CoreError> {
    let data = data.resolve(fields)?;
    Ok(Envelope::fixed(200, Code::Ok, "ok", data))
}

pub fn bad_request() -> Envelope {
    Envelope::fixed(400, Code::BadRequest, "bad request", Value::Null)
}

pub fn not_authorized() -> Envelope {
    Envelope::fixed(401, Code::NotAuthorized, "not authorized", Value::Null)
}

pub fn forbidden() -> Envelope {
    Envelope::fixed(403, Code::Forbidden, "forbidden", Value::Null)
}

pub fn not_found() -> Envelope {
    Envelope::fixed(404, Code::NotFound, "not found", Value::Null)
}

/// Same status and code as [`not_found`], for requests that matched no route.
pub fn invalid_endpoint() -> Envelope {
    Envelope::fixed(404, Code::NotFound, "invalid endpoint", Value::Null)
}

pub fn method_not_allowed() -> Envelope {
    Envelope::fixed(405, Code::MethodNotAllowed, "method not allowed", Value::Null)
}

pub fn request_timeout() -> Envelope {
    Envelope::fixed(408, Code::RequestTimeout, "request timeout", Value::Null)
}

pub fn internal_server_error() -> Envelope {
    Envelope::fixed(
        500,
        Code::InternalServerError,
        "internal server error",
        Value::Null,
    )
}

pub fn not_implemented() -> Envelope {
    Envelope::fixed(501, Code::NotImplemented, "not implemented", Value::Null)
}
