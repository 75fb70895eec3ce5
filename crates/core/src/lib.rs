//! Framework-independent building blocks for JSON API responses.
//!
//! - [`envelope`]: the `{code, message, status, data, pagination?}` envelope
//!   and its convenience builders.
//! - [`projection`]: explicit field selection for domain records.
//! - [`pagination`]: page resolution, limits, and windowing.
//! - [`params`]: lenient integer parsing of query parameters.

pub mod code;
pub mod envelope;
pub mod error;
pub mod pagination;
pub mod params;
pub mod projection;
