//! HTTP surface for the response envelope and pagination helpers.
//!
//! Exposes the building blocks (config, state, error handling, response
//! rendering, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
