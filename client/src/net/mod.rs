//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the HTTP transport, `auth_service` layers login/session semantics
//! on top of it, and `types` defines the request/response schema.

pub mod api;
pub mod auth_service;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
