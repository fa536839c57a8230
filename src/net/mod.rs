//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the transport seam, `api` builds and interprets requests,
//! `endpoints` names the backend paths, `error` classifies failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod types;
