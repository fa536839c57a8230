//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and reactive-runtime concerns from page
//! logic so the decision parts stay testable off the browser.

pub mod auth;
#[cfg(feature = "csr")]
pub mod files;
pub mod identity;
pub mod outcome;
pub mod use_api;
