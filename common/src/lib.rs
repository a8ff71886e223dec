//! Types shared between the dashboard frontend and anything else that speaks
//! to the job search & resume matching service.
//!
//! - `model`: payloads the service returns (postings, resume references,
//!   match results, saved-file listings).
//! - `requests`: payloads the dashboard sends, with the client-side checks
//!   that run before a request leaves the browser.
//! - `api`: the fixed service origin and its endpoint paths.
//! - `error`: the failure taxonomy surfaced to the user.

pub mod api;
pub mod error;
pub mod model;
pub mod requests;
