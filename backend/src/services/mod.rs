//! HTTP surface of the UI host: a health probe plus the embedded frontend bundle.
//! The job search and matching API lives in a separate service.

pub mod assets;
pub mod health;
