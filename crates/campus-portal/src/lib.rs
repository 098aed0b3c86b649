//! Student sign-up portal library.
//!
//! The `signup` module carries the intake workflow (form description,
//! validation, persistence, and registration notices) behind trait seams so
//! the API service can wire real or in-memory infrastructure. The remaining
//! modules provide configuration, telemetry, and the bootstrap error funnel.

pub mod config;
pub mod error;
pub mod signup;
pub mod telemetry;
