//! psysurvey-core — Question loading, survey engine, and scoring.
//!
//! This crate holds the survey state machine and everything it needs:
//! the question model, the line-oriented question file loader, the
//! selection session used by presentation layers, and the final report.

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod session;
