//! psysurvey-report — Renders finished survey reports for export.

pub mod html;
