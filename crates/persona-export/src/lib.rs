//! persona-export
//!
//! Insight text for scored reports, rendered from Tera templates keyed by
//! profile type.

pub mod error;
pub mod render;
pub mod templates;
