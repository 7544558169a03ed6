//! persona-core
//!
//! Pure domain types and storage key conventions.
//! No scoring logic and no AWS dependency. This is the shared vocabulary
//! of the Persona assessments.

pub mod error;
pub mod models;
pub mod session_keys;
