//! persona-storage
//!
//! Session persistence around the scoring pipeline. Callers load a session,
//! score it, and save the report; nothing in here runs during scoring.

pub mod config;
pub mod error;
pub mod memory;
pub mod s3;
pub mod store;
