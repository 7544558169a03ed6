use std::future::Future;

use persona_core::models::report::AssessmentReport;
use persona_core::models::session::Session;
use uuid::Uuid;

use crate::error::StorageError;

/// Key-value persistence for in-progress sessions and finished reports.
///
/// Injected by callers; the scoring pipeline never sees it.
pub trait SessionStore: Send + Sync {
    fn load(
        &self,
        instrument_id: &str,
        id: Uuid,
    ) -> impl Future<Output = Result<Session, StorageError>> + Send;

    /// Insert or overwrite the session.
    fn save(&self, session: &Session) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove a session. Removing a missing session is not an error.
    fn delete(
        &self,
        instrument_id: &str,
        id: Uuid,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Session ids stored for an instrument.
    fn list(
        &self,
        instrument_id: &str,
    ) -> impl Future<Output = Result<Vec<Uuid>, StorageError>> + Send;

    fn save_report(
        &self,
        session_id: Uuid,
        report: &AssessmentReport,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn load_report(
        &self,
        instrument_id: &str,
        session_id: Uuid,
    ) -> impl Future<Output = Result<AssessmentReport, StorageError>> + Send;
}
