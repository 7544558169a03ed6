use std::collections::BTreeMap;

use persona_core::models::report::AssessmentReport;
use persona_core::models::session::Session;
use persona_core::session_keys;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::SessionStore;

/// In-process store for tests and single-node deployments. Values are kept
/// as serialized JSON under the same keys the S3 store uses.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects (sessions and reports).
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    async fn load(&self, instrument_id: &str, id: Uuid) -> Result<Session, StorageError> {
        let key = session_keys::session(instrument_id, id);
        let objects = self.objects.read().await;
        let body = objects
            .get(&key)
            .ok_or_else(|| StorageError::SessionNotFound {
                instrument_id: instrument_id.to_string(),
                id,
            })?;
        Ok(serde_json::from_slice(body)?)
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        let key = session_keys::session(&session.instrument_id, session.id);
        let body = serde_json::to_vec(session)?;
        self.objects.write().await.insert(key, body);
        Ok(())
    }

    async fn delete(&self, instrument_id: &str, id: Uuid) -> Result<(), StorageError> {
        let key = session_keys::session(instrument_id, id);
        self.objects.write().await.remove(&key);
        Ok(())
    }

    async fn list(&self, instrument_id: &str) -> Result<Vec<Uuid>, StorageError> {
        let prefix = session_keys::instrument_sessions_prefix(instrument_id);
        let objects = self.objects.read().await;
        Ok(objects
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .filter_map(|k| session_keys::session_id_from_key(k))
            .collect())
    }

    async fn save_report(
        &self,
        session_id: Uuid,
        report: &AssessmentReport,
    ) -> Result<(), StorageError> {
        let key = session_keys::report(&report.instrument_id, session_id);
        let body = serde_json::to_vec(report)?;
        self.objects.write().await.insert(key, body);
        Ok(())
    }

    async fn load_report(
        &self,
        instrument_id: &str,
        session_id: Uuid,
    ) -> Result<AssessmentReport, StorageError> {
        let key = session_keys::report(instrument_id, session_id);
        let objects = self.objects.read().await;
        let body = objects
            .get(&key)
            .ok_or_else(|| StorageError::ReportNotFound {
                instrument_id: instrument_id.to_string(),
                id: session_id,
            })?;
        Ok(serde_json::from_slice(body)?)
    }
}
