use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use persona_core::models::report::AssessmentReport;
use persona_core::models::session::Session;
use persona_core::session_keys;
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::store::SessionStore;

/// Sessions and reports as JSON objects in an S3 bucket.
pub struct S3SessionStore {
    client: Client,
    config: StorageConfig,
}

impl S3SessionStore {
    pub fn new(client: Client, config: StorageConfig) -> Result<Self, StorageError> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// Build an S3 client from the config's region and profile.
    pub async fn connect(config: StorageConfig) -> Result<Self, StorageError> {
        let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.region {
            builder = builder.region(aws_config::Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile_name {
            builder = builder.profile_name(profile);
        }
        let sdk_config = builder.load().await;
        Self::new(Client::new(&sdk_config), config)
    }

    /// `Ok(None)` when the key does not exist.
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.config.bucket)
            .key(self.config.key(key))
            .send()
            .await;

        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(StorageError::GetObject(err.to_string()));
            }
        };

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetObject(e.to_string()))?
            .into_bytes();
        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(value)?;
        let full_key = self.config.key(key);
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&full_key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

        info!("stored s3://{}/{}", self.config.bucket, full_key);
        Ok(())
    }

    /// List keys under a prefix, following continuation tokens.
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = self
                .client
                .list_objects_v2()
                .bucket(&self.config.bucket)
                .prefix(self.config.key(prefix));

            if let Some(token) = &continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

            for obj in resp.contents() {
                if let Some(key) = obj.key() {
                    keys.push(key.to_string());
                }
            }

            if resp.is_truncated() == Some(true) {
                continuation_token = resp.next_continuation_token().map(|s| s.to_string());
            } else {
                break;
            }
        }

        Ok(keys)
    }
}

impl SessionStore for S3SessionStore {
    async fn load(&self, instrument_id: &str, id: Uuid) -> Result<Session, StorageError> {
        self.get_json(&session_keys::session(instrument_id, id))
            .await?
            .ok_or_else(|| StorageError::SessionNotFound {
                instrument_id: instrument_id.to_string(),
                id,
            })
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.put_json(&session_keys::session(&session.instrument_id, session.id), session)
            .await
    }

    async fn delete(&self, instrument_id: &str, id: Uuid) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(self.config.key(&session_keys::session(instrument_id, id)))
            .send()
            .await
            .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;
        Ok(())
    }

    async fn list(&self, instrument_id: &str) -> Result<Vec<Uuid>, StorageError> {
        let keys = self
            .list_keys(&session_keys::instrument_sessions_prefix(instrument_id))
            .await?;
        Ok(keys
            .iter()
            .filter_map(|k| session_keys::session_id_from_key(k))
            .collect())
    }

    async fn save_report(
        &self,
        session_id: Uuid,
        report: &AssessmentReport,
    ) -> Result<(), StorageError> {
        self.put_json(&session_keys::report(&report.instrument_id, session_id), report)
            .await
    }

    async fn load_report(
        &self,
        instrument_id: &str,
        session_id: Uuid,
    ) -> Result<AssessmentReport, StorageError> {
        self.get_json(&session_keys::report(instrument_id, session_id))
            .await?
            .ok_or_else(|| StorageError::ReportNotFound {
                instrument_id: instrument_id.to_string(),
                id: session_id,
            })
    }
}
