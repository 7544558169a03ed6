use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Where sessions and reports are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    /// AWS region; the default provider chain decides when absent.
    #[serde(default)]
    pub region: Option<String>,
    /// Named AWS profile. Absent = default credential chain.
    #[serde(default)]
    pub profile_name: Option<String>,
    /// Prepended to every key, e.g. "staging/".
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl StorageConfig {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: None,
            profile_name: None,
            key_prefix: None,
        }
    }

    /// Read `PERSONA_BUCKET`, `PERSONA_REGION`, `PERSONA_AWS_PROFILE`, and
    /// `PERSONA_KEY_PREFIX`.
    pub fn from_env() -> Result<Self, StorageError> {
        let bucket = std::env::var("PERSONA_BUCKET")
            .map_err(|_| StorageError::Config("PERSONA_BUCKET is not set".to_string()))?;
        let optional = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Ok(Self {
            bucket,
            region: optional("PERSONA_REGION"),
            profile_name: optional("PERSONA_AWS_PROFILE"),
            key_prefix: optional("PERSONA_KEY_PREFIX"),
        })
    }

    /// Full object key for a logical key.
    pub fn key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) if !prefix.is_empty() => {
                format!("{}/{key}", prefix.trim_end_matches('/'))
            }
            _ => key.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), StorageError> {
        if self.bucket.trim().is_empty() {
            return Err(StorageError::Config("bucket name is empty".to_string()));
        }
        Ok(())
    }
}
