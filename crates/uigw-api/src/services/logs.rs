//! # Logs Service
//!
//! Log entries come from the telemetry backends. Until those are wired in,
//! [`StubLogSource`] serves a fixed pair of entries so the frontend has a
//! stable contract to build against.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uigw_core::{Level, LogsItem, ObjectId, ObjectType};
use uuid::Uuid;

/// Failure to obtain log entries from a backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("log source unavailable: {0}")]
    Unavailable(String),
}

/// A backend that can list log entries.
pub trait LogSource: Send + Sync {
    /// All entries, in the order the backend reports them.
    fn list(&self) -> Result<Vec<LogsItem>, SourceError>;

    /// Whether the backend can currently answer `list`.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Fixed in-memory entries about a single Kubernetes node.
#[derive(Debug, Clone, Default)]
pub struct StubLogSource;

impl StubLogSource {
    const NODE_ID: &'static str = "94bc5906-b08e-4952-86ee-0f0bbad79000";
    /// 2024-03-08T04:00:00Z
    const FIRST_ENTRY_AT: i64 = 1_709_870_400;

    fn entries() -> Vec<LogsItem> {
        vec![
            LogsItem {
                id: Uuid::from_u128(0xac740dbd_441e_4ecf_b0fc_95963b5a8551),
                created: at(Self::FIRST_ENTRY_AT),
                level: Level::Info,
                text: "Node is starting...".to_string(),
                object_type: ObjectType::KubernetesNode,
                object_id: ObjectId::new(Self::NODE_ID),
            },
            LogsItem {
                id: Uuid::from_u128(0x27f43277_a952_4813_90fa_f761fc9247d5),
                created: at(Self::FIRST_ENTRY_AT + 60),
                level: Level::Error,
                text: "Unknown error".to_string(),
                object_type: ObjectType::KubernetesNode,
                object_id: ObjectId::new(Self::NODE_ID),
            },
        ]
    }
}

fn at(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}

impl LogSource for StubLogSource {
    fn list(&self) -> Result<Vec<LogsItem>, SourceError> {
        Ok(Self::entries())
    }
}

/// Cloneable handle over a shared [`LogSource`].
#[derive(Clone)]
pub struct LogsService {
    source: Arc<dyn LogSource>,
}

impl std::fmt::Debug for LogsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogsService").finish_non_exhaustive()
    }
}

impl LogsService {
    pub fn new(source: Arc<dyn LogSource>) -> Self {
        Self { source }
    }

    /// Service backed by [`StubLogSource`].
    pub fn stub() -> Self {
        Self::new(Arc::new(StubLogSource))
    }

    pub fn get_list(&self) -> Result<Vec<LogsItem>, SourceError> {
        let items = self.source.list()?;
        tracing::debug!(count = items.len(), "listed log entries");
        for item in &items {
            tracing::trace!(
                level = %item.level,
                object_type = %item.object_type,
                object_id = %item.object_id,
                "log entry"
            );
        }
        Ok(items)
    }

    pub fn is_ready(&self) -> bool {
        self.source.is_ready()
    }
}
