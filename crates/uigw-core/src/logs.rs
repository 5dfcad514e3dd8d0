//! # Log Entries
//!
//! The shape of a single log line as served by `GET /logs/`. Keys keep the
//! frontend's camelCase spelling, including the upper-case `objectID`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::object::{ObjectId, ObjectType};

/// Severity of a log entry, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A log entry about one infrastructure object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogsItem {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub level: Level,
    pub text: String,
    #[serde(rename = "objectType")]
    pub object_type: ObjectType,
    #[serde(rename = "objectID")]
    #[schema(value_type = String)]
    pub object_id: ObjectId,
}
