//! # Infrastructure Objects
//!
//! The kinds of infrastructure object a log entry can point at, and the
//! opaque identifier that names one instance.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of infrastructure object a log entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    GlaciationNode,
    KubernetesNode,
    Workload,
    Network,
    Dataset,
    Telemetry,
}

impl ObjectType {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GlaciationNode => "GLACIATION_NODE",
            Self::KubernetesNode => "KUBERNETES_NODE",
            Self::Workload => "WORKLOAD",
            Self::Network => "NETWORK",
            Self::Dataset => "DATASET",
            Self::Telemetry => "TELEMETRY",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a single infrastructure object.
///
/// Opaque to the gateway: backends issue these and the frontend echoes
/// them back. Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
