use serde::{Deserialize, Serialize};

/// Lifecycle state of a director site. PVDCs and clusters report the same
/// set of states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectorSiteStatus {
    Creating,
    ReadyToUse,
    Updating,
    Failed,
    Deleting,
    Deleted,
    /// A status this client version does not know about.
    #[serde(other)]
    Unknown,
}

/// Resource group a resource belongs to, as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroupReference {
    pub id: Option<String>,
    pub name: Option<String>,
    pub crn: Option<String>,
}

/// Resource group selector used when creating resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroupIdentity {
    pub id: String,
}

impl ResourceGroupIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Why a resource is in its current state (usually a failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReason {
    pub code: Option<String>,
    pub message: Option<String>,
    pub more_info: Option<String>,
}

/// PVDC lifecycle state.
pub type PvdcStatus = DirectorSiteStatus;

/// Cluster lifecycle state.
pub type ClusterStatus = DirectorSiteStatus;
