use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::ClusterStatus;
use super::json_patch::PatchFields;

/// File share capacity per IOPS tier, in GB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileShares {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_point_two_iops: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_two_iops: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_four_iops: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_ten_iops: Option<i64>,
}

/// Backing storage of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Nfs,
    Vsan,
    #[serde(other)]
    Unknown,
}

/// Cluster to create as part of a PVDC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPrototype {
    pub name: String,
    pub host_count: i64,
    /// Host profile id, see `list_director_site_host_profiles`.
    pub host_profile: String,
    pub file_shares: FileShares,
}

impl ClusterPrototype {
    pub fn new(
        name: impl Into<String>,
        host_count: i64,
        host_profile: impl Into<String>,
        file_shares: FileShares,
    ) -> Self {
        Self {
            name: name.into(),
            host_count,
            host_profile: host_profile.into(),
            file_shares,
        }
    }
}

/// Cluster as it appears in listings and delete responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: Option<String>,
    pub href: Option<String>,
    pub name: Option<String>,
    pub host_count: Option<i64>,
    pub host_profile: Option<String>,
    pub data_center_name: Option<String>,
    pub status: Option<ClusterStatus>,
    pub storage_type: Option<StorageType>,
    pub file_shares: Option<FileShares>,
}

/// Full cluster detail, from `GET .../clusters/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: Option<String>,
    pub href: Option<String>,
    pub name: Option<String>,
    pub host_count: Option<i64>,
    pub host_profile: Option<String>,
    pub data_center_name: Option<String>,
    pub status: Option<ClusterStatus>,
    pub storage_type: Option<StorageType>,
    pub file_shares: Option<FileShares>,
    pub instance_ordered: Option<DateTime<Utc>>,
    pub instance_created: Option<DateTime<Utc>>,
    pub billing_plan: Option<String>,
}

/// Response to a cluster update: the cluster plus the tracking id of the
/// asynchronous operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedCluster {
    #[serde(flatten)]
    pub cluster: Cluster,
    pub operation_id: Option<String>,
}

/// From `GET .../pvdcs/{pvdc_id}/clusters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterCollection {
    #[serde(default)]
    pub clusters: Vec<ClusterSummary>,
}

// ── Patch ───────────────────────────────────────────────────────────

/// The mutable part of a cluster.
///
/// Take a snapshot with `ClusterPatch::from(&cluster)`, change it, then
/// feed both to [`diff`](super::json_patch::diff) to get the JSON Patch
/// for `update_director_sites_pvdcs_cluster`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPatch {
    pub host_count: Option<i64>,
    pub file_shares: Option<FileShares>,
}

impl From<&Cluster> for ClusterPatch {
    fn from(cluster: &Cluster) -> Self {
        Self {
            host_count: cluster.host_count,
            file_shares: cluster.file_shares.clone(),
        }
    }
}

impl PatchFields for ClusterPatch {
    fn patch_fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("/host_count", self.host_count.map(Value::from)),
            (
                "/file_shares",
                self.file_shares
                    .as_ref()
                    .and_then(|shares| serde_json::to_value(shares).ok()),
            ),
        ]
    }
}
