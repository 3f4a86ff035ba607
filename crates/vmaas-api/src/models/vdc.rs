use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::StatusReason;

// ── Enums ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VdcAllocationModel {
    Paygo,
    Reserved,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VdcStatus {
    Creating,
    ReadyToUse,
    Modifying,
    Deleting,
    Deleted,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Tenancy of a VDC's director site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VdcType {
    Dedicated,
    Multitenant,
    #[serde(other)]
    Unknown,
}

// ── VDC ─────────────────────────────────────────────────────────────

/// Virtual data center, from `GET /vdcs/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vdc {
    pub id: Option<String>,
    pub href: Option<String>,
    pub crn: Option<String>,
    pub name: Option<String>,
    pub allocation_model: Option<VdcAllocationModel>,
    /// vCPU reservation, for reserved VDCs.
    pub cpu: Option<i64>,
    /// RAM reservation in GB, for reserved VDCs.
    pub ram: Option<i64>,
    pub director_site: Option<VdcDirectorSiteReference>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Older service versions send these as `errors`.
    #[serde(default, alias = "errors")]
    pub status_reasons: Vec<StatusReason>,
    /// Cloud Director organization name.
    pub org_name: Option<String>,
    pub ordered_at: Option<DateTime<Utc>>,
    pub provisioned_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub status: Option<VdcStatus>,
    #[serde(rename = "type")]
    pub vdc_type: Option<VdcType>,
    pub fast_provisioning_enabled: Option<bool>,
    pub rhel_byol: Option<bool>,
    pub windows_byol: Option<bool>,
}

/// Network edge gateway of a VDC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: Option<String>,
    #[serde(default)]
    pub public_ips: Vec<String>,
    #[serde(default)]
    pub private_ips: Vec<String>,
    /// `medium`, `large` or `extra_large`.
    pub size: Option<String>,
    pub status: Option<String>,
    /// `performance` or `efficiency`.
    #[serde(rename = "type")]
    pub edge_type: Option<String>,
    pub version: Option<String>,
}

/// Where a VDC lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcDirectorSiteReference {
    pub id: Option<String>,
    pub pvdc: Option<VdcPvdcReference>,
    /// Cloud Director console URL.
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcPvdcReference {
    pub id: Option<String>,
    pub provider_type: Option<VdcProviderType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcProviderType {
    pub name: Option<String>,
}

/// From `GET /vdcs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcCollection {
    #[serde(default)]
    pub vdcs: Vec<Vdc>,
}

// ── Prototypes ──────────────────────────────────────────────────────

/// Director site and PVDC a new VDC is placed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcDirectorSitePrototype {
    pub id: String,
    pub pvdc: VdcPvdcPrototype,
}

impl VdcDirectorSitePrototype {
    pub fn new(id: impl Into<String>, pvdc: VdcPvdcPrototype) -> Self {
        Self {
            id: id.into(),
            pvdc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcPvdcPrototype {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<VdcProviderTypePrototype>,
}

impl VdcPvdcPrototype {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider_type: None,
        }
    }

    #[must_use]
    pub fn with_provider_type(mut self, name: impl Into<String>) -> Self {
        self.provider_type = Some(VdcProviderTypePrototype { name: name.into() });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcProviderTypePrototype {
    pub name: String,
}

/// Edge gateway to create with a VDC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdcEdgePrototype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub edge_type: String,
}

impl VdcEdgePrototype {
    pub fn new(edge_type: impl Into<String>) -> Self {
        Self {
            size: None,
            edge_type: edge_type.into(),
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

// ── Patch ───────────────────────────────────────────────────────────

/// Changes to apply to a VDC with `update_vdc`. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VdcPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast_provisioning_enabled: Option<bool>,
}

impl VdcPatch {
    /// The JSON merge-patch object holding the set fields.
    pub fn as_patch(&self) -> Map<String, Value> {
        let mut patch = Map::new();
        if let Some(cpu) = self.cpu {
            patch.insert("cpu".into(), cpu.into());
        }
        if let Some(ram) = self.ram {
            patch.insert("ram".into(), ram.into());
        }
        if let Some(enabled) = self.fast_provisioning_enabled {
            patch.insert("fast_provisioning_enabled".into(), enabled.into());
        }
        patch
    }
}
