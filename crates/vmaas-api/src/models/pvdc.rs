use serde::{Deserialize, Serialize};

use super::cluster::{ClusterPrototype, ClusterSummary};
use super::common::PvdcStatus;

/// Provider virtual data center: a resource pool within a director site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pvdc {
    pub id: Option<String>,
    pub href: Option<String>,
    pub name: Option<String>,
    /// Physical data center hosting this PVDC (e.g. `dal10`).
    pub data_center_name: Option<String>,
    pub status: Option<PvdcStatus>,
    #[serde(default)]
    pub clusters: Vec<ClusterSummary>,
    #[serde(default)]
    pub provider_types: Vec<PvdcProviderType>,
}

/// Billing model a PVDC offers to VDCs (`paygo`, `on_demand`, `reserved`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvdcProviderType {
    pub name: Option<String>,
}

/// PVDC to create, inside a director site order or on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvdcPrototype {
    pub name: String,
    pub data_center_name: String,
    pub clusters: Vec<ClusterPrototype>,
}

impl PvdcPrototype {
    pub fn new(
        name: impl Into<String>,
        data_center_name: impl Into<String>,
        clusters: Vec<ClusterPrototype>,
    ) -> Self {
        Self {
            name: name.into(),
            data_center_name: data_center_name.into(),
            clusters,
        }
    }
}

/// From `GET /director_sites/{site_id}/pvdcs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvdcCollection {
    #[serde(default)]
    pub pvdcs: Vec<Pvdc>,
}
