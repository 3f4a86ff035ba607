use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{DirectorSiteStatus, ResourceGroupReference};
use super::pvdc::Pvdc;

// ── Director sites ──────────────────────────────────────────────────

/// A VMware Cloud Director instance, from `GET /director_sites/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSite {
    pub id: Option<String>,
    pub crn: Option<String>,
    pub href: Option<String>,
    pub name: Option<String>,
    pub status: Option<DirectorSiteStatus>,
    /// When the order was accepted.
    pub instance_ordered: Option<DateTime<Utc>>,
    /// When provisioning finished.
    pub instance_created: Option<DateTime<Utc>>,
    pub resource_group: Option<ResourceGroupReference>,
    #[serde(default)]
    pub pvdcs: Vec<Pvdc>,
    #[serde(default)]
    pub services: Vec<DirectorSiteService>,
    /// Red Hat Enterprise Linux bring-your-own-license.
    pub rhel_byol: Option<bool>,
    /// Windows bring-your-own-license.
    pub windows_byol: Option<bool>,
}

/// Add-on service attached to a director site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSiteService {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<DirectorSiteStatus>,
}

/// Add-on service to enable when creating a director site (e.g. `veeam`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceIdentity {
    pub name: String,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// From `GET /director_sites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSiteCollection {
    #[serde(default)]
    pub director_sites: Vec<DirectorSite>,
}
