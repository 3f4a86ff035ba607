use std::collections::HashMap;

use vmaas_core::Error;
use vmaas_core::validate::{Validate, required};

use super::header_options;
use crate::models::{PvdcPrototype, ResourceGroupIdentity, ServiceIdentity};

// ── Create ──────────────────────────────────────────────────────────

/// Options for [`VmwareV1::create_director_sites`](crate::VmwareV1::create_director_sites).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDirectorSitesOptions {
    /// Name of the director site. Required.
    pub name: Option<String>,
    /// Resource group to bill the site to. Required.
    pub resource_group: Option<ResourceGroupIdentity>,
    /// PVDCs to create with the site. Required.
    pub pvdcs: Option<Vec<PvdcPrototype>>,
    /// Add-on services to enable.
    pub services: Option<Vec<ServiceIdentity>>,
    pub rhel_byol: Option<bool>,
    pub windows_byol: Option<bool>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateDirectorSitesOptions {
    pub fn new(
        name: impl Into<String>,
        resource_group: ResourceGroupIdentity,
        pvdcs: Vec<PvdcPrototype>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            resource_group: Some(resource_group),
            pvdcs: Some(pvdcs),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_resource_group(mut self, resource_group: ResourceGroupIdentity) -> Self {
        self.resource_group = Some(resource_group);
        self
    }

    #[must_use]
    pub fn with_pvdcs(mut self, pvdcs: Vec<PvdcPrototype>) -> Self {
        self.pvdcs = Some(pvdcs);
        self
    }

    #[must_use]
    pub fn with_services(mut self, services: Vec<ServiceIdentity>) -> Self {
        self.services = Some(services);
        self
    }

    #[must_use]
    pub fn with_rhel_byol(mut self, rhel_byol: bool) -> Self {
        self.rhel_byol = Some(rhel_byol);
        self
    }

    #[must_use]
    pub fn with_windows_byol(mut self, windows_byol: bool) -> Self {
        self.windows_byol = Some(windows_byol);
        self
    }
}

impl Validate for CreateDirectorSitesOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.name.as_ref(), "name")?;
        required(self.resource_group.as_ref(), "resource_group")?;
        required(self.pvdcs.as_ref(), "pvdcs")?;
        Ok(())
    }
}

// ── List ────────────────────────────────────────────────────────────

/// Options for [`VmwareV1::list_director_sites`](crate::VmwareV1::list_director_sites).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDirectorSitesOptions {
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListDirectorSitesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for ListDirectorSitesOptions {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

// ── Get / delete ────────────────────────────────────────────────────

/// Options for [`VmwareV1::get_director_site`](crate::VmwareV1::get_director_site).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDirectorSiteOptions {
    /// Director site id. Required.
    pub id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetDirectorSiteOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Validate for GetDirectorSiteOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.id.as_ref(), "id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::delete_director_site`](crate::VmwareV1::delete_director_site).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDirectorSiteOptions {
    /// Director site id. Required.
    pub id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteDirectorSiteOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Validate for DeleteDirectorSiteOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.id.as_ref(), "id")?;
        Ok(())
    }
}

header_options!(
    CreateDirectorSitesOptions,
    ListDirectorSitesOptions,
    GetDirectorSiteOptions,
    DeleteDirectorSiteOptions,
);
