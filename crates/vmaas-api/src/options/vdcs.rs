use std::collections::HashMap;

use vmaas_core::Error;
use vmaas_core::validate::{Validate, required};

use super::header_options;
use crate::models::{ResourceGroupIdentity, VdcDirectorSitePrototype, VdcEdgePrototype, VdcPatch};

/// Options for [`VmwareV1::list_vdcs`](crate::VmwareV1::list_vdcs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVdcsOptions {
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListVdcsOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for ListVdcsOptions {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Options for [`VmwareV1::create_vdc`](crate::VmwareV1::create_vdc).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateVdcOptions {
    /// Name of the VDC. Required.
    pub name: Option<String>,
    /// Director site and PVDC to place the VDC on. Required.
    pub director_site: Option<VdcDirectorSitePrototype>,
    pub edge: Option<VdcEdgePrototype>,
    pub fast_provisioning_enabled: Option<bool>,
    pub resource_group: Option<ResourceGroupIdentity>,
    pub cpu: Option<i64>,
    pub ram: Option<i64>,
    pub rhel_byol: Option<bool>,
    pub windows_byol: Option<bool>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateVdcOptions {
    pub fn new(name: impl Into<String>, director_site: VdcDirectorSitePrototype) -> Self {
        Self {
            name: Some(name.into()),
            director_site: Some(director_site),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_director_site(mut self, director_site: VdcDirectorSitePrototype) -> Self {
        self.director_site = Some(director_site);
        self
    }

    #[must_use]
    pub fn with_edge(mut self, edge: VdcEdgePrototype) -> Self {
        self.edge = Some(edge);
        self
    }

    #[must_use]
    pub fn with_fast_provisioning_enabled(mut self, enabled: bool) -> Self {
        self.fast_provisioning_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_resource_group(mut self, resource_group: ResourceGroupIdentity) -> Self {
        self.resource_group = Some(resource_group);
        self
    }

    #[must_use]
    pub fn with_cpu(mut self, cpu: i64) -> Self {
        self.cpu = Some(cpu);
        self
    }

    #[must_use]
    pub fn with_ram(mut self, ram: i64) -> Self {
        self.ram = Some(ram);
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

impl Validate for CreateVdcOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.name.as_ref(), "name")?;
        required(self.director_site.as_ref(), "director_site")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::get_vdc`](crate::VmwareV1::get_vdc).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetVdcOptions {
    /// VDC id. Required.
    pub id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetVdcOptions {
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

impl Validate for GetVdcOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.id.as_ref(), "id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::delete_vdc`](crate::VmwareV1::delete_vdc).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteVdcOptions {
    /// VDC id. Required.
    pub id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteVdcOptions {
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

impl Validate for DeleteVdcOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.id.as_ref(), "id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::update_vdc`](crate::VmwareV1::update_vdc).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateVdcOptions {
    /// VDC id. Required.
    pub id: Option<String>,
    /// Fields to change. Required.
    pub patch: Option<VdcPatch>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateVdcOptions {
    pub fn new(id: impl Into<String>, patch: VdcPatch) -> Self {
        Self {
            id: Some(id.into()),
            patch: Some(patch),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_patch(mut self, patch: VdcPatch) -> Self {
        self.patch = Some(patch);
        self
    }
}

impl Validate for UpdateVdcOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.id.as_ref(), "id")?;
        required(self.patch.as_ref(), "patch")?;
        Ok(())
    }
}

header_options!(
    ListVdcsOptions,
    CreateVdcOptions,
    GetVdcOptions,
    DeleteVdcOptions,
    UpdateVdcOptions,
);
