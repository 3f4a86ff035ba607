use std::collections::HashMap;

use vmaas_core::Error;
use vmaas_core::validate::{Validate, required};

use super::header_options;
use crate::models::JsonPatchOperation;

/// Options for [`VmwareV1::list_director_sites_pvdcs_clusters`](crate::VmwareV1::list_director_sites_pvdcs_clusters).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDirectorSitesPvdcsClustersOptions {
    /// Director site id. Required.
    pub site_id: Option<String>,
    /// PVDC id. Required.
    pub pvdc_id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListDirectorSitesPvdcsClustersOptions {
    pub fn new(site_id: impl Into<String>, pvdc_id: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
            pvdc_id: Some(pvdc_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    #[must_use]
    pub fn with_pvdc_id(mut self, pvdc_id: impl Into<String>) -> Self {
        self.pvdc_id = Some(pvdc_id.into());
        self
    }
}

impl Validate for ListDirectorSitesPvdcsClustersOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        required(self.pvdc_id.as_ref(), "pvdc_id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::get_director_instances_pvdcs_cluster`](crate::VmwareV1::get_director_instances_pvdcs_cluster).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDirectorInstancesPvdcsClusterOptions {
    /// Director site id. Required.
    pub site_id: Option<String>,
    /// PVDC id. Required.
    pub pvdc_id: Option<String>,
    /// Cluster id. Required.
    pub id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetDirectorInstancesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            site_id: Some(site_id.into()),
            pvdc_id: Some(pvdc_id.into()),
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    #[must_use]
    pub fn with_pvdc_id(mut self, pvdc_id: impl Into<String>) -> Self {
        self.pvdc_id = Some(pvdc_id.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Validate for GetDirectorInstancesPvdcsClusterOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        required(self.pvdc_id.as_ref(), "pvdc_id")?;
        required(self.id.as_ref(), "id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::delete_director_sites_pvdcs_cluster`](crate::VmwareV1::delete_director_sites_pvdcs_cluster).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDirectorSitesPvdcsClusterOptions {
    /// Director site id. Required.
    pub site_id: Option<String>,
    /// PVDC id. Required.
    pub pvdc_id: Option<String>,
    /// Cluster id. Required.
    pub id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DeleteDirectorSitesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            site_id: Some(site_id.into()),
            pvdc_id: Some(pvdc_id.into()),
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    #[must_use]
    pub fn with_pvdc_id(mut self, pvdc_id: impl Into<String>) -> Self {
        self.pvdc_id = Some(pvdc_id.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Validate for DeleteDirectorSitesPvdcsClusterOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        required(self.pvdc_id.as_ref(), "pvdc_id")?;
        required(self.id.as_ref(), "id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::update_director_sites_pvdcs_cluster`](crate::VmwareV1::update_director_sites_pvdcs_cluster).
///
/// The body is a JSON Patch document; build it with
/// [`json_patch::diff`](crate::models::json_patch::diff).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDirectorSitesPvdcsClusterOptions {
    /// Director site id. Required.
    pub site_id: Option<String>,
    /// PVDC id. Required.
    pub pvdc_id: Option<String>,
    /// Cluster id. Required.
    pub id: Option<String>,
    /// Patch operations. Required.
    pub body: Option<Vec<JsonPatchOperation>>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateDirectorSitesPvdcsClusterOptions {
    pub fn new(
        site_id: impl Into<String>,
        pvdc_id: impl Into<String>,
        id: impl Into<String>,
        body: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            site_id: Some(site_id.into()),
            pvdc_id: Some(pvdc_id.into()),
            id: Some(id.into()),
            body: Some(body),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    #[must_use]
    pub fn with_pvdc_id(mut self, pvdc_id: impl Into<String>) -> Self {
        self.pvdc_id = Some(pvdc_id.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<JsonPatchOperation>) -> Self {
        self.body = Some(body);
        self
    }
}

impl Validate for UpdateDirectorSitesPvdcsClusterOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        required(self.pvdc_id.as_ref(), "pvdc_id")?;
        required(self.id.as_ref(), "id")?;
        required(self.body.as_ref(), "body")?;
        Ok(())
    }
}

header_options!(
    ListDirectorSitesPvdcsClustersOptions,
    GetDirectorInstancesPvdcsClusterOptions,
    DeleteDirectorSitesPvdcsClusterOptions,
    UpdateDirectorSitesPvdcsClusterOptions,
);
