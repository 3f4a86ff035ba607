use std::collections::HashMap;

use vmaas_core::Error;
use vmaas_core::validate::{Validate, required};

use super::header_options;
use crate::models::ClusterPrototype;

/// Options for [`VmwareV1::list_director_sites_pvdcs`](crate::VmwareV1::list_director_sites_pvdcs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDirectorSitesPvdcsOptions {
    /// Director site id. Required.
    pub site_id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListDirectorSitesPvdcsOptions {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }
}

impl Validate for ListDirectorSitesPvdcsOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::create_director_sites_pvdcs`](crate::VmwareV1::create_director_sites_pvdcs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDirectorSitesPvdcsOptions {
    /// Director site id. Required.
    pub site_id: Option<String>,
    /// Required.
    pub name: Option<String>,
    /// Data center to place the PVDC in. Required.
    pub data_center_name: Option<String>,
    /// Required.
    pub clusters: Option<Vec<ClusterPrototype>>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateDirectorSitesPvdcsOptions {
    pub fn new(
        site_id: impl Into<String>,
        name: impl Into<String>,
        data_center_name: impl Into<String>,
        clusters: Vec<ClusterPrototype>,
    ) -> Self {
        Self {
            site_id: Some(site_id.into()),
            name: Some(name.into()),
            data_center_name: Some(data_center_name.into()),
            clusters: Some(clusters),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_data_center_name(mut self, data_center_name: impl Into<String>) -> Self {
        self.data_center_name = Some(data_center_name.into());
        self
    }

    #[must_use]
    pub fn with_clusters(mut self, clusters: Vec<ClusterPrototype>) -> Self {
        self.clusters = Some(clusters);
        self
    }
}

impl Validate for CreateDirectorSitesPvdcsOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        required(self.name.as_ref(), "name")?;
        required(self.data_center_name.as_ref(), "data_center_name")?;
        required(self.clusters.as_ref(), "clusters")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::get_director_sites_pvdcs`](crate::VmwareV1::get_director_sites_pvdcs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDirectorSitesPvdcsOptions {
    /// Director site id. Required.
    pub site_id: Option<String>,
    /// PVDC id. Required.
    pub id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetDirectorSitesPvdcsOptions {
    pub fn new(site_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
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
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Validate for GetDirectorSitesPvdcsOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        required(self.id.as_ref(), "id")?;
        Ok(())
    }
}

header_options!(
    ListDirectorSitesPvdcsOptions,
    CreateDirectorSitesPvdcsOptions,
    GetDirectorSitesPvdcsOptions,
);
