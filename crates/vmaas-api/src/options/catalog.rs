use std::collections::HashMap;

use vmaas_core::Error;
use vmaas_core::validate::{Validate, required};

use super::header_options;
use crate::models::PvdcPrototype;

/// Options for [`VmwareV1::list_director_site_regions`](crate::VmwareV1::list_director_site_regions).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDirectorSiteRegionsOptions {
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListDirectorSiteRegionsOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for ListDirectorSiteRegionsOptions {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Options for [`VmwareV1::list_director_site_host_profiles`](crate::VmwareV1::list_director_site_host_profiles).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDirectorSiteHostProfilesOptions {
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListDirectorSiteHostProfilesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for ListDirectorSiteHostProfilesOptions {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Options for [`VmwareV1::replace_org_admin_password`](crate::VmwareV1::replace_org_admin_password).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceOrgAdminPasswordOptions {
    /// Director site id, sent as the `site_id` query parameter. Required.
    pub site_id: Option<String>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ReplaceOrgAdminPasswordOptions {
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

impl Validate for ReplaceOrgAdminPasswordOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.site_id.as_ref(), "site_id")?;
        Ok(())
    }
}

/// Options for [`VmwareV1::list_prices`](crate::VmwareV1::list_prices).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPricesOptions {
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListPricesOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for ListPricesOptions {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Options for [`VmwareV1::get_vcdd_price`](crate::VmwareV1::get_vcdd_price).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetVcddPriceOptions {
    /// Country the site would be billed in (ISO 3166-1 alpha-3). Required.
    pub country: Option<String>,
    /// PVDCs of the prospective site. Required.
    pub pvdcs: Option<Vec<PvdcPrototype>>,
    /// Quote currency; the country's currency when unset.
    pub currency: Option<String>,
    pub rhel_byol: Option<bool>,
    pub windows_byol: Option<bool>,
    pub accept_language: Option<String>,
    pub x_global_transaction_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetVcddPriceOptions {
    pub fn new(country: impl Into<String>, pvdcs: Vec<PvdcPrototype>) -> Self {
        Self {
            country: Some(country.into()),
            pvdcs: Some(pvdcs),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_pvdcs(mut self, pvdcs: Vec<PvdcPrototype>) -> Self {
        self.pvdcs = Some(pvdcs);
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
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

impl Validate for GetVcddPriceOptions {
    fn validate(&self) -> Result<(), Error> {
        required(self.country.as_ref(), "country")?;
        required(self.pvdcs.as_ref(), "pvdcs")?;
        Ok(())
    }
}

header_options!(
    ListDirectorSiteRegionsOptions,
    ListDirectorSiteHostProfilesOptions,
    ReplaceOrgAdminPasswordOptions,
    ListPricesOptions,
    GetVcddPriceOptions,
);
