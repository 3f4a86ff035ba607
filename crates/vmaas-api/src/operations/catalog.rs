// Site-independent lookups: regions, host profiles, pricing, plus the org
// admin password reset.

use reqwest::Method;
use serde::Serialize;

use vmaas_core::request::CONTENT_TYPE_JSON;
use vmaas_core::validate::Validate;
use vmaas_core::{CallContext, DetailedResponse, Error, OperationRequest};

use crate::VmwareV1;
use crate::models::{
    DirectorSiteHostProfiles, DirectorSitePriceQuote, DirectorSitePricingInfo,
    DirectorSiteRegions, NewPassword, PvdcPrototype,
};
use crate::options::{
    GetVcddPriceOptions, ListDirectorSiteHostProfilesOptions, ListDirectorSiteRegionsOptions,
    ListPricesOptions, ReplaceOrgAdminPasswordOptions,
};

impl VmwareV1 {
    /// Regions and data centers where director sites can be created.
    ///
    /// `GET /director_site_regions`
    pub async fn list_director_site_regions(
        &self,
        options: &ListDirectorSiteRegionsOptions,
    ) -> Result<DetailedResponse<DirectorSiteRegions>, Error> {
        self.list_director_site_regions_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn list_director_site_regions_with_context(
        &self,
        ctx: &CallContext,
        options: &ListDirectorSiteRegionsOptions,
    ) -> Result<DetailedResponse<DirectorSiteRegions>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/director_site_regions")
            .operation("list_director_site_regions");
        self.execute(ctx, options, req).await
    }

    /// Host profiles available for clusters.
    ///
    /// `GET /director_site_host_profiles`
    pub async fn list_director_site_host_profiles(
        &self,
        options: &ListDirectorSiteHostProfilesOptions,
    ) -> Result<DetailedResponse<DirectorSiteHostProfiles>, Error> {
        self.list_director_site_host_profiles_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn list_director_site_host_profiles_with_context(
        &self,
        ctx: &CallContext,
        options: &ListDirectorSiteHostProfilesOptions,
    ) -> Result<DetailedResponse<DirectorSiteHostProfiles>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/director_site_host_profiles")
            .operation("list_director_site_host_profiles");
        self.execute(ctx, options, req).await
    }

    /// Generate a new Cloud Director organization admin password.
    ///
    /// `PUT /director_site_password?site_id={site_id}`
    pub async fn replace_org_admin_password(
        &self,
        options: &ReplaceOrgAdminPasswordOptions,
    ) -> Result<DetailedResponse<NewPassword>, Error> {
        self.replace_org_admin_password_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn replace_org_admin_password_with_context(
        &self,
        ctx: &CallContext,
        options: &ReplaceOrgAdminPasswordOptions,
    ) -> Result<DetailedResponse<NewPassword>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::PUT, "/director_site_password")
            .operation("replace_org_admin_password")
            .query("site_id", options.site_id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// List the billing metrics and their unit prices.
    ///
    /// `GET /director_site_pricing`
    pub async fn list_prices(
        &self,
        options: &ListPricesOptions,
    ) -> Result<DetailedResponse<DirectorSitePricingInfo>, Error> {
        self.list_prices_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn list_prices_with_context(
        &self,
        ctx: &CallContext,
        options: &ListPricesOptions,
    ) -> Result<DetailedResponse<DirectorSitePricingInfo>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/director_site_pricing")
            .operation("list_prices");
        self.execute(ctx, options, req).await
    }

    /// Quote the monthly cost of a director site before ordering it.
    ///
    /// `POST /director_site_price_quote`
    pub async fn get_vcdd_price(
        &self,
        options: &GetVcddPriceOptions,
    ) -> Result<DetailedResponse<DirectorSitePriceQuote>, Error> {
        self.get_vcdd_price_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn get_vcdd_price_with_context(
        &self,
        ctx: &CallContext,
        options: &GetVcddPriceOptions,
    ) -> Result<DetailedResponse<DirectorSitePriceQuote>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            country: Option<&'a str>,
            pvdcs: Option<&'a [PvdcPrototype]>,
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            rhel_byol: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            windows_byol: Option<bool>,
        }

        options.validate()?;
        let body = Body {
            country: options.country.as_deref(),
            pvdcs: options.pvdcs.as_deref(),
            currency: options.currency.as_deref(),
            rhel_byol: options.rhel_byol,
            windows_byol: options.windows_byol,
        };

        let req = OperationRequest::new(Method::POST, "/director_site_price_quote")
            .operation("get_vcdd_price")
            .json_body(&body, CONTENT_TYPE_JSON)?;
        self.execute(ctx, options, req).await
    }
}
