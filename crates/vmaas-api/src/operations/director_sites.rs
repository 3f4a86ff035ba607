// Director site operations: create, list, get, delete.

use reqwest::Method;
use serde::Serialize;

use vmaas_core::request::CONTENT_TYPE_JSON;
use vmaas_core::validate::Validate;
use vmaas_core::{CallContext, DetailedResponse, Error, OperationRequest};

use crate::VmwareV1;
use crate::models::{
    DirectorSite, DirectorSiteCollection, PvdcPrototype, ResourceGroupIdentity, ServiceIdentity,
};
use crate::options::{
    CreateDirectorSitesOptions, DeleteDirectorSiteOptions, GetDirectorSiteOptions,
    ListDirectorSitesOptions,
};

impl VmwareV1 {
    /// Order a new director site. Provisioning is asynchronous; poll
    /// `get_director_site` until the status is `ready_to_use`.
    ///
    /// `POST /director_sites`
    pub async fn create_director_sites(
        &self,
        options: &CreateDirectorSitesOptions,
    ) -> Result<DetailedResponse<DirectorSite>, Error> {
        self.create_director_sites_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn create_director_sites_with_context(
        &self,
        ctx: &CallContext,
        options: &CreateDirectorSitesOptions,
    ) -> Result<DetailedResponse<DirectorSite>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: Option<&'a str>,
            resource_group: Option<&'a ResourceGroupIdentity>,
            pvdcs: Option<&'a [PvdcPrototype]>,
            #[serde(skip_serializing_if = "Option::is_none")]
            services: Option<&'a [ServiceIdentity]>,
            #[serde(skip_serializing_if = "Option::is_none")]
            rhel_byol: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            windows_byol: Option<bool>,
        }

        options.validate()?;
        let body = Body {
            name: options.name.as_deref(),
            resource_group: options.resource_group.as_ref(),
            pvdcs: options.pvdcs.as_deref(),
            services: options.services.as_deref(),
            rhel_byol: options.rhel_byol,
            windows_byol: options.windows_byol,
        };

        let req = OperationRequest::new(Method::POST, "/director_sites")
            .operation("create_director_sites")
            .json_body(&body, CONTENT_TYPE_JSON)?;
        self.execute(ctx, options, req).await
    }

    /// List the director sites in the account.
    ///
    /// `GET /director_sites`
    pub async fn list_director_sites(
        &self,
        options: &ListDirectorSitesOptions,
    ) -> Result<DetailedResponse<DirectorSiteCollection>, Error> {
        self.list_director_sites_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn list_director_sites_with_context(
        &self,
        ctx: &CallContext,
        options: &ListDirectorSitesOptions,
    ) -> Result<DetailedResponse<DirectorSiteCollection>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/director_sites")
            .operation("list_director_sites");
        self.execute(ctx, options, req).await
    }

    /// Fetch one director site with its PVDCs and clusters.
    ///
    /// `GET /director_sites/{id}`
    pub async fn get_director_site(
        &self,
        options: &GetDirectorSiteOptions,
    ) -> Result<DetailedResponse<DirectorSite>, Error> {
        self.get_director_site_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn get_director_site_with_context(
        &self,
        ctx: &CallContext,
        options: &GetDirectorSiteOptions,
    ) -> Result<DetailedResponse<DirectorSite>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/director_sites/{id}")
            .operation("get_director_site")
            .path_param("id", options.id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// Delete a director site and everything in it. The returned site
    /// reports status `deleting`.
    ///
    /// `DELETE /director_sites/{id}`
    pub async fn delete_director_site(
        &self,
        options: &DeleteDirectorSiteOptions,
    ) -> Result<DetailedResponse<DirectorSite>, Error> {
        self.delete_director_site_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn delete_director_site_with_context(
        &self,
        ctx: &CallContext,
        options: &DeleteDirectorSiteOptions,
    ) -> Result<DetailedResponse<DirectorSite>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::DELETE, "/director_sites/{id}")
            .operation("delete_director_site")
            .path_param("id", options.id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }
}
