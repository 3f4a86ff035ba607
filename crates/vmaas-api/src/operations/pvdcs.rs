// Provider virtual data center operations, scoped to a director site.

use reqwest::Method;
use serde::Serialize;

use vmaas_core::request::CONTENT_TYPE_JSON;
use vmaas_core::validate::Validate;
use vmaas_core::{CallContext, DetailedResponse, Error, OperationRequest};

use crate::VmwareV1;
use crate::models::{ClusterPrototype, Pvdc, PvdcCollection};
use crate::options::{
    CreateDirectorSitesPvdcsOptions, GetDirectorSitesPvdcsOptions, ListDirectorSitesPvdcsOptions,
};

impl VmwareV1 {
    /// List the PVDCs of a director site.
    ///
    /// `GET /director_sites/{site_id}/pvdcs`
    pub async fn list_director_sites_pvdcs(
        &self,
        options: &ListDirectorSitesPvdcsOptions,
    ) -> Result<DetailedResponse<PvdcCollection>, Error> {
        self.list_director_sites_pvdcs_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn list_director_sites_pvdcs_with_context(
        &self,
        ctx: &CallContext,
        options: &ListDirectorSitesPvdcsOptions,
    ) -> Result<DetailedResponse<PvdcCollection>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/director_sites/{site_id}/pvdcs")
            .operation("list_director_sites_pvdcs")
            .path_param("site_id", options.site_id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// Add a PVDC to an existing director site.
    ///
    /// `POST /director_sites/{site_id}/pvdcs`
    pub async fn create_director_sites_pvdcs(
        &self,
        options: &CreateDirectorSitesPvdcsOptions,
    ) -> Result<DetailedResponse<Pvdc>, Error> {
        self.create_director_sites_pvdcs_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn create_director_sites_pvdcs_with_context(
        &self,
        ctx: &CallContext,
        options: &CreateDirectorSitesPvdcsOptions,
    ) -> Result<DetailedResponse<Pvdc>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: Option<&'a str>,
            data_center_name: Option<&'a str>,
            clusters: Option<&'a [ClusterPrototype]>,
        }

        options.validate()?;
        let body = Body {
            name: options.name.as_deref(),
            data_center_name: options.data_center_name.as_deref(),
            clusters: options.clusters.as_deref(),
        };

        let req = OperationRequest::new(Method::POST, "/director_sites/{site_id}/pvdcs")
            .operation("create_director_sites_pvdcs")
            .path_param("site_id", options.site_id.as_deref().unwrap_or_default())
            .json_body(&body, CONTENT_TYPE_JSON)?;
        self.execute(ctx, options, req).await
    }

    /// Fetch one PVDC of a director site.
    ///
    /// `GET /director_sites/{site_id}/pvdcs/{id}`
    pub async fn get_director_sites_pvdcs(
        &self,
        options: &GetDirectorSitesPvdcsOptions,
    ) -> Result<DetailedResponse<Pvdc>, Error> {
        self.get_director_sites_pvdcs_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn get_director_sites_pvdcs_with_context(
        &self,
        ctx: &CallContext,
        options: &GetDirectorSitesPvdcsOptions,
    ) -> Result<DetailedResponse<Pvdc>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/director_sites/{site_id}/pvdcs/{id}")
            .operation("get_director_sites_pvdcs")
            .path_param("site_id", options.site_id.as_deref().unwrap_or_default())
            .path_param("id", options.id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }
}
