// Virtual data center operations.

use reqwest::Method;
use serde::Serialize;

use vmaas_core::request::{CONTENT_TYPE_JSON, CONTENT_TYPE_MERGE_PATCH};
use vmaas_core::validate::Validate;
use vmaas_core::{CallContext, DetailedResponse, Error, OperationRequest};

use crate::VmwareV1;
use crate::models::{
    ResourceGroupIdentity, Vdc, VdcCollection, VdcDirectorSitePrototype, VdcEdgePrototype,
};
use crate::options::{
    CreateVdcOptions, DeleteVdcOptions, GetVdcOptions, ListVdcsOptions, UpdateVdcOptions,
};

impl VmwareV1 {
    /// List the virtual data centers in the account.
    ///
    /// `GET /vdcs`
    pub async fn list_vdcs(
        &self,
        options: &ListVdcsOptions,
    ) -> Result<DetailedResponse<VdcCollection>, Error> {
        self.list_vdcs_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn list_vdcs_with_context(
        &self,
        ctx: &CallContext,
        options: &ListVdcsOptions,
    ) -> Result<DetailedResponse<VdcCollection>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/vdcs").operation("list_vdcs");
        self.execute(ctx, options, req).await
    }

    /// Create a virtual data center on a director site.
    ///
    /// `POST /vdcs`
    pub async fn create_vdc(
        &self,
        options: &CreateVdcOptions,
    ) -> Result<DetailedResponse<Vdc>, Error> {
        self.create_vdc_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn create_vdc_with_context(
        &self,
        ctx: &CallContext,
        options: &CreateVdcOptions,
    ) -> Result<DetailedResponse<Vdc>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: Option<&'a str>,
            director_site: Option<&'a VdcDirectorSitePrototype>,
            #[serde(skip_serializing_if = "Option::is_none")]
            edge: Option<&'a VdcEdgePrototype>,
            #[serde(skip_serializing_if = "Option::is_none")]
            fast_provisioning_enabled: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            resource_group: Option<&'a ResourceGroupIdentity>,
            #[serde(skip_serializing_if = "Option::is_none")]
            cpu: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            ram: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            rhel_byol: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            windows_byol: Option<bool>,
        }

        options.validate()?;
        let body = Body {
            name: options.name.as_deref(),
            director_site: options.director_site.as_ref(),
            edge: options.edge.as_ref(),
            fast_provisioning_enabled: options.fast_provisioning_enabled,
            resource_group: options.resource_group.as_ref(),
            cpu: options.cpu,
            ram: options.ram,
            rhel_byol: options.rhel_byol,
            windows_byol: options.windows_byol,
        };

        let req = OperationRequest::new(Method::POST, "/vdcs")
            .operation("create_vdc")
            .json_body(&body, CONTENT_TYPE_JSON)?;
        self.execute(ctx, options, req).await
    }

    /// Fetch one virtual data center.
    ///
    /// `GET /vdcs/{id}`
    pub async fn get_vdc(&self, options: &GetVdcOptions) -> Result<DetailedResponse<Vdc>, Error> {
        self.get_vdc_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn get_vdc_with_context(
        &self,
        ctx: &CallContext,
        options: &GetVdcOptions,
    ) -> Result<DetailedResponse<Vdc>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, "/vdcs/{id}")
            .operation("get_vdc")
            .path_param("id", options.id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// Delete a virtual data center.
    ///
    /// `DELETE /vdcs/{id}`
    pub async fn delete_vdc(
        &self,
        options: &DeleteVdcOptions,
    ) -> Result<DetailedResponse<Vdc>, Error> {
        self.delete_vdc_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn delete_vdc_with_context(
        &self,
        ctx: &CallContext,
        options: &DeleteVdcOptions,
    ) -> Result<DetailedResponse<Vdc>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::DELETE, "/vdcs/{id}")
            .operation("delete_vdc")
            .path_param("id", options.id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// Change a VDC's reservation or fast provisioning setting. Only the
    /// fields set on the patch are sent.
    ///
    /// `PATCH /vdcs/{id}`
    pub async fn update_vdc(
        &self,
        options: &UpdateVdcOptions,
    ) -> Result<DetailedResponse<Vdc>, Error> {
        self.update_vdc_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn update_vdc_with_context(
        &self,
        ctx: &CallContext,
        options: &UpdateVdcOptions,
    ) -> Result<DetailedResponse<Vdc>, Error> {
        options.validate()?;
        let patch = options
            .patch
            .as_ref()
            .map(crate::models::VdcPatch::as_patch)
            .unwrap_or_default();
        let req = OperationRequest::new(Method::PATCH, "/vdcs/{id}")
            .operation("update_vdc")
            .path_param("id", options.id.as_deref().unwrap_or_default())
            .json_body(&patch, CONTENT_TYPE_MERGE_PATCH)?;
        self.execute(ctx, options, req).await
    }
}
