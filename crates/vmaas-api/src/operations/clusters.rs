// Cluster operations, scoped to a director site and PVDC.

use reqwest::Method;

use vmaas_core::request::CONTENT_TYPE_JSON_PATCH;
use vmaas_core::validate::Validate;
use vmaas_core::{CallContext, DetailedResponse, Error, OperationRequest};

use crate::VmwareV1;
use crate::models::{Cluster, ClusterCollection, ClusterSummary, UpdatedCluster};
use crate::options::{
    DeleteDirectorSitesPvdcsClusterOptions, GetDirectorInstancesPvdcsClusterOptions,
    ListDirectorSitesPvdcsClustersOptions, UpdateDirectorSitesPvdcsClusterOptions,
};

const CLUSTERS_PATH: &str = "/director_sites/{site_id}/pvdcs/{pvdc_id}/clusters";
const CLUSTER_PATH: &str = "/director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}";

impl VmwareV1 {
    /// List the clusters of a PVDC.
    ///
    /// `GET /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters`
    pub async fn list_director_sites_pvdcs_clusters(
        &self,
        options: &ListDirectorSitesPvdcsClustersOptions,
    ) -> Result<DetailedResponse<ClusterCollection>, Error> {
        self.list_director_sites_pvdcs_clusters_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn list_director_sites_pvdcs_clusters_with_context(
        &self,
        ctx: &CallContext,
        options: &ListDirectorSitesPvdcsClustersOptions,
    ) -> Result<DetailedResponse<ClusterCollection>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, CLUSTERS_PATH)
            .operation("list_director_sites_pvdcs_clusters")
            .path_param("site_id", options.site_id.as_deref().unwrap_or_default())
            .path_param("pvdc_id", options.pvdc_id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// Fetch one cluster of a PVDC.
    ///
    /// `GET /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}`
    pub async fn get_director_instances_pvdcs_cluster(
        &self,
        options: &GetDirectorInstancesPvdcsClusterOptions,
    ) -> Result<DetailedResponse<Cluster>, Error> {
        self.get_director_instances_pvdcs_cluster_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn get_director_instances_pvdcs_cluster_with_context(
        &self,
        ctx: &CallContext,
        options: &GetDirectorInstancesPvdcsClusterOptions,
    ) -> Result<DetailedResponse<Cluster>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::GET, CLUSTER_PATH)
            .operation("get_director_instances_pvdcs_cluster")
            .path_param("site_id", options.site_id.as_deref().unwrap_or_default())
            .path_param("pvdc_id", options.pvdc_id.as_deref().unwrap_or_default())
            .path_param("id", options.id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// Delete a cluster from a PVDC.
    ///
    /// `DELETE /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}`
    pub async fn delete_director_sites_pvdcs_cluster(
        &self,
        options: &DeleteDirectorSitesPvdcsClusterOptions,
    ) -> Result<DetailedResponse<ClusterSummary>, Error> {
        self.delete_director_sites_pvdcs_cluster_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn delete_director_sites_pvdcs_cluster_with_context(
        &self,
        ctx: &CallContext,
        options: &DeleteDirectorSitesPvdcsClusterOptions,
    ) -> Result<DetailedResponse<ClusterSummary>, Error> {
        options.validate()?;
        let req = OperationRequest::new(Method::DELETE, CLUSTER_PATH)
            .operation("delete_director_sites_pvdcs_cluster")
            .path_param("site_id", options.site_id.as_deref().unwrap_or_default())
            .path_param("pvdc_id", options.pvdc_id.as_deref().unwrap_or_default())
            .path_param("id", options.id.as_deref().unwrap_or_default());
        self.execute(ctx, options, req).await
    }

    /// Apply a JSON Patch (host count, file shares) to a cluster.
    ///
    /// `PATCH /director_sites/{site_id}/pvdcs/{pvdc_id}/clusters/{id}`
    pub async fn update_director_sites_pvdcs_cluster(
        &self,
        options: &UpdateDirectorSitesPvdcsClusterOptions,
    ) -> Result<DetailedResponse<UpdatedCluster>, Error> {
        self.update_director_sites_pvdcs_cluster_with_context(&CallContext::background(), options)
            .await
    }

    pub async fn update_director_sites_pvdcs_cluster_with_context(
        &self,
        ctx: &CallContext,
        options: &UpdateDirectorSitesPvdcsClusterOptions,
    ) -> Result<DetailedResponse<UpdatedCluster>, Error> {
        options.validate()?;
        let body = options.body.as_deref().unwrap_or_default();
        let req = OperationRequest::new(Method::PATCH, CLUSTER_PATH)
            .operation("update_director_sites_pvdcs_cluster")
            .path_param("site_id", options.site_id.as_deref().unwrap_or_default())
            .path_param("pvdc_id", options.pvdc_id.as_deref().unwrap_or_default())
            .path_param("id", options.id.as_deref().unwrap_or_default())
            .json_body(body, CONTENT_TYPE_JSON_PATCH)?;
        self.execute(ctx, options, req).await
    }
}
