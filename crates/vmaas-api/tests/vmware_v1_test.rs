#![allow(clippy::unwrap_used)]
// Integration tests for the VmwareV1 operations against a wiremock server.

use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use flate2::read::GzDecoder;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vmaas_api::models::{
    ClusterPatch, ClusterPrototype, DirectorSiteStatus, FileShares, JsonPatchOp, PvdcPrototype,
    ResourceGroupIdentity, ServiceIdentity, VdcDirectorSitePrototype, VdcPatch, VdcPvdcPrototype,
    VdcStatus, json_patch,
};
use vmaas_api::options::{
    CreateDirectorSitesOptions, CreateDirectorSitesPvdcsOptions, CreateVdcOptions,
    DeleteDirectorSiteOptions, DeleteDirectorSitesPvdcsClusterOptions, DeleteVdcOptions,
    GetDirectorInstancesPvdcsClusterOptions, GetDirectorSiteOptions, GetDirectorSitesPvdcsOptions,
    GetVcddPriceOptions, GetVdcOptions, ListDirectorSiteHostProfilesOptions,
    ListDirectorSiteRegionsOptions, ListDirectorSitesOptions, ListDirectorSitesPvdcsClustersOptions,
    ListDirectorSitesPvdcsOptions, ListPricesOptions, ListVdcsOptions,
    ReplaceOrgAdminPasswordOptions, UpdateDirectorSitesPvdcsClusterOptions, UpdateVdcOptions,
};
use vmaas_api::{Authenticator, CallContext, Error, VmwareV1, VmwareV1Options};

// ── Helpers ─────────────────────────────────────────────────────────

fn client(url: &str) -> VmwareV1 {
    VmwareV1::new(
        VmwareV1Options::default()
            .with_url(url)
            .with_authenticator(Authenticator::NoAuth),
    )
    .unwrap()
}

async fn setup() -> (MockServer, VmwareV1) {
    let server = MockServer::start().await;
    let client = client(&server.uri());
    (server, client)
}

fn pvdc_prototype() -> PvdcPrototype {
    PvdcPrototype::new(
        "pvdc-a",
        "dal10",
        vec![ClusterPrototype::new(
            "cluster-a",
            2,
            "BM_2S_20_CORES_192_GB",
            FileShares {
                storage_two_iops: Some(24000),
                ..FileShares::default()
            },
        )],
    )
}

// ── Director sites ──────────────────────────────────────────────────

#[tokio::test]
async fn test_create_director_sites_accepted() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/director_sites"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "prod",
            "resource_group": { "id": "rg-1" },
            "pvdcs": [{
                "name": "pvdc-a",
                "data_center_name": "dal10",
                "clusters": [{
                    "name": "cluster-a",
                    "host_count": 2,
                    "host_profile": "BM_2S_20_CORES_192_GB",
                    "file_shares": { "storage_two_iops": 24000 }
                }]
            }],
            "services": [{ "name": "veeam" }]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "id": "ID" })))
        .expect(1)
        .mount(&server)
        .await;

    let options = CreateDirectorSitesOptions::new(
        "prod",
        ResourceGroupIdentity::new("rg-1"),
        vec![pvdc_prototype()],
    )
    .with_services(vec![ServiceIdentity::new("veeam")]);

    let resp = client.create_director_sites(&options).await.unwrap();
    assert_eq!(resp.status_code.as_u16(), 202);
    assert_eq!(resp.result().unwrap().id.as_deref(), Some("ID"));
}

#[tokio::test]
async fn test_list_and_get_director_sites() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/director_sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "director_sites": [
                { "id": "s1", "name": "one", "status": "ready_to_use" },
                { "id": "s2", "name": "two", "status": "creating" }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/director_sites/s1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "s1", "status": "ready_to_use" })),
        )
        .mount(&server)
        .await;

    let list = client
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(list.director_sites.len(), 2);
    assert_eq!(
        list.director_sites[1].status,
        Some(DirectorSiteStatus::Creating)
    );

    let site = client
        .get_director_site(&GetDirectorSiteOptions::new("s1"))
        .await
        .unwrap();
    assert_eq!(
        site.result().unwrap().status,
        Some(DirectorSiteStatus::ReadyToUse)
    );
}

#[tokio::test]
async fn test_delete_director_site() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/director_sites/s1"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "id": "s1", "status": "deleting" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .delete_director_site(&DeleteDirectorSiteOptions::new("s1"))
        .await
        .unwrap();
    assert_eq!(
        resp.result().unwrap().status,
        Some(DirectorSiteStatus::Deleting)
    );
}

#[tokio::test]
async fn test_path_parameters_are_escaped() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/director_sites/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "a/b" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .get_director_site(&GetDirectorSiteOptions::new("a/b"))
        .await
        .unwrap();
    assert_eq!(resp.result().unwrap().id.as_deref(), Some("a/b"));
}

// ── PVDCs & clusters ────────────────────────────────────────────────

#[tokio::test]
async fn test_pvdc_operations() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/director_sites/s1/pvdcs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "pvdcs": [{ "id": "p1" }] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/director_sites/s1/pvdcs"))
        .and(body_json(json!({
            "name": "pvdc-b",
            "data_center_name": "dal12",
            "clusters": []
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "id": "p2" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/director_sites/s1/pvdcs/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "provider_types": [{ "name": "paygo" }]
        })))
        .mount(&server)
        .await;

    let list = client
        .list_director_sites_pvdcs(&ListDirectorSitesPvdcsOptions::new("s1"))
        .await
        .unwrap();
    assert_eq!(list.result().unwrap().pvdcs.len(), 1);

    let created = client
        .create_director_sites_pvdcs(&CreateDirectorSitesPvdcsOptions::new(
            "s1",
            "pvdc-b",
            "dal12",
            Vec::new(),
        ))
        .await
        .unwrap();
    assert_eq!(created.result().unwrap().id.as_deref(), Some("p2"));

    let pvdc = client
        .get_director_sites_pvdcs(&GetDirectorSitesPvdcsOptions::new("s1", "p1"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(pvdc.provider_types[0].name.as_deref(), Some("paygo"));
}

#[tokio::test]
async fn test_cluster_read_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/director_sites/s1/pvdcs/p1/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clusters": [{ "id": "c1", "host_count": 2 }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/director_sites/s1/pvdcs/p1/clusters/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1",
            "host_count": 2,
            "billing_plan": "monthly"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/director_sites/s1/pvdcs/p1/clusters/c1"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "id": "c1", "status": "deleting" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list = client
        .list_director_sites_pvdcs_clusters(&ListDirectorSitesPvdcsClustersOptions::new("s1", "p1"))
        .await
        .unwrap();
    assert_eq!(list.result().unwrap().clusters[0].host_count, Some(2));

    let cluster = client
        .get_director_instances_pvdcs_cluster(&GetDirectorInstancesPvdcsClusterOptions::new(
            "s1", "p1", "c1",
        ))
        .await
        .unwrap();
    assert_eq!(
        cluster.result().unwrap().billing_plan.as_deref(),
        Some("monthly")
    );

    let deleted = client
        .delete_director_sites_pvdcs_cluster(&DeleteDirectorSitesPvdcsClusterOptions::new(
            "s1", "p1", "c1",
        ))
        .await
        .unwrap();
    assert_eq!(deleted.result().unwrap().id.as_deref(), Some("c1"));
}

#[tokio::test]
async fn test_update_cluster_sends_json_patch() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/director_sites/s1/pvdcs/p1/clusters/c1"))
        .and(header("Content-Type", "application/json-patch+json"))
        .and(body_json(json!([
            { "op": "replace", "path": "/host_count", "value": 4 }
        ])))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "id": "c1",
            "host_count": 2,
            "operation_id": "op-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let old = ClusterPatch {
        host_count: Some(2),
        file_shares: None,
    };
    let new = ClusterPatch {
        host_count: Some(4),
        ..old.clone()
    };
    let ops = json_patch::diff(&old, &new);
    assert_eq!(ops[0].op, JsonPatchOp::Replace);

    let resp = client
        .update_director_sites_pvdcs_cluster(&UpdateDirectorSitesPvdcsClusterOptions::new(
            "s1", "p1", "c1", ops,
        ))
        .await
        .unwrap();
    assert_eq!(resp.result().unwrap().operation_id.as_deref(), Some("op-1"));
}

// ── Catalog ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_regions_and_host_profiles() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/director_site_regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "director_site_regions": {
                "us-south": {
                    "data_centers": [{ "name": "dal10", "display_name": "Dallas 10", "uplink_speed": "35000" }],
                    "endpoint": "https://api.us-south.vmware.cloud.ibm.com"
                }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/director_site_host_profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "director_site_host_profiles": [{
                "id": "BM_2S_20_CORES_192_GB",
                "cpu": 40,
                "ram": 192,
                "features": ["hyperthreading"]
            }]
        })))
        .mount(&server)
        .await;

    let regions = client
        .list_director_site_regions(&ListDirectorSiteRegionsOptions::new())
        .await
        .unwrap()
        .into_result()
        .unwrap();
    let us_south = &regions.director_site_regions["us-south"];
    assert_eq!(us_south.data_centers[0].name.as_deref(), Some("dal10"));

    let profiles = client
        .list_director_site_host_profiles(&ListDirectorSiteHostProfilesOptions::new())
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(profiles.director_site_host_profiles[0].cpu, Some(40));
}

#[tokio::test]
async fn test_replace_org_admin_password_uses_query() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/director_site_password"))
        .and(query_param("site_id", "s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "password": "n3w" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .replace_org_admin_password(&ReplaceOrgAdminPasswordOptions::new("s1"))
        .await
        .unwrap();
    assert_eq!(resp.result().unwrap().password.as_deref(), Some("n3w"));
}

#[tokio::test]
async fn test_pricing() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/director_site_pricing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "director_site_pricing": [{
                "metric": "VCPU",
                "price_list": [{
                    "country": "USA",
                    "currency": "USD",
                    "prices": [{ "quantity_tier": 1, "price": 0.05 }]
                }]
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/director_site_price_quote"))
        .and(body_json(json!({
            "country": "USA",
            "pvdcs": [],
            "currency": "USD"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "currency": "USD",
            "total": 1234.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let prices = client
        .list_prices(&ListPricesOptions::new())
        .await
        .unwrap()
        .into_result()
        .unwrap();
    let tier = &prices.director_site_pricing[0].price_list[0].prices[0];
    assert_eq!(tier.quantity_tier, Some(1));

    let quote = client
        .get_vcdd_price(&GetVcddPriceOptions::new("USA", Vec::new()).with_currency("USD"))
        .await
        .unwrap();
    assert_eq!(quote.result().unwrap().currency.as_deref(), Some("USD"));
    assert!(quote.result().unwrap().total.is_some());
}

// ── VDCs ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_vdc_lifecycle() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/vdcs"))
        .and(body_json(json!({
            "name": "vdc-a",
            "director_site": {
                "id": "s1",
                "pvdc": { "id": "p1", "provider_type": { "name": "paygo" } }
            }
        })))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "id": "v1", "status": "creating" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vdcs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vdcs": [{ "id": "v1" }] })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vdcs/v1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "v1", "status": "ready_to_use" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/vdcs/v1"))
        .and(header("Content-Type", "application/merge-patch+json"))
        .and(body_json(json!({ "cpu": 16 })))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "id": "v1", "status": "modifying" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/vdcs/v1"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({ "id": "v1", "status": "deleting" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let site = VdcDirectorSitePrototype::new("s1", VdcPvdcPrototype::new("p1").with_provider_type("paygo"));
    let created = client
        .create_vdc(&CreateVdcOptions::new("vdc-a", site))
        .await
        .unwrap();
    assert_eq!(created.result().unwrap().status, Some(VdcStatus::Creating));

    let list = client.list_vdcs(&ListVdcsOptions::new()).await.unwrap();
    assert_eq!(list.result().unwrap().vdcs.len(), 1);

    let vdc = client.get_vdc(&GetVdcOptions::new("v1")).await.unwrap();
    assert_eq!(vdc.result().unwrap().status, Some(VdcStatus::ReadyToUse));

    let patch = VdcPatch {
        cpu: Some(16),
        ..VdcPatch::default()
    };
    let updated = client
        .update_vdc(&UpdateVdcOptions::new("v1", patch))
        .await
        .unwrap();
    assert_eq!(updated.result().unwrap().status, Some(VdcStatus::Modifying));

    let deleted = client.delete_vdc(&DeleteVdcOptions::new("v1")).await.unwrap();
    assert_eq!(deleted.result().unwrap().status, Some(VdcStatus::Deleting));
}

// ── Validation ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_default_options_fail_validation_without_request() {
    let (server, client) = setup().await;

    let errors = vec![
        client
            .create_director_sites(&CreateDirectorSitesOptions::default())
            .await
            .unwrap_err(),
        client
            .get_director_site(&GetDirectorSiteOptions::default())
            .await
            .unwrap_err(),
        client
            .delete_director_site(&DeleteDirectorSiteOptions::default())
            .await
            .unwrap_err(),
        client
            .list_director_sites_pvdcs(&ListDirectorSitesPvdcsOptions::default())
            .await
            .unwrap_err(),
        client
            .create_director_sites_pvdcs(&CreateDirectorSitesPvdcsOptions::default())
            .await
            .unwrap_err(),
        client
            .get_director_sites_pvdcs(&GetDirectorSitesPvdcsOptions::default())
            .await
            .unwrap_err(),
        client
            .list_director_sites_pvdcs_clusters(&ListDirectorSitesPvdcsClustersOptions::default())
            .await
            .unwrap_err(),
        client
            .get_director_instances_pvdcs_cluster(
                &GetDirectorInstancesPvdcsClusterOptions::default(),
            )
            .await
            .unwrap_err(),
        client
            .delete_director_sites_pvdcs_cluster(&DeleteDirectorSitesPvdcsClusterOptions::default())
            .await
            .unwrap_err(),
        client
            .update_director_sites_pvdcs_cluster(&UpdateDirectorSitesPvdcsClusterOptions::default())
            .await
            .unwrap_err(),
        client
            .replace_org_admin_password(&ReplaceOrgAdminPasswordOptions::default())
            .await
            .unwrap_err(),
        client
            .get_vcdd_price(&GetVcddPriceOptions::default())
            .await
            .unwrap_err(),
        client
            .create_vdc(&CreateVdcOptions::default())
            .await
            .unwrap_err(),
        client.get_vdc(&GetVdcOptions::default()).await.unwrap_err(),
        client
            .delete_vdc(&DeleteVdcOptions::default())
            .await
            .unwrap_err(),
        client
            .update_vdc(&UpdateVdcOptions::default())
            .await
            .unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, Error::Validation { .. }), "got: {err:?}");
        assert!(err.response().is_none());
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_path_parameter_is_rejected() {
    let (server, client) = setup().await;

    let err = client
        .get_vdc(&GetVdcOptions::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "got: {err:?}");
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ── Response handling ───────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_json_keeps_raw_response() {
    for retries in [false, true] {
        let (server, mut client) = setup().await;
        if retries {
            client.enable_retries(3, Duration::from_millis(10));
        }

        Mock::given(method("GET"))
            .and(path("/director_sites/s1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("{ not json", "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client
            .get_director_site(&GetDirectorSiteOptions::new("s1"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::ResponseProcessing { .. }),
            "retries={retries}, got: {err:?}"
        );
        let raw = err.response().unwrap();
        assert_eq!(raw.status_code.as_u16(), 200);
        assert_eq!(raw.result(), Some(&"{ not json".to_owned()));
    }
}

#[tokio::test]
async fn test_empty_body_yields_no_result() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/vdcs/v1"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let resp = client.delete_vdc(&DeleteVdcOptions::new("v1")).await.unwrap();
    assert_eq!(resp.status_code.as_u16(), 202);
    assert!(resp.result().is_none());
}

#[tokio::test]
async fn test_api_error_carries_message_and_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vdcs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "code": "not_found", "message": "VDC not found" }]
        })))
        .mount(&server)
        .await;

    let err = client
        .get_vdc(&GetVdcOptions::new("missing"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "VDC not found");
    assert_eq!(err.response().unwrap().status_code.as_u16(), 404);
}

#[tokio::test]
async fn test_empty_service_url() {
    let client = client("");

    let err = client
        .list_director_sites(&ListDirectorSitesOptions::new())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("service URL is missing"));
    assert!(err.response().is_none());
}

// ── Headers ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_header_precedence() {
    let (server, mut client) = setup().await;

    let mut defaults = HeaderMap::new();
    defaults.insert("X-Team", HeaderValue::from_static("infra"));
    defaults.insert("Accept-Language", HeaderValue::from_static("de"));
    client.set_default_headers(defaults);

    Mock::given(method("GET"))
        .and(path("/vdcs"))
        .and(header("X-Team", "infra"))
        .and(header("Accept-Language", "fr"))
        .and(header("X-Global-Transaction-ID", "tx-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vdcs": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListVdcsOptions::new()
        .with_accept_language("en")
        .with_x_global_transaction_id("tx-1")
        .with_headers(HashMap::from([(
            "Accept-Language".to_owned(),
            "fr".to_owned(),
        )]));

    client.list_vdcs(&options).await.unwrap();
}

#[tokio::test]
async fn test_gzip_request_body() {
    let (server, mut client) = setup().await;
    client.set_enable_gzip_compression(true);

    Mock::given(method("POST"))
        .and(path("/vdcs"))
        .and(header("Content-Encoding", "gzip"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "id": "v1" })))
        .expect(1)
        .mount(&server)
        .await;

    let site = VdcDirectorSitePrototype::new("s1", VdcPvdcPrototype::new("p1"));
    client
        .create_vdc(&CreateVdcOptions::new("vdc-a", site))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let mut decoded = String::new();
    GzDecoder::new(received[0].body.as_slice())
        .read_to_string(&mut decoded)
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&decoded).unwrap();
    assert_eq!(
        body,
        json!({
            "name": "vdc-a",
            "director_site": { "id": "s1", "pvdc": { "id": "p1" } }
        })
    );
}

// ── Deadlines ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_deadline_exceeded() {
    for retries in [false, true] {
        let (server, mut client) = setup().await;
        if retries {
            client.enable_retries(2, Duration::from_millis(10));
        }

        Mock::given(method("GET"))
            .and(path("/director_sites"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "director_sites": [] }))
                    .set_delay(Duration::from_millis(100)),
            )
            .mount(&server)
            .await;

        let ctx = CallContext::with_timeout(Duration::from_millis(80));
        let err = client
            .list_director_sites_with_context(&ctx, &ListDirectorSitesOptions::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::DeadlineExceeded), "got: {err:?}");
        assert!(err.to_string().contains("deadline exceeded"));
        assert!(err.response().is_none());
    }
}

// ── Client ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_clone_is_independent() {
    let original = client("https://vmaas.example.com/v1");
    let mut copy = original.clone();

    assert!(Arc::ptr_eq(original.authenticator(), copy.authenticator()));
    assert_eq!(original.service_url(), copy.service_url());

    copy.set_service_url("https://other.example.com/v1").unwrap();
    copy.enable_retries(2, Duration::from_secs(1));

    assert_eq!(original.service_url(), "https://vmaas.example.com/v1");
    assert!(original.retry_policy().is_none());
    assert_eq!(copy.retry_policy().unwrap().max_retries, 2);
}

#[test]
fn test_options_builder_round_trip() {
    let headers = HashMap::from([("X-Trace".to_owned(), "1".to_owned())]);
    let options = CreateDirectorSitesOptions::default()
        .with_name("prod")
        .with_resource_group(ResourceGroupIdentity::new("rg-1"))
        .with_pvdcs(vec![pvdc_prototype()])
        .with_services(vec![ServiceIdentity::new("veeam")])
        .with_rhel_byol(true)
        .with_windows_byol(false)
        .with_accept_language("en")
        .with_x_global_transaction_id("tx")
        .with_headers(headers.clone());

    assert_eq!(
        options,
        CreateDirectorSitesOptions {
            name: Some("prod".into()),
            resource_group: Some(ResourceGroupIdentity::new("rg-1")),
            pvdcs: Some(vec![pvdc_prototype()]),
            services: Some(vec![ServiceIdentity::new("veeam")]),
            rhel_byol: Some(true),
            windows_byol: Some(false),
            accept_language: Some("en".into()),
            x_global_transaction_id: Some("tx".into()),
            headers,
        }
    );

    let vdc = CreateVdcOptions::new("v", VdcDirectorSitePrototype::new("s", VdcPvdcPrototype::new("p")))
        .with_cpu(4)
        .with_ram(16)
        .with_fast_provisioning_enabled(true);
    assert_eq!(vdc.cpu, Some(4));
    assert_eq!(vdc.ram, Some(16));
    assert_eq!(vdc.fast_provisioning_enabled, Some(true));
    assert_eq!(vdc.name.as_deref(), Some("v"));
}
