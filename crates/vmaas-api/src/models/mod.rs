// Wire types for the VMware as a Service API.
//
// Response types mark every field optional: the service omits fields
// freely depending on resource state. Enums carry an `Unknown` variant so
// a new server-side value does not break decoding.

mod catalog;
mod cluster;
mod common;
mod director_site;
pub mod json_patch;
mod pvdc;
mod vdc;

pub use catalog::{
    ClusterPriceQuote, DataCenterInfo, DirectorSiteHostProfile, DirectorSiteHostProfiles,
    DirectorSitePriceQuote, DirectorSitePricingInfo, DirectorSiteRegion, DirectorSiteRegions,
    NewPassword, PriceInfo, PriceList, PriceQuoteCharge, PriceTier,
};
pub use cluster::{
    Cluster, ClusterCollection, ClusterPatch, ClusterPrototype, ClusterSummary, FileShares,
    StorageType, UpdatedCluster,
};
pub use common::{
    ClusterStatus, DirectorSiteStatus, PvdcStatus, ResourceGroupIdentity, ResourceGroupReference,
    StatusReason,
};
pub use director_site::{
    DirectorSite, DirectorSiteCollection, DirectorSiteService, ServiceIdentity,
};
pub use json_patch::{JsonPatchOp, JsonPatchOperation, PatchFields};
pub use pvdc::{Pvdc, PvdcCollection, PvdcPrototype, PvdcProviderType};
pub use vdc::{
    Edge, Vdc, VdcAllocationModel, VdcCollection, VdcDirectorSitePrototype,
    VdcDirectorSiteReference, VdcEdgePrototype, VdcPatch, VdcProviderType,
    VdcProviderTypePrototype, VdcPvdcPrototype, VdcPvdcReference, VdcStatus, VdcType,
};
