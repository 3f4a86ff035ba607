use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ── Regions ─────────────────────────────────────────────────────────

/// From `GET /director_site_regions`, keyed by region name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSiteRegions {
    #[serde(default)]
    pub director_site_regions: HashMap<String, DirectorSiteRegion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSiteRegion {
    #[serde(default)]
    pub data_centers: Vec<DataCenterInfo>,
    /// Public API endpoint for the region.
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCenterInfo {
    pub display_name: Option<String>,
    pub name: Option<String>,
    /// Uplink speed in Mbps.
    pub uplink_speed: Option<String>,
}

// ── Host profiles ───────────────────────────────────────────────────

/// From `GET /director_site_host_profiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSiteHostProfiles {
    #[serde(default)]
    pub director_site_host_profiles: Vec<DirectorSiteHostProfile>,
}

/// Bare-metal host configuration a cluster can be built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSiteHostProfile {
    pub id: Option<String>,
    /// Core count.
    pub cpu: Option<i64>,
    pub family: Option<String>,
    pub processor: Option<String>,
    /// Memory in GB.
    pub ram: Option<i64>,
    pub socket: Option<i64>,
    /// Clock speed in GHz.
    pub speed: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

// ── Password ────────────────────────────────────────────────────────

/// Generated Cloud Director organization admin password.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPassword {
    pub password: Option<String>,
}

impl std::fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewPassword")
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ── Pricing ─────────────────────────────────────────────────────────

/// From `GET /director_site_pricing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSitePricingInfo {
    #[serde(default)]
    pub director_site_pricing: Vec<PriceInfo>,
}

/// Price of one billing metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub metric: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub price_list: Vec<PriceList>,
}

/// Per-country prices of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceList {
    pub country: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub prices: Vec<PriceTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub quantity_tier: Option<i64>,
    pub price: Option<f64>,
}

/// Estimated monthly cost of a prospective director site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSitePriceQuote {
    pub currency: Option<String>,
    pub base_charge: Option<PriceQuoteCharge>,
    #[serde(default)]
    pub clusters: Vec<ClusterPriceQuote>,
    pub total: Option<f64>,
}

/// A priced line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuoteCharge {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub price: Option<f64>,
}

/// Quote for one cluster of the prospective site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPriceQuote {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub items: Vec<PriceQuoteCharge>,
}
