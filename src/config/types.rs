//! Configuration types for the facility rate table.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{EquipmentRates, RateCard};

/// Default length of the rolling availability window in days.
pub const DEFAULT_AVAILABILITY_WINDOW_DAYS: u32 = 30;

fn default_window_days() -> u32 {
    DEFAULT_AVAILABILITY_WINDOW_DAYS
}

fn default_prefix() -> String {
    "BK".to_string()
}

/// Metadata about the facility catalog, from `catalog.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Human-readable name of the catalog.
    pub name: String,
    /// The agency that owns the facilities.
    pub organization: String,
    /// ISO 4217 currency code prices are quoted in.
    pub currency: String,
    /// Prefix for generated booking numbers.
    #[serde(default = "default_prefix")]
    pub booking_number_prefix: String,
    /// Days covered by an availability query when the caller gives none.
    #[serde(default = "default_window_days")]
    pub availability_window_days: u32,
}

/// A rentable facility and its rate table, from `facilities/<id>.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Stable identifier used in URLs and CMS records.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown to citizens.
    #[serde(default)]
    pub description: String,
    /// Maximum occupancy, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Facility pricing.
    pub rate_card: RateCard,
    /// Equipment that can be added to a booking.
    #[serde(default)]
    pub equipment: EquipmentRates,
}

/// The complete catalog loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    metadata: CatalogMetadata,
    facilities: BTreeMap<String, FacilityConfig>,
}

impl CatalogConfig {
    /// Creates a catalog from its metadata and facilities, keyed by id.
    pub fn new(metadata: CatalogMetadata, facilities: Vec<FacilityConfig>) -> Self {
        let facilities = facilities
            .into_iter()
            .map(|facility| (facility.id.clone(), facility))
            .collect();
        Self {
            metadata,
            facilities,
        }
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns all facilities, ordered by id.
    pub fn facilities(&self) -> &BTreeMap<String, FacilityConfig> {
        &self.facilities
    }
}
