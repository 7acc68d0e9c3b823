//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the facility
//! catalog from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::RateCard;

use super::types::{CatalogConfig, CatalogMetadata, FacilityConfig};

/// Loads and provides access to the facility catalog.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── catalog.yaml        # Catalog metadata
/// └── facilities/
///     └── community_hall.yaml   # One rate table per facility
/// ```
///
/// # Example
///
/// ```no_run
/// use booking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let hall = loader.get_facility("community_hall").unwrap();
/// println!("Hourly rate: {}", hall.rate_card.hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CatalogConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any required file is missing, any file contains
    /// invalid YAML, two facility files share an id, or a rate card is
    /// invalid (negative rate, or a half-day package longer than the
    /// full-day package).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CatalogMetadata>(&path.join("catalog.yaml"))?;
        let facilities = Self::load_facilities(&path.join("facilities"))?;

        debug!(
            catalog = %metadata.name,
            facilities = facilities.len(),
            "Loaded facility catalog"
        );

        Ok(Self {
            config: CatalogConfig::new(metadata, facilities),
        })
    }

    /// Builds a loader from already-parsed configuration.
    pub fn from_config(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all facility files from the facilities directory.
    fn load_facilities(dir: &Path) -> EngineResult<Vec<FacilityConfig>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut facilities = Vec::new();
        let mut seen = HashSet::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }

            let facility = Self::load_yaml::<FacilityConfig>(&path)?;
            let path_str = path.display().to_string();

            Self::validate_rate_card(&facility.rate_card, &path_str)?;

            if !seen.insert(facility.id.clone()) {
                return Err(EngineError::ConfigParseError {
                    path: path_str,
                    message: format!("duplicate facility id '{}'", facility.id),
                });
            }

            facilities.push(facility);
        }

        if facilities.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no facility files found)", dir_str),
            });
        }

        Ok(facilities)
    }

    fn validate_rate_card(rate_card: &RateCard, path: &str) -> EngineResult<()> {
        if rate_card.is_valid() {
            Ok(())
        } else {
            Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "rate card must have non-negative rates and half_day_hours <= full_day_hours"
                    .to_string(),
            })
        }
    }

    /// Returns the underlying catalog configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the catalog metadata.
    pub fn catalog(&self) -> &CatalogMetadata {
        self.config.metadata()
    }

    /// Returns every facility, ordered by id.
    pub fn facilities(&self) -> impl Iterator<Item = &FacilityConfig> {
        self.config.facilities().values()
    }

    /// Gets a facility by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use booking_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let facility = loader.get_facility("community_hall")?;
    /// println!("Facility: {}", facility.name);
    /// # Ok::<(), booking_engine::error::EngineError>(())
    /// ```
    pub fn get_facility(&self, facility_id: &str) -> EngineResult<&FacilityConfig> {
        self.config
            .facilities()
            .get(facility_id)
            .ok_or_else(|| EngineError::FacilityNotFound {
                facility_id: facility_id.to_string(),
            })
    }
}
