//! Configuration loading for the booking engine.
//!
//! This module loads the facility catalog from YAML files: catalog
//! metadata plus one rate table per facility.
//!
//! # Example
//!
//! ```no_run
//! use booking_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded catalog: {}", config.catalog().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CatalogConfig, CatalogMetadata, DEFAULT_AVAILABILITY_WINDOW_DAYS, FacilityConfig};
