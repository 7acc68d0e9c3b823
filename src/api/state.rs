//! Application state for the booking engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::BookingNumberAllocator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded facility catalog and the booking number allocator.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    booking_numbers: Arc<BookingNumberAllocator>,
}

impl AppState {
    /// Creates application state whose booking numbers start at 1.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_last_booking_number(config, 0)
    }

    /// Creates application state whose next booking number follows
    /// `last_issued`.
    pub fn with_last_booking_number(config: ConfigLoader, last_issued: u64) -> Self {
        let allocator =
            BookingNumberAllocator::new(config.catalog().booking_number_prefix.clone(), last_issued);
        Self {
            config: Arc::new(config),
            booking_numbers: Arc::new(allocator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared booking number allocator.
    pub fn booking_numbers(&self) -> &BookingNumberAllocator {
        &self.booking_numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_allocator() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::with_last_booking_number(config, 10);
        let clone = state.clone();
        let day = chrono::NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();

        assert_eq!(state.booking_numbers().allocate(day).sequence, 11);
        assert_eq!(clone.booking_numbers().allocate(day).sequence, 12);
        assert_eq!(clone.booking_numbers().prefix(), "GOV");
    }
}
