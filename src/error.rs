//! Error types for the booking engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a booking or
//! computing availability.

use thiserror::Error;

/// The main error type for the booking engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use booking_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Facility id was not found in the rate table.
    #[error("Facility not found: {facility_id}")]
    FacilityNotFound {
        /// The facility id that was not found.
        facility_id: String,
    },

    /// Requested equipment is not offered by the facility.
    #[error("Equipment '{equipment}' is not available for facility '{facility_id}'")]
    EquipmentNotFound {
        /// The facility the equipment was requested for.
        facility_id: String,
        /// The equipment name that was not found.
        equipment: String,
    },

    /// The requested date/time range has no positive duration.
    #[error("Invalid time range: {message}")]
    InvalidTimeRange {
        /// A description of what made the range invalid.
        message: String,
    },

    /// A booking number did not match the expected format.
    #[error("Invalid booking number '{value}': {message}")]
    InvalidBookingNumber {
        /// The rejected booking number.
        value: String,
        /// A description of the format problem.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
