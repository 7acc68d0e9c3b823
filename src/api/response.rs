//! Response types for the booking engine API.
//!
//! This module defines the JSON response bodies and the mapping from
//! engine errors to HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::FacilityConfig;
use crate::error::EngineError;
use crate::models::{DayAvailability, RateCard};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::FacilityNotFound { facility_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "FACILITY_NOT_FOUND",
                    format!("Facility not found: {}", facility_id),
                    format!("No rate table is configured for facility '{}'", facility_id),
                ),
            },
            EngineError::EquipmentNotFound {
                facility_id,
                equipment,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "EQUIPMENT_NOT_FOUND",
                    format!("Equipment not available: {}", equipment),
                    format!(
                        "Facility '{}' does not offer equipment '{}'",
                        facility_id, equipment
                    ),
                ),
            },
            EngineError::InvalidTimeRange { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_RANGE",
                    format!("Invalid time range: {}", message),
                    "The booking must end after it starts",
                ),
            },
            EngineError::InvalidBookingNumber { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_BOOKING_NUMBER",
                    format!("Invalid booking number '{}'", value),
                    message,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

/// A facility as listed by `GET /facilities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilitySummary {
    /// Facility identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Maximum occupancy, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Facility pricing.
    pub rate_card: RateCard,
    /// Names of the equipment that can be added.
    pub equipment: Vec<String>,
}

impl From<&FacilityConfig> for FacilitySummary {
    fn from(facility: &FacilityConfig) -> Self {
        Self {
            id: facility.id.clone(),
            name: facility.name.clone(),
            capacity: facility.capacity,
            rate_card: facility.rate_card.clone(),
            equipment: facility.equipment.keys().cloned().collect(),
        }
    }
}

/// Body of `POST /facilities/:facility_id/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The facility summarised.
    pub facility_id: String,
    /// First day of the window.
    pub window_start: NaiveDate,
    /// One entry per day of the window.
    pub days: Vec<DayAvailability>,
}

/// Body of `POST /booking-numbers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingNumberResponse {
    /// The formatted booking number.
    pub booking_number: String,
    /// Its sequence component.
    pub sequence: u64,
}
