//! HTTP request handlers for the booking engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PricingRequest, calculate_availability, calculate_price, parse_booking_number};
use crate::error::EngineError;
use crate::models::{AuditTrace, PriceQuote};

use super::request::{AvailabilityRequest, QuoteRequest};
use super::response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, BookingNumberResponse, FacilitySummary,
};
use super::state::AppState;

/// Longest availability window a caller may request, in days.
pub const MAX_AVAILABILITY_DAYS: u32 = 366;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/facilities", get(list_facilities_handler))
        .route("/facilities/:facility_id", get(get_facility_handler))
        .route(
            "/facilities/:facility_id/availability",
            post(availability_handler),
        )
        .route("/quote", post(quote_handler))
        .route("/booking-numbers", post(allocate_booking_number_handler))
        .route(
            "/booking-numbers/:booking_number",
            get(parse_booking_number_handler),
        )
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for GET /facilities.
async fn list_facilities_handler(State(state): State<AppState>) -> Response {
    let facilities: Vec<FacilitySummary> = state
        .config()
        .facilities()
        .map(FacilitySummary::from)
        .collect();
    json_response(StatusCode::OK, facilities)
}

/// Handler for GET /facilities/:facility_id.
async fn get_facility_handler(
    State(state): State<AppState>,
    Path(facility_id): Path<String>,
) -> Response {
    match state.config().get_facility(&facility_id) {
        Ok(facility) => json_response(StatusCode::OK, facility),
        Err(err) => error_response(err),
    }
}

/// Handler for POST /quote.
///
/// Prices a booking request and returns a [`PriceQuote`].
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let facility = match state.config().get_facility(&request.facility_id) {
        Ok(facility) => facility,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                facility_id = %request.facility_id,
                "Facility not found"
            );
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    let facility_id = request.facility_id.clone();
    let pricing_request: PricingRequest = request.into();

    match calculate_price(facility, &pricing_request) {
        Ok(calculation) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                facility_id = %facility_id,
                days = calculation.days.len(),
                total_price = %calculation.result.total_price,
                duration_us = duration.as_micros(),
                "Quote completed successfully"
            );

            let quote = PriceQuote {
                quote_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                facility_id,
                pricing: calculation.result,
                audit_trace: AuditTrace {
                    steps: calculation.audit_steps,
                    duration_us: duration.as_micros() as u64,
                },
            };
            json_response(StatusCode::OK, quote)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /facilities/:facility_id/availability.
///
/// The body carries the facility's bookings; the response lists free slots
/// for each day of the window.
async fn availability_handler(
    State(state): State<AppState>,
    Path(facility_id): Path<String>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        facility_id = %facility_id,
        "Processing availability request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = state.config().get_facility(&facility_id) {
        return error_response(err);
    }

    let days = request
        .days
        .unwrap_or(state.config().catalog().availability_window_days);
    if days == 0 || days > MAX_AVAILABILITY_DAYS {
        warn!(correlation_id = %correlation_id, days, "Availability window out of range");
        return json_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error(format!(
                "days must be between 1 and {}, got {}",
                MAX_AVAILABILITY_DAYS, days
            )),
        );
    }

    let window_start = request
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());
    let availability = calculate_availability(&request.bookings, window_start, days);

    info!(
        correlation_id = %correlation_id,
        facility_id = %facility_id,
        bookings = request.bookings.len(),
        fully_booked_days = availability.iter().filter(|d| d.is_fully_booked).count(),
        "Availability completed successfully"
    );

    json_response(
        StatusCode::OK,
        AvailabilityResponse {
            facility_id,
            window_start,
            days: availability,
        },
    )
}

/// Handler for POST /booking-numbers.
async fn allocate_booking_number_handler(State(state): State<AppState>) -> Response {
    let number = state
        .booking_numbers()
        .allocate(Local::now().date_naive());
    info!(booking_number = %number, "Allocated booking number");

    json_response(
        StatusCode::CREATED,
        BookingNumberResponse {
            booking_number: number.to_string(),
            sequence: number.sequence,
        },
    )
}

/// Handler for GET /booking-numbers/:booking_number.
async fn parse_booking_number_handler(Path(booking_number): Path<String>) -> Response {
    match parse_booking_number(&booking_number) {
        Ok(number) => json_response(StatusCode::OK, number),
        Err(err) => error_response(err),
    }
}
