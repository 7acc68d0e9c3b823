//! HTTP API module for the booking engine.
//!
//! This module provides the REST endpoints the booking front end and admin
//! dashboard call for facility rate tables, price quotes, availability and
//! booking numbers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_AVAILABILITY_DAYS, create_router};
pub use request::{AvailabilityRequest, QuoteRequest};
pub use response::{ApiError, AvailabilityResponse, BookingNumberResponse, FacilitySummary};
pub use state::AppState;
