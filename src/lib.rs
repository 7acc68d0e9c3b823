//! Pricing and availability engine for government facility bookings.
//!
//! This crate prices facility bookings against hourly, half-day and
//! full-day rate tiers, computes free time slots over a rolling window from
//! existing bookings, and issues booking numbers. An axum API exposes all
//! three to the booking front end.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
