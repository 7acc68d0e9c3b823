//! Performance benchmarks for the booking engine.
//!
//! Covers direct pricing and slot calculation as well as full HTTP round
//! trips through the router:
//! - Single-day quote through the pricing optimizer
//! - 30-day availability window with a realistic booking load
//! - Batch of 100 quotes through `/quote`
//!
//! Run with: `cargo bench`

use chrono::{Duration, NaiveDate, NaiveTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use booking_engine::api::{AppState, QuoteRequest, create_router};
use booking_engine::calculation::{
    PricingRequest, calculate_availability, calculate_price, select_day_tiers,
};
use booking_engine::config::ConfigLoader;
use booking_engine::models::{BookingRecord, BookingStatus, RateCard};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/default").expect("Failed to load config")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
}

/// Two bookings per day, one of them rejected, plus a weekly overnight event.
fn create_bookings(days: i64) -> Vec<BookingRecord> {
    let mut bookings = Vec::new();
    for offset in 0..days {
        let date = window_start() + Duration::days(offset);
        bookings.push(BookingRecord {
            id: Some(format!("morning_{}", offset)),
            start_date: date,
            end_date: date,
            start_time: time(9, 0),
            end_time: time(11, 30),
            booking_status: BookingStatus::Approved,
        });
        bookings.push(BookingRecord {
            id: Some(format!("evening_{}", offset)),
            start_date: date,
            end_date: date,
            start_time: time(18, 0),
            end_time: time(21, 0),
            booking_status: if offset % 2 == 0 {
                BookingStatus::Pending
            } else {
                BookingStatus::Rejected
            },
        });
        if offset % 7 == 0 {
            bookings.push(BookingRecord {
                id: Some(format!("overnight_{}", offset)),
                start_date: date,
                end_date: date + Duration::days(1),
                start_time: time(22, 0),
                end_time: time(2, 0),
                booking_status: BookingStatus::Approved,
            });
        }
    }
    bookings
}

fn quote_request(days: i64) -> QuoteRequest {
    QuoteRequest {
        facility_id: "community_hall".to_string(),
        start_date: window_start(),
        end_date: Some(window_start() + Duration::days(days - 1)),
        start_time: time(9, 0),
        end_time: time(21, 0),
        equipment: vec!["projector".to_string(), "sound_system".to_string()],
    }
}

fn bench_tier_selection(c: &mut Criterion) {
    let rate_card = RateCard::new(Decimal::from(50), Decimal::from(200), Decimal::from(300));
    let mut group = c.benchmark_group("tier_selection");

    for hours in [3u32, 8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(hours), &hours, |b, &hours| {
            b.iter(|| black_box(select_day_tiers(hours, &rate_card, None, 1)))
        });
    }

    group.finish();
}

fn bench_single_quote(c: &mut Criterion) {
    let config = load_config();
    let facility = config.get_facility("community_hall").unwrap().clone();
    let request: PricingRequest = quote_request(1).into();

    c.bench_function("single_day_quote", |b| {
        b.iter(|| black_box(calculate_price(&facility, &request)))
    });
}

fn bench_availability_window(c: &mut Criterion) {
    let bookings = create_bookings(30);

    c.bench_function("availability_30_days", |b| {
        b.iter(|| black_box(calculate_availability(&bookings, window_start(), 30)))
    });
}

fn bench_batch_quotes(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_config());

    let requests: Vec<String> = (0..100)
        .map(|i| {
            let mut request = quote_request(1 + (i % 5));
            if i % 3 == 0 {
                request.facility_id = "meeting_room".to_string();
                request.equipment = vec!["whiteboard".to_string()];
            }
            serde_json::to_string(&request).unwrap()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("quote_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/quote")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tier_selection,
    bench_single_quote,
    bench_availability_window,
    bench_batch_quotes,
);

criterion_main!(benches);
