#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use stock_tracker::external::price_provider::{FetchError, PriceProvider};
use stock_tracker::models::{Period, PricePoint, PriceSeries};

/// Provider returning a fixed response and recording every call.
pub struct MockProvider {
    response: Result<PriceSeries, FetchError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, Period)>>,
}

impl MockProvider {
    pub fn returning(series: PriceSeries) -> Self {
        Self::with_response(Ok(series))
    }

    pub fn failing(description: &str) -> Self {
        Self::with_response(Err(FetchError::new(description)))
    }

    fn with_response(response: Result<PriceSeries, FetchError>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, Period)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceProvider for MockProvider {
    async fn fetch_history(
        &self,
        ticker: &str,
        period: Period,
    ) -> Result<PriceSeries, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((ticker.to_string(), period));
        self.response.clone()
    }
}

pub fn three_day_series() -> PriceSeries {
    vec![
        PricePoint::new(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 100.0),
        PricePoint::new(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), 101.0),
        PricePoint::new(NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(), 99.0),
    ]
}
