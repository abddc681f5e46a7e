use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// A single daily closing price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Closing prices ordered by ascending date. May be empty.
pub type PriceSeries = Vec<PricePoint>;
