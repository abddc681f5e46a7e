use serde::Serialize;

use super::Period;

/// Current values of the ticker field and the timeline selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuery {
    pub ticker: String,
    pub period: Period,
}

impl StockQuery {
    pub fn new(ticker: impl Into<String>, period: Period) -> Self {
        Self {
            ticker: ticker.into(),
            period,
        }
    }
}

/// Values the form starts with.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormDefaults {
    pub ticker: &'static str,
    pub period: Period,
    pub placeholder: &'static str,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            ticker: "GOOGL",
            period: Period::OneYear,
            placeholder: "e.g., AAPL, TSLA, MSFT",
        }
    }
}

impl FormDefaults {
    pub fn query(&self) -> StockQuery {
        StockQuery::new(self.ticker, self.period)
    }
}
