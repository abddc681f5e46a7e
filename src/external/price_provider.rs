use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Period, PriceSeries};

/// Any failure while fetching a price history. Carries the description only;
/// callers treat every cause the same way.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FetchError(pub String);

impl FetchError {
    pub fn new(description: impl Into<String>) -> Self {
        FetchError(description.into())
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Daily closes for `ticker` over `period`, ascending by date.
    /// An empty series means the provider has no data for the query.
    async fn fetch_history(
        &self,
        ticker: &str,
        period: Period,
    ) -> Result<PriceSeries, FetchError>;
}
