use crate::external::price_provider::{FetchError, PriceProvider};
use crate::models::{Period, PricePoint, PriceSeries};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Deserialize;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo Finance chart API. No API key required.
pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooFinanceProvider {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::new(format!("invalid base url {}: {}", base_url, e)))?;

        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (compatible; StockTracker/0.1)")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url,
        })
    }

    /// `{base}/v8/finance/chart/{ticker}` with the ticker as one encoded segment.
    fn chart_url(&self, ticker: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::new(format!("base url cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", ticker]);
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: Option<String>,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    #[serde(default)]
    meta: YahooMeta,
    // Absent when the symbol exists but the range holds no bars
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Default, Deserialize)]
struct YahooMeta {
    /// Exchange offset from UTC in seconds.
    gmtoffset: Option<i32>,
}

impl YahooMeta {
    /// Bars are dated in the exchange's local time; UTC when unknown.
    fn exchange_offset(&self) -> FixedOffset {
        self.gmtoffset
            .and_then(FixedOffset::east_opt)
            .unwrap_or(Utc.fix())
    }
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

fn is_no_data(error: &YahooError) -> bool {
    error.description.contains("No data found")
        || error.code.as_deref() == Some("Not Found")
}

/// Convert a decoded chart payload into an ascending series.
fn parse_chart(body: YahooChartResponse) -> Result<PriceSeries, FetchError> {
    if let Some(error) = body.chart.error {
        if is_no_data(&error) {
            return Ok(Vec::new());
        }
        return Err(FetchError::new(error.description));
    }

    let Some(result) = body.chart.result.and_then(|mut r| {
        if r.is_empty() { None } else { Some(r.swap_remove(0)) }
    }) else {
        return Ok(Vec::new());
    };

    let Some(timestamps) = result.timestamp else {
        return Ok(Vec::new());
    };
    let offset = result.meta.exchange_offset();

    let closes = result
        .indicators
        .quote
        .first()
        .map(|q| q.close.as_slice())
        .unwrap_or_default();

    if !closes.is_empty() && timestamps.len() != closes.len() {
        return Err(FetchError::new(
            "Timestamp and close price arrays have different lengths",
        ));
    }

    let mut points: PriceSeries = timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(timestamp, close_opt)| {
            // Skip null values (market holidays, etc.)
            let close = (*close_opt)?;
            let date = DateTime::from_timestamp(*timestamp, 0)
                .map(|dt| dt.with_timezone(&offset).date_naive())?;
            Some(PricePoint::new(date, close))
        })
        .collect();

    points.sort_by_key(|p| p.date);

    Ok(points)
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    async fn fetch_history(
        &self,
        ticker: &str,
        period: Period,
    ) -> Result<PriceSeries, FetchError> {
        let url = self.chart_url(ticker)?;
        debug!("Requesting {} ({})", url, period);

        let resp = self
            .client
            .get(url)
            .query(&[
                ("interval", "1d"),
                ("range", period.as_str()),
                ("includeAdjustedClose", "true"),
            ])
            .send()
            .await
            .map_err(|e| FetchError::new(e.to_string()))?;

        let status = resp.status();

        // Yahoo answers unknown symbols with 404 and a chart error body
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::new(format!("HTTP {}", status)));
        }

        let body: YahooChartResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::new(e.to_string()))?;

        parse_chart(body)
    }
}
