//! Maps the current form values to the artifact shown under the form.
//!
//! Order of checks: blank ticker, fetch failure, empty series, chart.
//! Only display strings are uppercased; the provider receives the ticker
//! exactly as typed. One fetch per call, no retries.

use tracing::{info, warn};

use crate::external::price_provider::PriceProvider;
use crate::models::{
    ChartSpec, DisplayArtifact, Period, PriceSeries, StyleHint, EMPTY_TICKER_MESSAGE,
    FETCH_ERROR_PREFIX, NO_DATA_PREFIX, SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL,
};

pub async fn update_view(
    provider: &dyn PriceProvider,
    ticker: &str,
    period: Period,
) -> DisplayArtifact {
    if ticker.trim().is_empty() {
        return DisplayArtifact::message(EMPTY_TICKER_MESSAGE, StyleHint::Neutral);
    }

    let series = match provider.fetch_history(ticker, period).await {
        Ok(series) => series,
        Err(e) => {
            warn!("Failed to fetch price history for {:?} ({}): {}", ticker, period, e);
            return DisplayArtifact::message(
                format!("{}{}", FETCH_ERROR_PREFIX, e),
                StyleHint::Error,
            );
        }
    };

    let display_ticker = ticker.to_uppercase();

    if series.is_empty() {
        info!("No price data for {} ({})", display_ticker, period);
        return DisplayArtifact::message(
            format!("{}{}", NO_DATA_PREFIX, display_ticker),
            StyleHint::Neutral,
        );
    }

    info!("Charting {} closes for {} ({})", series.len(), display_ticker, period);
    DisplayArtifact::Chart(build_chart(&display_ticker, period, series))
}

fn build_chart(display_ticker: &str, period: Period, series: PriceSeries) -> ChartSpec {
    ChartSpec {
        title: format!("Stock Data for {} ({})", display_ticker, period),
        series_label: SERIES_LABEL.to_string(),
        x_axis_label: X_AXIS_LABEL.to_string(),
        y_axis_label: Y_AXIS_LABEL.to_string(),
        points: series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::price_provider::FetchError;
    use crate::models::PricePoint;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct FixedProvider(Result<PriceSeries, FetchError>);

    #[async_trait]
    impl PriceProvider for FixedProvider {
        async fn fetch_history(
            &self,
            _ticker: &str,
            _period: Period,
        ) -> Result<PriceSeries, FetchError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_chart_labels() {
        let provider = FixedProvider(Ok(vec![PricePoint::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            170.5,
        )]));

        let artifact = update_view(&provider, "msft", Period::FiveYears).await;
        let DisplayArtifact::Chart(chart) = artifact else {
            panic!("expected chart, got {:?}", artifact);
        };
        assert_eq!(chart.title, "Stock Data for MSFT (5y)");
        assert_eq!(chart.series_label, "Close Price");
        assert_eq!(chart.x_axis_label, "Date");
        assert_eq!(chart.y_axis_label, "Close Price (USD)");
    }

    #[tokio::test]
    async fn test_error_message_is_error_styled() {
        let provider = FixedProvider(Err(FetchError::new("HTTP 500 Internal Server Error")));
        let artifact = update_view(&provider, "tsla", Period::OneMonth).await;
        assert_eq!(
            artifact,
            DisplayArtifact::message(
                "An error occurred: HTTP 500 Internal Server Error",
                StyleHint::Error
            )
        );
    }

    #[tokio::test]
    async fn test_empty_series_is_neutral() {
        let provider = FixedProvider(Ok(Vec::new()));
        let artifact = update_view(&provider, "zzzz", Period::Max).await;
        assert_eq!(
            artifact,
            DisplayArtifact::message("No data found for stock ticker: ZZZZ", StyleHint::Neutral)
        );
    }
}
