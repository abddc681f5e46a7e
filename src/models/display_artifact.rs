use serde::Serialize;

use super::PricePoint;

pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a stock ticker to view data.";
pub const FETCH_ERROR_PREFIX: &str = "An error occurred: ";
pub const NO_DATA_PREFIX: &str = "No data found for stock ticker: ";

pub const SERIES_LABEL: &str = "Close Price";
pub const X_AXIS_LABEL: &str = "Date";
pub const Y_AXIS_LABEL: &str = "Close Price (USD)";

/// How a message should be styled by the renderer.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StyleHint {
    Neutral,
    Error,
}

/// Line chart description, points are plotted verbatim.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub series_label: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub points: Vec<PricePoint>,
}

/// Output of one dashboard update: either a chart or a message.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayArtifact {
    Chart(ChartSpec),
    Message { text: String, style: StyleHint },
}

impl DisplayArtifact {
    pub fn message(text: impl Into<String>, style: StyleHint) -> Self {
        DisplayArtifact::Message {
            text: text.into(),
            style,
        }
    }
}
