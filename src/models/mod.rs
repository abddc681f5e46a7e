mod display_artifact;
mod period;
mod price_point;
mod query;

pub use display_artifact::{
    ChartSpec, DisplayArtifact, StyleHint, EMPTY_TICKER_MESSAGE, FETCH_ERROR_PREFIX,
    NO_DATA_PREFIX, SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL,
};
pub use period::Period;
pub use price_point::{PricePoint, PriceSeries};
pub use query::{FormDefaults, StockQuery};
