use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{DisplayArtifact, Period, StockQuery};
use crate::services::dashboard_service;
use crate::state::AppState;
use crate::views::{fragment, layout};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/view", get(get_view_fragment))
        .route("/api/view", get(get_view_json))
}

/// Raw query string values; `period` is checked against the six tokens.
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    pub ticker: Option<String>,
    pub period: Option<String>,
}

impl TryFrom<ViewParams> for StockQuery {
    type Error = AppError;

    fn try_from(params: ViewParams) -> Result<Self, Self::Error> {
        let period = match params.period.as_deref() {
            Some(raw) => raw.parse::<Period>()?,
            None => Period::default(),
        };
        Ok(StockQuery::new(params.ticker.unwrap_or_default(), period))
    }
}

async fn artifact_for(state: &AppState, query: &StockQuery) -> DisplayArtifact {
    dashboard_service::update_view(state.price_provider.as_ref(), &query.ticker, query.period).await
}

async fn index(State(state): State<AppState>) -> Html<String> {
    info!("GET / - Rendering dashboard");
    let query = state.defaults.query();
    let artifact = artifact_for(&state, &query).await;
    Html(layout::render_page(&state.defaults, &fragment::render_artifact(&artifact)))
}

async fn get_view_fragment(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Html<String>, AppError> {
    let query = StockQuery::try_from(params)?;
    info!("GET /view - ticker={:?} period={}", query.ticker, query.period);
    let artifact = artifact_for(&state, &query).await;
    Ok(Html(fragment::render_artifact(&artifact)))
}

async fn get_view_json(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Json<DisplayArtifact>, AppError> {
    let query = StockQuery::try_from(params)?;
    info!("GET /api/view - ticker={:?} period={}", query.ticker, query.period);
    Ok(Json(artifact_for(&state, &query).await))
}
