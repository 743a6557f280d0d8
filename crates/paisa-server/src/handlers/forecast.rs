//! Forecast handler

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;
use serde::Serialize;

use crate::AppState;
use paisa_core::ForecastEntry;

/// Response for the forecast endpoint
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub forecast: Vec<ForecastEntry>,
}

/// GET /api/forecast - Project the forecast table from today
///
/// Dates are computed at request time; balances carry the current income
/// modifier. Always succeeds.
pub async fn get_forecast(State(state): State<Arc<AppState>>) -> Json<ForecastResponse> {
    let today = Local::now().date_naive();
    let forecast = state.forecast.project(today, state.ledger.modifier());

    Json(ForecastResponse { forecast })
}
