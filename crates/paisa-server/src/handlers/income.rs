//! Income handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AppState;

/// Request body for adding income
#[derive(Debug, Deserialize)]
pub struct IncomeRequest {
    /// Amount to add; negative and zero are accepted
    pub amount: f64,
}

/// Response for the income endpoint
#[derive(Debug, Serialize)]
pub struct IncomeResponse {
    pub message: String,
    pub new_modifier: f64,
}

/// POST /api/income - Add an amount to the shared modifier
///
/// Additions accumulate for the process lifetime and apply to every
/// subsequent forecast read. A malformed body is rejected by the `Json`
/// extractor before this handler runs.
pub async fn add_income(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IncomeRequest>,
) -> Json<IncomeResponse> {
    let new_modifier = state.ledger.add(request.amount);
    info!(amount = request.amount, new_modifier, "Income added");

    Json(IncomeResponse {
        message: "Income added".to_string(),
        new_modifier,
    })
}
