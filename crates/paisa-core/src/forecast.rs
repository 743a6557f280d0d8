//! Forecast table and projection
//!
//! The demo forecast is a fixed template of base balances keyed by day
//! offset. Projection stamps each offset with a calendar date starting from
//! a given day and applies the cumulative income modifier uniformly.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One projected day of the balance forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Calendar date (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
    /// Base balance for this offset plus the current modifier
    pub balance: f64,
}

/// Configuration table mapping day offset to base balance
///
/// The default table is the hackathon demo data (in rupees). Tests can
/// substitute their own fixture via [`ForecastTable::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTable {
    base_balances: Vec<f64>,
}

/// Demo template: offsets 0-6.
///
/// The first entry is 35000 by product decision; an earlier draft labeled it
/// 30000 but the shipped value won.
const DEMO_TEMPLATE: [f64; 7] = [
    35000.0, 20000.0, 10000.0, -5000.0, -5000.0, -5000.0, -5000.0,
];

impl Default for ForecastTable {
    fn default() -> Self {
        Self::new(DEMO_TEMPLATE.to_vec())
    }
}

impl ForecastTable {
    /// Create a table from explicit base balances (offset = index)
    pub fn new(base_balances: Vec<f64>) -> Self {
        Self { base_balances }
    }

    /// Number of days covered by the table
    pub fn horizon(&self) -> usize {
        self.base_balances.len()
    }

    /// Project the table onto consecutive dates starting at `start`,
    /// adding `modifier` to every base balance.
    pub fn project(&self, start: NaiveDate, modifier: f64) -> Vec<ForecastEntry> {
        self.base_balances
            .iter()
            .enumerate()
            .map(|(offset, base)| ForecastEntry {
                // Days::new never fails; the horizon is a small constant
                date: start
                    .checked_add_days(Days::new(offset as u64))
                    .unwrap_or(start),
                balance: base + modifier,
            })
            .collect()
    }
}
