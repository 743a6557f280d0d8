//! Paisa Core Library
//!
//! Shared functionality for the Paisa cashflow demo:
//! - Forecast table (offset → base balance) and projection
//! - Balance ledger holding the cumulative income modifier
//! - Nudge prompt context and rendering
//! - Pluggable nudge backends (Gemini, mock)

pub mod ai;
pub mod error;
pub mod forecast;
pub mod ledger;
pub mod nudge;

pub use ai::{GeminiBackend, MockBackend, NudgeBackend, NudgeClient};
pub use error::{Error, Result};
pub use forecast::{ForecastEntry, ForecastTable};
pub use ledger::BalanceLedger;
pub use nudge::NudgeContext;
