//! HTTP request handlers organized by domain

pub mod forecast;
pub mod income;
pub mod nudge;

// Re-export all handlers for use in router
pub use forecast::*;
pub use income::*;
pub use nudge::*;
