//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `nudge` - One-off nudge generation command
//! - `serve` - Web server command

pub mod nudge;
pub mod serve;

// Re-export command functions for main.rs
pub use nudge::*;
pub use serve::*;
