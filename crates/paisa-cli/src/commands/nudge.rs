//! Nudge command implementation

use anyhow::{Context, Result};
use paisa_core::{NudgeBackend, NudgeClient, NudgeContext};

/// Generate one nudge with the demo context and print it
pub async fn cmd_nudge() -> Result<()> {
    let client = NudgeClient::from_env();
    let context = NudgeContext::default();

    println!("🔍 Generating nudge (model: {})...\n", client.model());

    let message = client
        .generate(&context.render())
        .await
        .context("Failed to generate nudge")?;

    println!("{}", message);
    println!("\nRisk level: {}", context.risk_level);

    Ok(())
}
