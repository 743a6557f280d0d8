//! Server command implementation

use anyhow::Result;

pub async fn cmd_serve(host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting Paisa web server...");
    println!("   Listening: http://{}:{}", host, port);

    match std::env::var("GEMINI_API_KEY") {
        Ok(_) => println!("   🔑 GEMINI_API_KEY configured"),
        Err(_) => println!("   ⚠️  GEMINI_API_KEY not set - nudge requests will fail"),
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = paisa_server::ServerConfig::default();
    paisa_server::serve(host, port, config).await
}
