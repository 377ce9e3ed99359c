// Number Words - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use number_words::{api, init_logging, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config.log_filter);

    println!("🌐 Number Words - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let app = api::router();

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server_addr))?;

    info!(addr = %config.server_addr, "server listening");
    println!("\n🚀 Server running on http://{}", config.server_addr);
    println!("   API: http://{}/api/words/1234", config.server_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
