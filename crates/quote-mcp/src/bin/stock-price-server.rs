//! Stock price MCP server
//!
//! Serves the stock quote tools and the `stock://{symbol}` resource over
//! stdio.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin stock-price-server -p quote-mcp
//! ```

use quote_core::{QuoteService, YahooProvider};
use quote_mcp::{ServerConfig, StockServerHandler};
use rust_mcp_sdk::mcp_server::server_runtime;
use rust_mcp_sdk::{McpServer, StdioTransport, TransportOptions};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    quote_mcp::logging::init_tracing();

    let config = ServerConfig::default();
    info!("Starting {} v{}", config.name, config.version);

    let service = QuoteService::new(YahooProvider::new());
    let handler = StockServerHandler::new(service, config.clone());

    let transport = StdioTransport::new(TransportOptions::default())
        .map_err(|e| anyhow::anyhow!("failed to create stdio transport: {e}"))?;

    let server = server_runtime::create_server(config.initialize_result(), transport, handler);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;

    Ok(())
}
