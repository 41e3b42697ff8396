//! Server configuration

use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, ServerCapabilities, ServerCapabilitiesResources,
    ServerCapabilitiesTools, LATEST_PROTOCOL_VERSION,
};
use serde::{Deserialize, Serialize};

/// Immutable configuration for the stock price server.
///
/// Constructed once at startup and handed to the handler and the server
/// runtime; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server name advertised during initialization
    pub name: String,

    /// Human-readable server title
    pub title: String,

    /// Server version advertised during initialization
    pub version: String,

    /// Instructions surfaced to connecting clients
    pub instructions: String,

    /// History period used when a tool caller omits one
    pub default_period: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "stock-price-server".to_string(),
            title: "Stock Price Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: "Read-only stock quote tools: current price, historical data \
                           as CSV, and two-symbol comparison. The stock://{symbol} \
                           resource describes a symbol's current price."
                .to_string(),
            default_period: "1mo".to_string(),
        }
    }
}

impl ServerConfig {
    /// Set the default history period
    pub fn with_default_period(mut self, period: impl Into<String>) -> Self {
        self.default_period = period.into();
        self
    }

    /// Initialization record advertised to the tool host.
    pub fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            server_info: Implementation {
                name: self.name.clone(),
                title: Some(self.title.clone()),
                version: self.version.clone(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ServerCapabilitiesTools { list_changed: None }),
                resources: Some(ServerCapabilitiesResources {
                    list_changed: None,
                    subscribe: None,
                }),
                ..Default::default()
            },
            meta: None,
            instructions: Some(self.instructions.clone()),
            protocol_version: LATEST_PROTOCOL_VERSION.to_string(),
        }
    }
}
