//! MCP server surface for the stock quote service
//!
//! Registers three tools and one resource with the MCP runtime:
//!
//! - `get_stock_price(symbol) -> float` (the sentinel `-1.0` on failure)
//! - `get_stock_history(symbol, period = "1mo") -> string` (CSV or message)
//! - `compare_stocks(symbol1, symbol2) -> string`
//! - resource template `stock://{symbol}` -> price description string
//!
//! Handlers never let a fault cross the tool boundary; every outcome is a
//! successful response whose content encodes failure in-band.

pub mod config;
pub mod handler;
pub mod logging;
pub mod resource;
pub mod tools;

// Re-export main types for convenience
pub use config::ServerConfig;
pub use handler::StockServerHandler;
pub use tools::{CompareStocksTool, GetStockHistoryTool, GetStockPriceTool, StockTools};
