//! Read-only stock quote operations over a market-data provider
//!
//! This crate implements the domain layer of the stock price server:
//!
//! - `MarketDataProvider`: boundary trait to the external market-data source
//! - `YahooProvider`: Yahoo Finance implementation of that boundary
//! - `QuoteService`: price resolution with a two-stage fallback, historical
//!   series formatting, and two-symbol comparison
//!
//! Every public `QuoteService` operation is total: provider faults never
//! cross the operation boundary. Failures are reported in-band, either as
//! the `UNRESOLVED_PRICE` sentinel or as a descriptive message string.
//!
//! # Example
//!
//! ```rust,ignore
//! use quote_core::{QuoteService, YahooProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = QuoteService::new(YahooProvider::new());
//!     let price = service.resolve_price("AAPL").await;
//!     if price >= 0.0 {
//!         println!("AAPL: {price}");
//!     }
//! }
//! ```

pub mod api;
pub mod error;
pub mod history;
pub mod provider;
pub mod service;

// Re-export main types for convenience
pub use api::YahooProvider;
pub use error::{QuoteError, Result};
pub use provider::{Bar, MarketDataProvider, SymbolInfo};
pub use service::{QuoteService, UNRESOLVED_PRICE};
