//! Market-data provider boundary

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One dated OHLCV row of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// General info record for a symbol, reduced to the one field read here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolInfo {
    /// Current regular-market price, when the provider publishes one.
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<f64>,
}

/// Boundary to the external market-data source.
///
/// Symbols and period tokens are opaque; their vocabulary belongs to the
/// provider and is never validated on this side. Any call may fault.
/// An empty row set is data, not a fault.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Most recent one-day trading window for the symbol. May be empty.
    async fn recent_daily_bars(&self, symbol: &str) -> Result<Vec<Bar>>;

    /// General info record for the symbol.
    async fn info(&self, symbol: &str) -> Result<SymbolInfo>;

    /// Historical bars for a provider-defined period token. May be empty.
    async fn history(&self, symbol: &str, period: &str) -> Result<Vec<Bar>>;
}
