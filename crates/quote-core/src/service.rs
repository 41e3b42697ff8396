//! Quote resolution, comparison, and formatting
//!
//! `QuoteService` wraps a market-data provider behind four read-only
//! operations. Internally everything runs on `Result`; each public
//! operation maps any failure to its in-band form at the boundary, so no
//! provider fault ever reaches a caller as an error.

use tracing::{debug, warn};

use crate::error::Result;
use crate::history;
use crate::provider::MarketDataProvider;

/// Sentinel price meaning "unresolvable".
///
/// Callers detect failure with `price < 0.0`. A zero price from the
/// provider is a real quote and is returned as-is.
pub const UNRESOLVED_PRICE: f64 = -1.0;

/// Read-only quote operations over a market-data provider.
pub struct QuoteService<P> {
    provider: P,
}

impl<P: MarketDataProvider> QuoteService<P> {
    /// Create a new quote service over the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve the current price for a symbol.
    ///
    /// Two strategies run in order: the closing value of the last row of
    /// the most recent one-day trading window, then the provider's
    /// regular-market-price info field. If neither yields a value, or the
    /// provider faults at any stage, this returns [`UNRESOLVED_PRICE`].
    pub async fn resolve_price(&self, symbol: &str) -> f64 {
        match self.lookup_price(symbol).await {
            Ok(Some(price)) => price,
            Ok(None) => {
                debug!("no price data for {}", symbol);
                UNRESOLVED_PRICE
            }
            Err(err) => {
                warn!("price lookup failed for {}: {}", symbol, err);
                UNRESOLVED_PRICE
            }
        }
    }

    async fn lookup_price(&self, symbol: &str) -> Result<Option<f64>> {
        let bars = self.provider.recent_daily_bars(symbol).await?;
        if let Some(last) = bars.last() {
            return Ok(Some(last.close));
        }

        let info = self.provider.info(symbol).await?;
        Ok(info.regular_market_price)
    }

    /// Describe the current price as a human-readable string.
    pub async fn describe_price(&self, symbol: &str) -> String {
        let price = self.resolve_price(symbol).await;
        if price < 0.0 {
            format!("Error: Could not retrieve price for symbol '{symbol}'.")
        } else {
            format!("The current price of '{symbol}' is ${price:.2}.")
        }
    }

    /// Fetch the historical series for a symbol over a period token.
    ///
    /// Returns CSV text, a "no data" message for an empty-but-valid
    /// result, or an error message carrying the provider's fault text.
    /// The three outcomes are distinguishable only by content.
    pub async fn fetch_history(&self, symbol: &str, period: &str) -> String {
        match self.provider.history(symbol, period).await {
            Ok(bars) if bars.is_empty() => {
                debug!("empty history for {} over {}", symbol, period);
                format!(
                    "No historical data found for symbol '{symbol}' with period '{period}'"
                )
            }
            Ok(bars) => history::to_csv(&bars),
            Err(err) => {
                warn!("history fetch failed for {} over {}: {}", symbol, period, err);
                format!("Error fetching historical data: {err}")
            }
        }
    }

    /// Compare the current prices of two symbols.
    ///
    /// The two lookups are independent; nothing guarantees they reflect
    /// the same instant. Equality is exact floating-point equality, which
    /// in practice only occurs when both resolve to the identical quote.
    pub async fn compare(&self, symbol1: &str, symbol2: &str) -> String {
        let (price1, price2) =
            tokio::join!(self.resolve_price(symbol1), self.resolve_price(symbol2));

        if price1 < 0.0 || price2 < 0.0 {
            return format!(
                "Error: Could not retrieve data for comparison of '{symbol1}' and '{symbol2}'."
            );
        }

        if price1 > price2 {
            format!("{symbol1} (${price1:.2}) is higher than {symbol2} (${price2:.2}).")
        } else if price1 < price2 {
            format!("{symbol1} (${price1:.2}) is lower than {symbol2} (${price2:.2}).")
        } else {
            format!("Both {symbol1} and {symbol2} have the same price (${price1:.2}).")
        }
    }
}
