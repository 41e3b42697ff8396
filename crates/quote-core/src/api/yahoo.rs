//! Yahoo Finance market-data provider

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use yahoo_finance_api as yahoo;

use crate::error::{QuoteError, Result};
use crate::provider::{Bar, MarketDataProvider, SymbolInfo};

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Market-data provider backed by Yahoo Finance.
///
/// Bar series come through the `yahoo_finance_api` client; the info record
/// is read from the chart endpoint metadata, which carries the
/// `regularMarketPrice` field for symbols with no recent trading window.
#[derive(Debug, Clone, Default)]
pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    // A connector is cheap to build, so each call gets a fresh one.
    fn connector() -> Result<yahoo::YahooConnector> {
        yahoo::YahooConnector::new().map_err(|e| QuoteError::Provider(e.to_string()))
    }

    fn bars_from(response: &yahoo::YResponse, symbol: &str) -> Result<Vec<Bar>> {
        let quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(yahoo::YahooError::NoResult | yahoo::YahooError::NoQuotes) => {
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(QuoteError::Provider(format!("{symbol}: {e}")));
            }
        };

        Ok(quotes
            .iter()
            .map(|q| Bar {
                timestamp: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            })
            .collect())
    }

    async fn fetch_range(&self, symbol: &str, range: &str) -> Result<Vec<Bar>> {
        let provider = Self::connector()?;
        match provider.get_quote_range(symbol, "1d", range).await {
            Ok(response) => Self::bars_from(&response, symbol),
            Err(yahoo::YahooError::NoResult | yahoo::YahooError::NoQuotes) => Ok(Vec::new()),
            Err(e) => Err(QuoteError::Provider(format!("{symbol}: {e}"))),
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn recent_daily_bars(&self, symbol: &str) -> Result<Vec<Bar>> {
        self.fetch_range(symbol, "1d").await
    }

    async fn info(&self, symbol: &str) -> Result<SymbolInfo> {
        let url = format!("{CHART_URL}/{symbol}");
        let response = self
            .client
            .get(&url)
            .query(&[("interval", "1d"), ("range", "1d")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuoteError::Provider(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let data: serde_json::Value = response.json().await?;

        let regular_market_price =
            data["chart"]["result"][0]["meta"]["regularMarketPrice"].as_f64();

        Ok(SymbolInfo {
            regular_market_price,
        })
    }

    async fn history(&self, symbol: &str, period: &str) -> Result<Vec<Bar>> {
        // The period token is passed through verbatim; its vocabulary is
        // Yahoo's ("1mo", "6mo", "1y", ...).
        self.fetch_range(symbol, period).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_recent_daily_bars() {
        let provider = YahooProvider::new();
        let bars = provider.recent_daily_bars("AAPL").await.unwrap();

        assert!(!bars.is_empty());
        assert!(bars.last().unwrap().close > 0.0);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_info_carries_regular_market_price() {
        let provider = YahooProvider::new();
        let info = provider.info("AAPL").await.unwrap();

        assert!(info.regular_market_price.unwrap() > 0.0);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_history_over_period() {
        let provider = YahooProvider::new();
        let bars = provider.history("AAPL", "1mo").await.unwrap();

        assert!(bars.len() > 1);
    }
}
