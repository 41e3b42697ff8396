//! Tool definitions for the stock price server
//!
//! Each tool is a parameter struct whose handler delegates to
//! `QuoteService` and wraps the outcome as text content. Failures are part
//! of that text (sentinel number or message string), so handlers always
//! return a successful result.

use quote_core::{MarketDataProvider, QuoteService};
use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult, TextContent};
use serde::{Deserialize, Serialize};

#[mcp_tool(
    name = "get_stock_price",
    description = "Get the current stock price for a given symbol. Returns the price as a number, or -1.0 if the price could not be retrieved."
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetStockPriceTool {
    /// The stock symbol (e.g., 'AAPL' for Apple)
    pub symbol: String,
}

impl GetStockPriceTool {
    pub async fn call_tool<P: MarketDataProvider>(
        &self,
        service: &QuoteService<P>,
    ) -> Result<CallToolResult, CallToolError> {
        let price = service.resolve_price(&self.symbol).await;

        // Serialized as a JSON number so callers can parse a float back out
        // ("150.0", or "-1.0" for the sentinel).
        let text = serde_json::Value::from(price).to_string();
        Ok(CallToolResult::text_content(vec![TextContent::from(text)]))
    }
}

#[mcp_tool(
    name = "get_stock_history",
    description = "Get historical stock data for a given symbol and time period, formatted as CSV."
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetStockHistoryTool {
    /// The stock symbol
    pub symbol: String,

    /// Time period for historical data (default: '1mo')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl GetStockHistoryTool {
    pub async fn call_tool<P: MarketDataProvider>(
        &self,
        service: &QuoteService<P>,
        default_period: &str,
    ) -> Result<CallToolResult, CallToolError> {
        let period = self.period.as_deref().unwrap_or(default_period);
        let text = service.fetch_history(&self.symbol, period).await;
        Ok(CallToolResult::text_content(vec![TextContent::from(text)]))
    }
}

#[mcp_tool(
    name = "compare_stocks",
    description = "Compare the current prices of two stocks."
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CompareStocksTool {
    /// First stock symbol
    pub symbol1: String,

    /// Second stock symbol
    pub symbol2: String,
}

impl CompareStocksTool {
    pub async fn call_tool<P: MarketDataProvider>(
        &self,
        service: &QuoteService<P>,
    ) -> Result<CallToolResult, CallToolError> {
        let text = service.compare(&self.symbol1, &self.symbol2).await;
        Ok(CallToolResult::text_content(vec![TextContent::from(text)]))
    }
}

rust_mcp_sdk::tool_box!(
    StockTools,
    [GetStockPriceTool, GetStockHistoryTool, CompareStocksTool]
);

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use quote_core::{Bar, Result as QuoteResult, SymbolInfo};
    use serde_json::Value;

    /// Provider resolving every symbol to the same single daily bar.
    struct FixedProvider {
        price: f64,
    }

    #[async_trait]
    impl MarketDataProvider for FixedProvider {
        async fn recent_daily_bars(&self, _symbol: &str) -> QuoteResult<Vec<Bar>> {
            Ok(vec![Bar {
                timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                open: self.price,
                high: self.price,
                low: self.price,
                close: self.price,
                volume: 1_000,
            }])
        }

        async fn info(&self, _symbol: &str) -> QuoteResult<SymbolInfo> {
            Ok(SymbolInfo::default())
        }

        async fn history(&self, _symbol: &str, _period: &str) -> QuoteResult<Vec<Bar>> {
            Ok(Vec::new())
        }
    }

    fn result_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_registered_tool_names() {
        let names: Vec<String> = StockTools::tools().iter().map(|t| t.name.clone()).collect();
        assert_eq!(
            names,
            vec!["get_stock_price", "get_stock_history", "compare_stocks"]
        );
    }

    #[test]
    fn test_price_tool_schema_requires_symbol() {
        let tool: Value = serde_json::to_value(GetStockPriceTool::tool()).unwrap();

        assert_eq!(tool["name"], "get_stock_price");
        let required = tool["inputSchema"]["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "symbol"));
    }

    #[test]
    fn test_history_tool_period_is_optional() {
        let tool: Value = serde_json::to_value(GetStockHistoryTool::tool()).unwrap();

        let required = tool["inputSchema"]["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "symbol"));
        assert!(!required.iter().any(|v| v == "period"));
    }

    #[test]
    fn test_compare_tool_schema_requires_both_symbols() {
        let tool: Value = serde_json::to_value(CompareStocksTool::tool()).unwrap();

        let required = tool["inputSchema"]["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "symbol1"));
        assert!(required.iter().any(|v| v == "symbol2"));
    }

    #[tokio::test]
    async fn test_price_tool_returns_number_text() {
        let service = QuoteService::new(FixedProvider { price: 150.0 });
        let tool = GetStockPriceTool {
            symbol: "AAPL".to_string(),
        };

        let result = tool.call_tool(&service).await.unwrap();
        assert_eq!(result_text(&result), "150.0");
    }

    #[tokio::test]
    async fn test_history_tool_applies_default_period() {
        let service = QuoteService::new(FixedProvider { price: 150.0 });
        let tool = GetStockHistoryTool {
            symbol: "DLST".to_string(),
            period: None,
        };

        let result = tool.call_tool(&service, "1mo").await.unwrap();
        // The reported period proves the default was threaded through.
        assert_eq!(
            result_text(&result),
            "No historical data found for symbol 'DLST' with period '1mo'"
        );
    }

    #[tokio::test]
    async fn test_compare_tool_reports_tie() {
        let service = QuoteService::new(FixedProvider { price: 150.0 });
        let tool = CompareStocksTool {
            symbol1: "AAPL".to_string(),
            symbol2: "MSFT".to_string(),
        };

        let result = tool.call_tool(&service).await.unwrap();
        assert_eq!(
            result_text(&result),
            "Both AAPL and MSFT have the same price ($150.00)."
        );
    }
}
