//! MCP request handler
//!
//! Dispatches tool and resource requests to the quote service. The handler
//! owns one service instance and the immutable server configuration for
//! the life of the process.

use async_trait::async_trait;
use quote_core::{MarketDataProvider, QuoteService};
use rust_mcp_sdk::mcp_server::ServerHandler;
use rust_mcp_sdk::schema::schema_utils::CallToolError;
use rust_mcp_sdk::schema::{
    CallToolRequest, CallToolResult, ListResourceTemplatesRequest, ListResourceTemplatesResult,
    ListResourcesRequest, ListResourcesResult, ListToolsRequest, ListToolsResult,
    ReadResourceRequest, ReadResourceResult, ReadResourceResultContentsItem, RpcError,
};
use rust_mcp_sdk::McpServer;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::resource;
use crate::tools::StockTools;

/// Request handler for the stock price server.
pub struct StockServerHandler<P> {
    service: QuoteService<P>,
    config: ServerConfig,
}

impl<P: MarketDataProvider> StockServerHandler<P> {
    /// Create a handler over the given service and configuration
    pub fn new(service: QuoteService<P>, config: ServerConfig) -> Self {
        Self { service, config }
    }
}

#[async_trait]
impl<P: MarketDataProvider + 'static> ServerHandler for StockServerHandler<P> {
    async fn handle_list_tools_request(
        &self,
        _request: ListToolsRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ListToolsResult, RpcError> {
        Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: StockTools::tools(),
        })
    }

    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<CallToolResult, CallToolError> {
        let params: StockTools =
            StockTools::try_from(request.params).map_err(CallToolError::new)?;

        match params {
            StockTools::GetStockPriceTool(tool) => tool.call_tool(&self.service).await,
            StockTools::GetStockHistoryTool(tool) => {
                tool.call_tool(&self.service, &self.config.default_period).await
            }
            StockTools::CompareStocksTool(tool) => tool.call_tool(&self.service).await,
        }
    }

    async fn handle_list_resources_request(
        &self,
        _request: ListResourcesRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ListResourcesResult, RpcError> {
        // The surface is purely template-addressed; there is no finite
        // set of concrete resources to enumerate.
        Ok(ListResourcesResult {
            meta: None,
            next_cursor: None,
            resources: Vec::new(),
        })
    }

    async fn handle_list_resource_templates_request(
        &self,
        _request: ListResourceTemplatesRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ListResourceTemplatesResult, RpcError> {
        Ok(ListResourceTemplatesResult {
            meta: None,
            next_cursor: None,
            resource_templates: vec![resource::price_resource_template()],
        })
    }

    async fn handle_read_resource_request(
        &self,
        request: ReadResourceRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ReadResourceResult, RpcError> {
        let uri = request.params.uri;
        let Some(symbol) = resource::symbol_from_uri(&uri) else {
            return Err(RpcError::invalid_params()
                .with_message(format!("unsupported resource URI: {uri}")));
        };

        let text = self.service.describe_price(symbol).await;
        Ok(ReadResourceResult {
            meta: None,
            contents: vec![ReadResourceResultContentsItem::TextResourceContents(
                resource::price_resource_contents(&uri, text),
            )],
        })
    }
}
