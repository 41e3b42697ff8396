//! The `stock://{symbol}` resource surface

use rust_mcp_sdk::schema::{ResourceTemplate, TextResourceContents};

/// URI scheme prefix for the price resource.
pub const STOCK_URI_PREFIX: &str = "stock://";

/// URI template advertised to clients.
pub const STOCK_URI_TEMPLATE: &str = "stock://{symbol}";

/// Extract the symbol from a `stock://{symbol}` URI.
///
/// Symbols are opaque; everything after the scheme is taken verbatim.
pub fn symbol_from_uri(uri: &str) -> Option<&str> {
    let symbol = uri.strip_prefix(STOCK_URI_PREFIX)?;
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

/// Template entry returned from `resources/templates/list`.
pub fn price_resource_template() -> ResourceTemplate {
    ResourceTemplate {
        uri_template: STOCK_URI_TEMPLATE.to_string(),
        name: "stock-price".to_string(),
        title: Some("Current stock price".to_string()),
        description: Some(
            "Formatted description of the current price for the addressed stock symbol"
                .to_string(),
        ),
        mime_type: Some("text/plain".to_string()),
        annotations: None,
        meta: None,
    }
}

/// Text contents for a resolved price resource.
pub fn price_resource_contents(uri: &str, text: String) -> TextResourceContents {
    TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some("text/plain".to_string()),
        text,
        meta: None,
    }
}
