//! Common utilities shared across the epoch tools.
//!
//! Every tool renders its outcome as a single text content block; these
//! helpers keep that shape in one place.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create an error result with a single text block.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with a single text block.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Extract the text of a result's first content block.
///
/// Handlers always produce exactly one text block, so tests use this to
/// assert on the rendered message.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}
