use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Wraps an envelope as the single JSON content item of a tool result.
pub fn envelope_result<T: Serialize>(envelope: T) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::json(envelope)?]))
}
