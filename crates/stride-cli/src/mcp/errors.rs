//! Error handling utilities for MCP server

use rmcp::ErrorData;
use stride_core::StrideError;

/// Converts engine errors to MCP errors; invalid input is reported as
/// invalid parameters.
pub fn to_mcp_error(message: &str, error: &StrideError) -> ErrorData {
    if error.is_invalid_input() {
        ErrorData::invalid_params(format!("{message}: {error}"), None)
    } else {
        ErrorData::internal_error(format!("{message}: {error}"), None)
    }
}
