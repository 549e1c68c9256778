//! Error handling utilities for MCP server

use rmcp::ErrorData;
use sprintboard_core::SprintboardError;

/// Converts a planner error into an MCP error.
///
/// Rejected input (violations, unknown ids, malformed documents) becomes
/// `invalid_params` carrying the bare message, with the violation attached as
/// structured data. Everything else is an `internal_error` prefixed with
/// `message`.
pub fn to_mcp_error(message: &str, error: &SprintboardError) -> ErrorData {
    if error.is_client_error() {
        let data = error
            .violation()
            .and_then(|violation| serde_json::to_value(violation).ok());
        return ErrorData::invalid_params(error.to_string(), data);
    }
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;
    use sprintboard_core::{Violation, ViolationKind};

    use super::*;

    #[test]
    fn test_violation_maps_to_invalid_params() {
        let error = SprintboardError::from(Violation::new(
            ViolationKind::OutOfRange,
            "Availability must be between 0 and 100.",
        ));
        let mcp = to_mcp_error("Failed to replace sprint state", &error);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(mcp.message, "Availability must be between 0 and 100.");
        assert_eq!(
            mcp.data,
            Some(serde_json::json!({
                "kind": "out_of_range",
                "message": "Availability must be between 0 and 100."
            }))
        );
    }

    #[test]
    fn test_not_found_maps_to_invalid_params() {
        let error = SprintboardError::SprintNotFound {
            id: "sprint-1".to_string(),
        };
        let mcp = to_mcp_error("Failed to show sprint", &error);
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
        assert!(mcp.data.is_none());
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = SprintboardError::Configuration {
            message: "Task join error".to_string(),
        };
        let mcp = to_mcp_error("Failed to list projects", &error);
        assert_eq!(mcp.code, ErrorCode::INTERNAL_ERROR);
        assert!(mcp.message.starts_with("Failed to list projects: "));
    }
}
