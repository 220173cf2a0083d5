use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use ponte_core::CoreError;

// ==============================================================================
// Error Type
// ==============================================================================

pub(crate) enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Every adapter failure is terminal for the request and surfaces as a 400
/// carrying the node's or transport's own message. Missing entities and
/// transport or auth failures are deliberately not distinguished.
pub(super) fn map_core_error(err: CoreError) -> AppError {
    AppError::BadRequest(err.to_string())
}

#[cfg(test)]
mod tests {
    use ponte_core::RpcError;

    use super::*;

    #[test]
    fn node_errors_map_to_bad_request_with_node_message() {
        let err = CoreError::Rpc(RpcError::Server {
            code: -8,
            message: "Block height out of range".to_string(),
        });

        match map_core_error(err) {
            AppError::BadRequest(msg) => assert_eq!(msg, "Block height out of range"),
            AppError::NotFound(_) => panic!("adapter errors must map to 400"),
        }
    }
}
