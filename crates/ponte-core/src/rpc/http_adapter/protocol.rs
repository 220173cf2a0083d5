use crate::error::RpcError;

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    pub(super) params: Vec<serde_json::Value>,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Parse a JSON-RPC error value into a structured `RpcError`.
///
/// The JSON-RPC spec defines errors as `{"code": <int>, "message": <string>}`.
/// If the error value matches that shape, we produce a `Server` error;
/// otherwise we fall back to `InvalidResponse` with the raw JSON.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> RpcError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    if let Ok(parsed) = serde_json::from_value::<JsonRpcError>(err.clone()) {
        RpcError::Server {
            code: parsed.code,
            message: parsed.message,
        }
    } else {
        RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_jsonrpc_error_standard_shape() {
        let err = parse_jsonrpc_error(serde_json::json!({
            "code": -8,
            "message": "Block height out of range"
        }));
        match err {
            RpcError::Server { code, message } => {
                assert_eq!(code, -8);
                assert_eq!(message, "Block height out of range");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn parse_jsonrpc_error_display_is_node_message_verbatim() {
        let err = parse_jsonrpc_error(serde_json::json!({
            "code": -18,
            "message": "Requested wallet does not exist or is not loaded"
        }));
        assert_eq!(
            err.to_string(),
            "Requested wallet does not exist or is not loaded"
        );
    }

    #[test]
    fn parse_jsonrpc_error_non_standard_shape() {
        let err = parse_jsonrpc_error(serde_json::json!("boom"));
        assert!(matches!(err, RpcError::InvalidResponse(_)));
    }

    #[test]
    fn request_serializes_positional_params() {
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "getblockhash",
            params: vec![serde_json::json!(100)],
        };
        let encoded = serde_json::to_value(&req).expect("request must serialize");
        assert_eq!(
            encoded,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "getblockhash",
                "params": [100]
            })
        );
    }
}
