#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Transport-level failure: connection refused, DNS, timeout, TLS.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Error object returned by the node. Display relays the node's own
    /// message unchanged so callers can surface it as-is.
    #[error("{message}")]
    Server { code: i64, message: String },

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("invalid RPC configuration: {0}")]
    InvalidConfig(String),
}
