//! Native JSON-RPC client for Bitcoin Core compatible endpoints.
//!
//! Implements [`super::NodeRpc`] over JSON-RPC using `reqwest`, with HTTP
//! basic auth and per-call wallet endpoint scoping derived from a
//! [`RpcConnection`] profile.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
pub use connection::RpcConnection;
