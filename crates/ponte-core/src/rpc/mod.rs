//! Bitcoin Core RPC abstraction layer.
//!
//! Defines the [`NodeRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) built around a [`RpcConnection`]
//! profile.

mod http_adapter;
pub mod types;

pub use http_adapter::{HttpRpcClient, RpcConnection};
pub use types::{ChainInfo, UnspentOutput};

use async_trait::async_trait;
use bitcoin::BlockHash;

use crate::error::CoreError;

/// Minimum confirmation count passed to `listunspent`: include mempool
/// outputs so fresh payments count toward a balance immediately.
pub const LISTUNSPENT_MIN_CONF: u32 = 0;

/// Maximum confirmation count passed to `listunspent`. Bitcoin Core treats
/// this as an inclusive upper bound, so it must exceed any realistic chain
/// depth.
pub const LISTUNSPENT_MAX_CONF: u32 = 9_999_999;

/// Minimal trait covering the Bitcoin Core RPC methods the gateway needs.
///
/// Implementations are expected to handle authentication, connection
/// management, and response deserialization internally. Calls are issued
/// one at a time with no retries; failures propagate to the caller.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Resolve a block height to its block hash (`getblockhash`).
    async fn get_block_hash(&self, height: u64) -> Result<BlockHash, CoreError>;

    /// Fetch a block as the node's verbose JSON representation (`getblock`).
    ///
    /// The payload shape is owned by the node and relayed untyped.
    async fn get_block(&self, hash: &BlockHash) -> Result<serde_json::Value, CoreError>;

    /// Fetch a decoded transaction (`getrawtransaction` with verbose output).
    ///
    /// The txid is forwarded as received; format validation is left to the
    /// node.
    async fn get_raw_transaction(&self, txid: &str) -> Result<serde_json::Value, CoreError>;

    /// List unspent outputs paying to `address`, issued against the named
    /// wallet's RPC endpoint (`listunspent`).
    async fn list_unspent(
        &self,
        wallet: &str,
        address: &str,
    ) -> Result<Vec<UnspentOutput>, CoreError>;

    /// Fetch basic chain info (network, block count, pruning status).
    async fn get_blockchain_info(&self) -> Result<ChainInfo, CoreError>;
}
