use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use bitcoin::BlockHash;
use reqwest::header;
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::super::types::{ChainInfo, UnspentOutput};
use super::super::{NodeRpc, LISTUNSPENT_MAX_CONF, LISTUNSPENT_MIN_CONF};
use super::connection::RpcConnection;
use super::protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse};

/// Bitcoin Core JSON-RPC client over HTTP.
///
/// Issues one JSON-RPC call per invocation with no retries and no response
/// caching; failures propagate to the caller unchanged. Wallet-scoped
/// commands are routed through the wallet's endpoint path derived from the
/// connection profile per call, so the client itself stays immutable.
pub struct HttpRpcClient {
    client: reqwest::Client,
    conn: RpcConnection,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    pub fn new(conn: RpcConnection) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");

        Self {
            client,
            conn,
            next_id: AtomicU64::new(initial_request_id()),
        }
    }

    async fn rpc_call(
        &self,
        wallet: Option<&str>,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        let url = match wallet {
            Some(name) => self.conn.wallet_url(name),
            None => self.conn.url(),
        };
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .basic_auth(&self.conn.user, Some(&self.conn.pass))
            .json(&req)
            .send()
            .await
            .map_err(RpcError::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!(
                "decode JSON-RPC response (HTTP {status}): {e}; body={body}"
            ))
        })?;

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err).into());
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }
}

#[async_trait]
impl NodeRpc for HttpRpcClient {
    async fn get_block_hash(&self, height: u64) -> Result<BlockHash, CoreError> {
        let raw = self
            .rpc_call(None, "getblockhash", vec![serde_json::json!(height)])
            .await?;
        serde_json::from_value(raw).map_err(|e| {
            RpcError::InvalidResponse(format!("invalid getblockhash result: {e}")).into()
        })
    }

    async fn get_block(&self, hash: &BlockHash) -> Result<serde_json::Value, CoreError> {
        self.rpc_call(None, "getblock", vec![serde_json::json!(hash.to_string())])
            .await
    }

    async fn get_raw_transaction(&self, txid: &str) -> Result<serde_json::Value, CoreError> {
        self.rpc_call(
            None,
            "getrawtransaction",
            vec![serde_json::json!(txid), serde_json::json!(true)],
        )
        .await
    }

    async fn list_unspent(
        &self,
        wallet: &str,
        address: &str,
    ) -> Result<Vec<UnspentOutput>, CoreError> {
        let raw = self
            .rpc_call(
                Some(wallet),
                "listunspent",
                vec![
                    serde_json::json!(LISTUNSPENT_MIN_CONF),
                    serde_json::json!(LISTUNSPENT_MAX_CONF),
                    serde_json::json!([address]),
                ],
            )
            .await?;
        serde_json::from_value(raw).map_err(|e| {
            RpcError::InvalidResponse(format!("invalid listunspent result: {e}")).into()
        })
    }

    async fn get_blockchain_info(&self) -> Result<ChainInfo, CoreError> {
        let raw = self.rpc_call(None, "getblockchaininfo", Vec::new()).await?;
        serde_json::from_value(raw).map_err(|e| {
            RpcError::InvalidResponse(format!("invalid getblockchaininfo result: {e}")).into()
        })
    }
}

fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
