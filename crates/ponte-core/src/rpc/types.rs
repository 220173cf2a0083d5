//! RPC wire types for the subset of node responses the gateway inspects.
//!
//! Block and transaction payloads are relayed verbatim as
//! [`serde_json::Value`]; only responses the gateway actually reads fields
//! from get typed representations here.

use bitcoin::{BlockHash, Txid};
use serde::Deserialize;

// ==============================================================================
// Chain Info
// ==============================================================================

/// Basic chain information from `getblockchaininfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainInfo {
    pub chain: String,
    pub blocks: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: BlockHash,
    pub pruned: bool,
}

// ==============================================================================
// Unspent Outputs
// ==============================================================================

/// A single entry from `listunspent`, reduced to the fields the balance
/// aggregation reads. Fields the node adds beyond these are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UnspentOutput {
    pub txid: Txid,
    pub vout: u32,
    /// Amount in BTC, in the node's floating-point JSON representation.
    pub amount: f64,
    pub confirmations: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspent_output_ignores_extra_node_fields() {
        let raw = serde_json::json!({
            "txid": "e093d75e245102d6ba06c2ad562905f626bde30e36fc97a519d14b2d85952cea",
            "vout": 1,
            "address": "bcrt1qraltzuz3vv6c4h96rg2p8x0d7edee88sugytk3",
            "amount": 0.004,
            "confirmations": 12,
            "spendable": true,
            "solvable": true,
            "safe": true
        });

        let utxo: UnspentOutput =
            serde_json::from_value(raw).expect("listunspent entry must deserialize");
        assert_eq!(utxo.vout, 1);
        assert_eq!(utxo.amount, 0.004);
        assert_eq!(utxo.confirmations, 12);
    }

    #[test]
    fn chain_info_deserializes_node_field_names() {
        let raw = serde_json::json!({
            "chain": "regtest",
            "blocks": 120,
            "headers": 120,
            "bestblockhash": "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206",
            "pruned": false
        });

        let info: ChainInfo =
            serde_json::from_value(raw).expect("getblockchaininfo result must deserialize");
        assert_eq!(info.chain, "regtest");
        assert_eq!(info.blocks, 120);
        assert!(!info.pruned);
    }
}
