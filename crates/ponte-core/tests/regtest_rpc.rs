use std::env;
use std::sync::Once;

use bitcoin::Network;
use ponte_core::rpc::{HttpRpcClient, NodeRpc, RpcConnection};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ponte_core=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

fn env_or_panic(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires local regtest bitcoind with a funded wallet"]
async fn regtest_rpc_client_resolves_blocks_and_unspent_outputs() {
    init_tracing();

    let host = env_or_panic("PONTE_TEST_RPC_HOST");
    let port: u16 = env_or_panic("PONTE_TEST_RPC_PORT")
        .parse()
        .expect("PONTE_TEST_RPC_PORT must be a port number");
    let user = env_or_panic("PONTE_TEST_RPC_USER");
    let pass = env_or_panic("PONTE_TEST_RPC_PASS");
    let wallet = env_or_panic("PONTE_TEST_WALLET");
    let funded_address = env_or_panic("PONTE_TEST_FUNDED_ADDRESS");

    let conn = RpcConnection::new(Network::Regtest, user, pass, host, port)
        .expect("connection profile must construct");
    let rpc = HttpRpcClient::new(conn);

    eprintln!("[itest] checking get_blockchain_info");
    let info = rpc
        .get_blockchain_info()
        .await
        .expect("regtest get_blockchain_info must succeed");
    assert_eq!(info.chain, "regtest");
    assert!(
        info.blocks >= 101,
        "regtest must have mined coinbase-maturity blocks before running balance checks"
    );

    eprintln!("[itest] resolving genesis block by height");
    let genesis_hash = rpc
        .get_block_hash(0)
        .await
        .expect("regtest get_block_hash(0) must succeed");
    let genesis = rpc
        .get_block(&genesis_hash)
        .await
        .expect("regtest get_block must succeed");
    assert_eq!(
        genesis.get("height").and_then(serde_json::Value::as_u64),
        Some(0),
        "genesis block JSON must report height 0"
    );
    assert_eq!(
        genesis.get("hash").and_then(serde_json::Value::as_str),
        Some(genesis_hash.to_string().as_str()),
        "genesis block JSON must echo the requested hash"
    );

    eprintln!("[itest] fetching a coinbase transaction from the tip");
    let tip_hash = rpc
        .get_block_hash(info.blocks)
        .await
        .expect("regtest get_block_hash(tip) must succeed");
    let tip = rpc
        .get_block(&tip_hash)
        .await
        .expect("regtest get_block(tip) must succeed");
    let coinbase_txid = tip
        .get("tx")
        .and_then(serde_json::Value::as_array)
        .and_then(|txs| txs.first())
        .and_then(serde_json::Value::as_str)
        .expect("tip block must list at least its coinbase txid")
        .to_owned();
    let tx = rpc
        .get_raw_transaction(&coinbase_txid)
        .await
        .expect("regtest get_raw_transaction must succeed with -txindex");
    assert_eq!(
        tx.get("txid").and_then(serde_json::Value::as_str),
        Some(coinbase_txid.as_str()),
        "decoded transaction must echo the requested txid"
    );

    eprintln!("[itest] listing unspent outputs for {funded_address}");
    let utxos = rpc
        .list_unspent(&wallet, &funded_address)
        .await
        .expect("regtest list_unspent must succeed");
    assert!(
        !utxos.is_empty(),
        "fixture address must hold at least one unspent output"
    );
    for utxo in &utxos {
        assert!(
            utxo.amount > 0.0,
            "unspent output amounts must be positive"
        );
    }
}
