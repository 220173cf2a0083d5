mod cli;
mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use bitcoin::Network;
use clap::Parser;
use eyre::{eyre, WrapErr};

use ponte_core::rpc::{HttpRpcClient, NodeRpc, RpcConnection};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let network = parse_network(&args.network)?;
    let conn = RpcConnection::new(
        network,
        &args.rpc_user,
        &args.rpc_pass,
        &args.rpc_host,
        args.rpc_port,
    )?;

    // Connect to Bitcoin Core RPC and verify the connection succeeds
    // before starting the server.
    let rpc: Arc<dyn NodeRpc> = Arc::new(HttpRpcClient::new(conn));

    let chain_info = rpc.get_blockchain_info().await.map_err(|err| {
        let message = format_rpc_connect_error(&args.rpc_host, args.rpc_port, &err.to_string());
        eyre!(message).wrap_err("while attempting to connect to Bitcoin Core RPC")
    })?;

    tracing::info!(
        chain = %chain_info.chain,
        blocks = chain_info.blocks,
        "connected to Bitcoin Core"
    );
    if chain_info.pruned {
        tracing::warn!("node is pruned; fetching old blocks may fail");
    }

    match map_chain_to_network(&chain_info.chain) {
        Ok(node_network) if node_network != network => {
            tracing::warn!(
                configured = %network,
                node = %node_network,
                "node chain does not match --network; responses come from the node's chain"
            );
        }
        Ok(_) => {}
        Err(err) => tracing::warn!("{err}"),
    }

    let state = server::AppState { rpc };
    let router = server::build_router(state);

    if args.bind == "0.0.0.0" {
        tracing::warn!("server is bound to 0.0.0.0; it is accessible from the network");
    }

    let bind_addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("bind TCP listener")?;

    tracing::info!("listening on {bind_addr}");
    tracing::info!("documentation available at http://{bind_addr}/api-docs");
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("run HTTP server")?;

    Ok(())
}

fn parse_network(name: &str) -> eyre::Result<Network> {
    match name {
        "bitcoin" | "main" | "mainnet" => Ok(Network::Bitcoin),
        "testnet" | "test" => Ok(Network::Testnet),
        "signet" => Ok(Network::Signet),
        "regtest" => Ok(Network::Regtest),
        _ => Err(eyre!("unrecognized network name `{name}`")),
    }
}

fn map_chain_to_network(chain: &str) -> eyre::Result<Network> {
    match chain {
        "main" => Ok(Network::Bitcoin),
        "test" => Ok(Network::Testnet),
        "signet" => Ok(Network::Signet),
        "regtest" => Ok(Network::Regtest),
        _ => Err(eyre!(
            "unrecognized chain name `{chain}` from getblockchaininfo"
        )),
    }
}

fn format_rpc_connect_error(host: &str, port: u16, source_error: &str) -> String {
    let mut lines = vec![
        format!("could not connect to RPC endpoint `{host}:{port}`"),
        format!("RPC error: {source_error}"),
    ];

    if source_error.contains("Could not resolve host") || source_error.contains("dns error") {
        lines.push(
            "hint: hostname resolution failed; verify the RPC host and your DNS/network".into(),
        );
    } else if source_error.contains("401") || source_error.contains("403") {
        lines.push("hint: authentication failed; verify --rpc-user/--rpc-pass".into());
    } else if source_error.contains("Connection refused")
        || source_error.contains("error sending request for url")
    {
        lines.push(
            "hint: request could not be sent; verify the node is running and the host/port are reachable"
                .into(),
        );
    }

    lines.join("\n")
}
