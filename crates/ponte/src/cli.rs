use clap::Parser;

/// Ponte, a REST gateway exposing Bitcoin Core queries over HTTP.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Network the node is expected to run on (bitcoin, testnet, signet, regtest).
    #[arg(long, default_value = "regtest", env = "BITCOIN_NETWORK")]
    pub network: String,

    /// RPC username.
    #[arg(long, env = "BITCOIN_RPC_USER")]
    pub rpc_user: String,

    /// RPC password.
    #[arg(long, env = "BITCOIN_RPC_PASS")]
    pub rpc_pass: String,

    /// RPC host (bare hostname or IP, no scheme).
    #[arg(long, default_value = "127.0.0.1", env = "BITCOIN_RPC_HOST")]
    pub rpc_host: String,

    /// RPC port.
    #[arg(long, default_value = "18443", env = "BITCOIN_RPC_PORT")]
    pub rpc_port: u16,

    /// Address to bind the gateway to.
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, default_value = "5000")]
    pub port: u16,
}
