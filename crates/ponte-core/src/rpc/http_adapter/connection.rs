use bitcoin::Network;

use crate::error::CoreError;

/// Connection profile for a Bitcoin Core RPC endpoint.
///
/// Credentials, host, and port are fixed for the process lifetime; only the
/// endpoint path varies when a call is scoped to a named wallet. The
/// profile is a plain value object, so wallet-scoped endpoints are derived
/// per call instead of mutating a shared client.
#[derive(Debug, Clone)]
pub struct RpcConnection {
    pub network: Network,
    pub user: String,
    pub pass: String,
    pub host: String,
    pub port: u16,
}

impl RpcConnection {
    /// Create a profile from its parts.
    ///
    /// `host` must be a bare hostname or IP address; the URL scheme and
    /// path are owned by the profile.
    pub fn new(
        network: Network,
        user: impl Into<String>,
        pass: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, CoreError> {
        let host = host.into();
        if host.is_empty() {
            return Err(CoreError::InvalidConfig("rpc host must not be empty".to_owned()));
        }
        if host.contains("://") || host.contains('/') {
            return Err(CoreError::InvalidConfig(format!(
                "rpc host `{host}` must be a bare hostname or IP, without scheme or path"
            )));
        }

        Ok(Self {
            network,
            user: user.into(),
            pass: pass.into(),
            host,
            port,
        })
    }

    /// RPC endpoint URL for node-level commands.
    pub fn url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }

    /// RPC endpoint URL scoped to a named wallet.
    ///
    /// Bitcoin Core routes wallet-aware commands like `listunspent`
    /// through `/wallet/<name>`.
    pub fn wallet_url(&self, wallet: &str) -> String {
        format!("http://{}:{}/wallet/{}", self.host, self.port, wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(host: &str) -> Result<RpcConnection, CoreError> {
        RpcConnection::new(Network::Regtest, "alice", "secret", host, 18443)
    }

    #[test]
    fn node_url_has_trailing_slash() {
        let conn = profile("127.0.0.1").expect("profile must construct");
        assert_eq!(conn.url(), "http://127.0.0.1:18443/");
    }

    #[test]
    fn wallet_url_scopes_to_wallet_path() {
        let conn = profile("127.0.0.1").expect("profile must construct");
        assert_eq!(
            conn.wallet_url("wallet1"),
            "http://127.0.0.1:18443/wallet/wallet1"
        );
    }

    #[test]
    fn rejects_empty_host() {
        let err = profile("").expect_err("must reject empty host");
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn rejects_host_with_scheme() {
        let err = profile("http://127.0.0.1").expect_err("must reject scheme-prefixed host");
        assert!(err.to_string().contains("bare hostname"));
    }
}
