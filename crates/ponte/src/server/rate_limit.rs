//! Per-client request rate limiting.
//!
//! Every route shares one process-wide ceiling of 100 requests per rolling
//! minute per client address, enforced with `governor`'s keyed GCRA state.
//! Counters live in memory only and reset when the process restarts;
//! over-limit requests are rejected, never queued.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use governor::clock::{Clock, DefaultClock};
use governor::middleware::StateInformationMiddleware;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};

/// Ceiling on requests per client address within one rolling minute.
pub(super) const MAX_REQUESTS_PER_MINUTE: u32 = 100;

/// Rejection body message; fixed regardless of route.
pub(super) const REJECTION_MESSAGE: &str = "Too many requests. Please try again later.";

/// How often idle client entries are dropped from the keyed store.
const STALE_KEY_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

fn ratelimit_limit() -> HeaderName {
    HeaderName::from_static("ratelimit-limit")
}

fn ratelimit_remaining() -> HeaderName {
    HeaderName::from_static("ratelimit-remaining")
}

fn ratelimit_reset() -> HeaderName {
    HeaderName::from_static("ratelimit-reset")
}

type KeyedLimiter =
    RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock, StateInformationMiddleware>;

pub(super) struct ApiRateLimiter {
    limiter: KeyedLimiter,
    clock: DefaultClock,
}

impl ApiRateLimiter {
    pub(super) fn shared() -> Arc<Self> {
        let quota = Quota::per_minute(
            NonZeroU32::new(MAX_REQUESTS_PER_MINUTE).expect("request ceiling is non-zero"),
        );
        Arc::new(Self {
            limiter: RateLimiter::keyed(quota).with_middleware::<StateInformationMiddleware>(),
            clock: DefaultClock::default(),
        })
    }
}

/// Periodically evict client keys that have not been seen for a while so
/// the per-client map cannot grow without bound.
pub(super) fn spawn_stale_key_sweeper(limiter: &Arc<ApiRateLimiter>) {
    let limiter = Arc::clone(limiter);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STALE_KEY_SWEEP_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            limiter.limiter.retain_recent();
        }
    });
}

/// Middleware enforcing the per-client ceiling on every route.
///
/// Allowed requests carry `RateLimit-Limit` / `RateLimit-Remaining`
/// headers; rejected ones additionally report when to retry.
pub(super) async fn enforce(
    State(limiter): State<Arc<ApiRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_ip(&request);
    match limiter.limiter.check_key(&key) {
        Ok(snapshot) => {
            let mut response = next.run(request).await;
            let headers = response.headers_mut();
            headers.insert(
                ratelimit_limit(),
                HeaderValue::from(snapshot.quota().burst_size().get()),
            );
            headers.insert(
                ratelimit_remaining(),
                HeaderValue::from(snapshot.remaining_burst_capacity()),
            );
            response
        }
        Err(not_until) => {
            let retry_after = not_until
                .wait_time_from(limiter.clock.now())
                .as_secs()
                .max(1);
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(serde_json::json!({ "error": REJECTION_MESSAGE })),
            )
                .into_response();
            let headers = response.headers_mut();
            headers.insert(
                ratelimit_limit(),
                HeaderValue::from(MAX_REQUESTS_PER_MINUTE),
            );
            headers.insert(ratelimit_remaining(), HeaderValue::from(0u32));
            headers.insert(ratelimit_reset(), HeaderValue::from(retry_after));
            headers.insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
            response
        }
    }
}

/// Client key for rate accounting: the peer address when the router is
/// served with connect info, loopback otherwise (in-process test routers).
fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    #[test]
    fn client_ip_prefers_connect_info() {
        let peer: SocketAddr = "192.0.2.7:52110".parse().expect("socket addr must parse");
        let mut request = axum::http::Request::new(Body::empty());
        request.extensions_mut().insert(ConnectInfo(peer));

        assert_eq!(client_ip(&request), peer.ip());
    }

    #[test]
    fn client_ip_falls_back_to_loopback() {
        let request = axum::http::Request::new(Body::empty());
        assert_eq!(client_ip(&request), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
