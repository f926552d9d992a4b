use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared_types::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

/// Sliding window rate limit state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    inner: Arc<Mutex<RateLimitInner>>,
}

struct RateLimitInner {
    /// Map from client key -> list of request timestamps.
    requests: HashMap<String, Vec<Instant>>,
    max_requests: u32,
    window: Duration,
}

static CONTACT_LIMITER: OnceLock<RateLimitState> = OnceLock::new();

/// Limiter for contact submissions, sized from `[contact]` config. Shared by
/// the REST route and the server function.
pub fn contact_limiter() -> &'static RateLimitState {
    CONTACT_LIMITER.get_or_init(|| {
        let settings = crate::config::contact_settings();
        RateLimitState::new(
            settings.rate_limit_max,
            Duration::from_secs(settings.rate_limit_window_secs),
        )
    })
}

impl RateLimitState {
    /// Create rate limiter allowing `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimitInner {
                requests: HashMap::new(),
                max_requests,
                window,
            })),
        }
    }

    /// Record a request from `key`. Returns false once the key is over its limit.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let window = inner.window;
        let max = inner.max_requests;

        // Drop every key whose whole history has left the window.
        inner.requests.retain(|_, timestamps| {
            timestamps.retain(|t| now.saturating_duration_since(*t) < window);
            !timestamps.is_empty()
        });

        let timestamps = inner.requests.entry(key.to_string()).or_default();
        if timestamps.len() as u32 >= max {
            return false;
        }

        timestamps.push(now);
        true
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .requests
            .len()
    }
}

/// Client key for rate limiting: the last `X-Forwarded-For` hop, then
/// `X-Real-IP`, else a shared anonymous bucket.
///
/// Assumes a single reverse proxy in front of the app that appends the peer
/// address to `X-Forwarded-For`. Earlier hops are client-supplied and are
/// ignored; without such a proxy the headers are not trustworthy.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.rsplit(',').next())
        .or_else(|| headers.get("x-real-ip").and_then(|v| v.to_str().ok()))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("anonymous")
        .to_string()
}

pub fn rate_limited_error() -> AppError {
    AppError::rate_limited("Too many submissions. Please try again later.")
}

/// Axum middleware that enforces the contact submission limit per client.
pub async fn rate_limit_middleware(
    axum::extract::State(state): axum::extract::State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(request.headers());

    if !state.check(&key) {
        tracing::warn!(client = %key, "contact rate limit exceeded");
        return rate_limited_error().into_response();
    }

    next.run(request).await
}
