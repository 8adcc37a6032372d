//! Request rate limiting for the `/api` surface.
//!
//! Uses the `governor` crate's token bucket: the bucket holds one
//! window's worth of requests and refills one permit per
//! `window / max_requests`, approximating the original fixed
//! 100-per-15-minutes window (1000 in development). Exceeding the quota
//! yields 429 with a JSON body; `/health` is registered outside the
//! limited router and is never throttled.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

use crate::bootstrap::RateLimitConfig;
use crate::error::HttpError;

/// Process-wide token bucket guarding the API routes.
pub struct ApiRateLimiter {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl ApiRateLimiter {
    /// Build a limiter from a quota. A zero `max_requests` degrades to
    /// one request per window rather than disabling the limiter.
    pub fn new(config: &RateLimitConfig) -> Self {
        let max = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = (config.window / max.get()).max(Duration::from_nanos(1));
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(max))
            .allow_burst(max);

        Self {
            limiter: RateLimiter::direct(quota),
        }
    }

    /// Check whether one more request fits the quota.
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

/// Axum middleware enforcing the limiter ahead of the API handlers.
pub async fn enforce(
    State(limiter): State<Arc<ApiRateLimiter>>,
    request: Request,
    next: Next,
) -> Result<Response, HttpError> {
    if limiter.check() {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(path = %request.uri().path(), "API rate limit exceeded");
        Err(HttpError::RateLimited)
    }
}
