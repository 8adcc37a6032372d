//! Composition root for the web adapter.
//!
//! Nothing outside this module touches infrastructure: the JSON item
//! store is built here and handed to the core behind its trait.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use wares_core::ItemRepository;
use wares_core::services::AppCore;
use wares_store::setup_store;

/// Default HTTP port for the wares server.
pub const DEFAULT_PORT: u16 = 4001;

/// Default backing file for the item catalog.
pub const DEFAULT_DATA_FILE: &str = "data/items.json";

/// Runtime environment the server reports and sizes its limits for.
///
/// Anything other than `production` selects development, matching the
/// original deployment convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Development mode (default): generous rate limits, no static dir.
    #[default]
    Development,
    /// Production mode: tight rate limits, static assets served.
    Production,
}

impl Environment {
    /// The lowercase name used on the wire and in config.
    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

/// Which origins the API answers cross-origin requests from.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Any origin, the development default.
    #[default]
    AllowAll,
    /// Only the listed origins, for production deployments.
    AllowOrigins(Vec<String>),
}

/// Request quota for the `/api` surface.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed per window.
    pub max_requests: u32,
    /// Window the quota refills over.
    pub window: Duration,
}

impl RateLimitConfig {
    /// The fixed 15 minute window the quota is sized against.
    pub const WINDOW: Duration = Duration::from_secs(15 * 60);

    /// Default quota for an environment: 100 requests per window in
    /// production, 1000 in development.
    #[must_use]
    pub const fn for_environment(environment: Environment) -> Self {
        let max_requests = match environment {
            Environment::Development => 1000,
            Environment::Production => 100,
        };
        Self {
            max_requests,
            window: Self::WINDOW,
        }
    }
}

/// Everything `start_server` needs to know, resolved before launch.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the server listens on.
    pub port: u16,
    /// Path to the JSON file backing the catalog.
    pub data_file: PathBuf,
    /// Runtime environment (selects rate limits and static serving).
    pub environment: Environment,
    /// Directory of built frontend assets, when serving a UI.
    pub static_dir: Option<PathBuf>,
    /// Cross-origin policy for the API routes.
    pub cors: CorsConfig,
    /// Explicit rate limit override; derived from `environment` when unset.
    pub rate_limit: Option<RateLimitConfig>,
    /// Stats cache TTL override; the core default (300 s) when unset.
    pub stats_ttl: Option<Duration>,
}

impl ServerConfig {
    /// Create config with defaults for everything but port and data file.
    pub fn new(port: u16, data_file: impl Into<PathBuf>) -> Self {
        Self {
            port,
            data_file: data_file.into(),
            environment: Environment::default(),
            static_dir: None,
            cors: CorsConfig::default(),
            rate_limit: None,
            stats_ttl: None,
        }
    }

    /// Create config with default port and data file.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_DATA_FILE)
    }

    /// Set the runtime environment.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Serve static assets out of `path` with SPA fallback.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Restrict CORS to the given origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Override the rate limit quota.
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    /// Override the stats cache TTL.
    #[must_use]
    pub fn with_stats_ttl(mut self, ttl: Duration) -> Self {
        self.stats_ttl = Some(ttl);
        self
    }

    /// The quota actually enforced: the override if set, otherwise the
    /// environment default.
    pub fn effective_rate_limit(&self) -> RateLimitConfig {
        self.rate_limit
            .clone()
            .unwrap_or_else(|| RateLimitConfig::for_environment(self.environment))
    }
}

/// Everything the web server needs at request time.
///
/// Built once by [`bootstrap`] and shared across handlers as
/// [`crate::AppState`].
pub struct AxumContext {
    /// Catalog and stats services behind one facade.
    pub core: Arc<AppCore>,
    /// Environment the server was started in (reported by `/health`).
    pub environment: Environment,
    /// Server start time (reported as uptime by `/health`).
    pub started_at: Instant,
}

/// Bootstrap the Axum server context.
///
/// Ensures the backing file exists and assembles `AppCore` around the
/// JSON item store.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        data_file = %config.data_file.display(),
        environment = %config.environment,
        "bootstrapping catalog server"
    );

    let store = setup_store(&config.data_file)?;
    let repo: Arc<dyn ItemRepository> = Arc::new(store);

    let core = match config.stats_ttl {
        Some(ttl) => Arc::new(AppCore::with_stats_ttl(repo, ttl)),
        None => Arc::new(AppCore::new(repo)),
    };

    Ok(AxumContext {
        core,
        environment: config.environment,
        started_at: Instant::now(),
    })
}

/// Start the web server on the configured port.
///
/// A configured `static_dir` adds frontend serving with SPA fallback on
/// top of the API routes; without one only the API is exposed. Runs
/// until SIGINT/SIGTERM, then drains in-flight requests.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;

    // A configured static dir selects the SPA-serving router
    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving frontend assets from {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config)
    } else {
        crate::routes::create_router(ctx, &config)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    if config.static_dir.is_some() {
        info!("wares server (with UI) listening on http://{}", addr);
    } else {
        info!("wares server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Completes when a shutdown signal arrives.
///
/// On Unix both SIGINT (Ctrl+C) and SIGTERM are handled; elsewhere only
/// Ctrl+C.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(error) => {
                tracing::warn!(%error, "Failed to install Ctrl+C handler");
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing_defaults_to_development() {
        assert_eq!(Environment::from("production"), Environment::Production);
        assert_eq!(Environment::from("PRODUCTION"), Environment::Production);
        assert_eq!(Environment::from("development"), Environment::Development);
        assert_eq!(Environment::from("staging"), Environment::Development);
        assert_eq!(Environment::from(""), Environment::Development);
    }

    #[test]
    fn test_rate_limit_defaults_per_environment() {
        let dev = RateLimitConfig::for_environment(Environment::Development);
        assert_eq!(dev.max_requests, 1000);
        let prod = RateLimitConfig::for_environment(Environment::Production);
        assert_eq!(prod.max_requests, 100);
        assert_eq!(prod.window, Duration::from_secs(900));
    }

    #[test]
    fn test_effective_rate_limit_prefers_override() {
        let config = ServerConfig::with_defaults().with_rate_limit(RateLimitConfig {
            max_requests: 3,
            window: Duration::from_secs(1),
        });
        assert_eq!(config.effective_rate_limit().max_requests, 3);

        let config = ServerConfig::with_defaults().with_environment(Environment::Production);
        assert_eq!(config.effective_rate_limit().max_requests, 100);
    }
}
