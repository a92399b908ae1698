//! Reusable SiteKeeper server runtime.
//!
//! [`ServerHandle`] owns the whole lifecycle: metrics recorder, JSON data
//! directory, default admin, REST API and graceful shutdown. Both the root
//! binary and the `sitekeeper-cli` binary start the portal through it.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::application::{IdentitySettings, UserService};
use crate::config::{AppConfig, LogFormat, DEFAULT_JWT_SECRET};
use crate::domain::{DocumentStore, TokenAuthority};
use crate::infrastructure::{JsonFileStore, JwtAuthority, JwtConfig};
use crate::interfaces::http::{create_api_router, AppState};
use crate::support::shutdown::{ShutdownCoordinator, ShutdownSignal};

/// Options for starting the portal.
pub struct ServerOptions {
    pub config: AppConfig,
    /// Seed the configured admin when the users collection is empty (default: true).
    pub create_default_admin: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            create_default_admin: true,
        }
    }
}

/// Handle to a running portal.
///
/// ```rust,no_run
/// use sitekeeper::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address actually bound, which differs from the config when port 0 was asked for.
    pub local_addr: SocketAddr,
    pub state: AppState,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the portal:
    /// 1. install the Prometheus recorder
    /// 2. create the data directory and missing collection files
    /// 3. seed the default admin (if enabled)
    /// 4. bind and serve the REST API
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting SiteKeeper portal...");

        let metrics = prometheus_handle()?;
        info!("Prometheus metrics recorder ready");

        for problem in app_cfg.validate() {
            warn!(problem = %problem, "Configuration problem");
        }

        // ── Storage ────────────────────────────────────────────
        let store = JsonFileStore::new(&app_cfg.storage.data_dir);
        store.init().await?;
        info!(data_dir = %store.data_dir().display(), "Document store ready");
        let store: Arc<dyn DocumentStore> = Arc::new(store);

        // ── Security ───────────────────────────────────────────
        if app_cfg.security.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("Using the default JWT secret; set security.jwt_secret");
        }
        let tokens: Arc<dyn TokenAuthority> = Arc::new(JwtAuthority::new(JwtConfig {
            secret: app_cfg.security.jwt_secret.clone(),
            expiration_hours: app_cfg.security.jwt_expiration_hours,
            issuer: "sitekeeper".to_string(),
        }));
        info!(
            expiration_hours = app_cfg.security.jwt_expiration_hours,
            "JWT authority configured"
        );

        let settings = IdentitySettings {
            bcrypt_cost: app_cfg.security.bcrypt_cost,
            allow_admin_signup: app_cfg.security.allow_admin_signup,
        };
        let state = AppState::new(store, tokens, settings, metrics);

        if opts.create_default_admin {
            create_default_admin(&state.users, &app_cfg).await;
        }

        // ── REST API ───────────────────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let api_router = create_api_router(state.clone());

        let listener = tokio::net::TcpListener::bind(app_cfg.listen_addr()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown.signal();
        let api_server = axum::serve(
            listener,
            api_router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("REST API received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!(error = %e, "REST API server error");
            }
        });

        Ok(Self {
            config: app_cfg,
            local_addr,
            state,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Trigger shutdown on SIGTERM / SIGINT.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Non-blocking; call [`ServerHandle::wait`] to block until stopped.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the API task to drain after shutdown was triggered,
    /// bounded by `server.shutdown_timeout`.
    pub async fn wait(self) {
        info!("Waiting for in-flight requests...");
        let api_task = self.api_task;
        let drained = self
            .shutdown
            .shutdown_with(async move {
                if let Err(e) = api_task.await {
                    error!(error = %e, "REST API task panicked");
                }
            })
            .await;

        if drained {
            info!("SiteKeeper shutdown complete");
        } else {
            warn!("SiteKeeper stopped with requests still in flight");
        }
    }

    pub async fn shutdown(self) {
        info!("Shutting down SiteKeeper portal...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// The global recorder can only be installed once per process; a restart
/// within the same process reuses the first handle.
fn prometheus_handle() -> Result<PrometheusHandle, BuildError> {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(HANDLE.get_or_init(|| handle).clone())
}

async fn create_default_admin(users: &UserService, app_cfg: &AppConfig) {
    let admin = &app_cfg.admin;
    match users
        .seed_admin(&admin.name, &admin.email, &admin.password)
        .await
    {
        Ok(Some(user)) => {
            info!(email = %user.email, "Default admin created");
            warn!("Change the default admin password immediately");
        }
        Ok(None) => {}
        Err(e) => error!(error = %e, "Failed to create default admin"),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`.
/// A second call is ignored.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    if result.is_err() {
        warn!("Tracing subscriber already installed");
    }
}
