//! Shared router state
//!
//! One `AppState` carries every service. Handlers extract only the piece
//! they need through `FromRef`.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::{
    ActivityLogService, AnalyticsService, ChangeRequestService, Documents, IdentitySettings,
    InvoiceService, Journal, NotificationService, UploadAssetService, UserService, WebsiteService,
};
use crate::domain::{DocumentStore, TokenAuthority};
use crate::interfaces::http::middleware::AuthState;
use crate::interfaces::http::modules::health::HealthState;
use crate::interfaces::http::modules::metrics::MetricsState;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub tokens: Arc<dyn TokenAuthority>,
    pub users: Arc<UserService>,
    pub websites: Arc<WebsiteService>,
    pub change_requests: Arc<ChangeRequestService>,
    pub invoices: Arc<InvoiceService>,
    pub upload_assets: Arc<UploadAssetService>,
    pub notifications: Arc<NotificationService>,
    pub activity_logs: Arc<ActivityLogService>,
    pub analytics: Arc<AnalyticsService>,
    pub metrics: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

impl AppState {
    /// Wire every service onto one store
    pub fn new(
        store: Arc<dyn DocumentStore>,
        tokens: Arc<dyn TokenAuthority>,
        settings: IdentitySettings,
        metrics: PrometheusHandle,
    ) -> Self {
        let docs = Documents::new(store.clone());
        let journal = Journal::new(docs.clone());

        Self {
            store,
            tokens: tokens.clone(),
            users: Arc::new(UserService::new(
                docs.clone(),
                journal.clone(),
                tokens,
                settings,
            )),
            websites: Arc::new(WebsiteService::new(docs.clone(), journal.clone())),
            change_requests: Arc::new(ChangeRequestService::new(docs.clone(), journal.clone())),
            invoices: Arc::new(InvoiceService::new(docs.clone(), journal.clone())),
            upload_assets: Arc::new(UploadAssetService::new(docs.clone(), journal)),
            notifications: Arc::new(NotificationService::new(docs.clone())),
            activity_logs: Arc::new(ActivityLogService::new(docs.clone())),
            analytics: Arc::new(AnalyticsService::new(docs)),
            metrics,
            started_at: Arc::new(Instant::now()),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        AuthState {
            tokens: Arc::clone(&s.tokens),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            store: Arc::clone(&s.store),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(s: &AppState) -> Self {
        MetricsState {
            handle: s.metrics.clone(),
        }
    }
}

macro_rules! service_from_ref {
    ($($field:ident: $service:ty),* $(,)?) => {
        $(
            impl FromRef<AppState> for Arc<$service> {
                fn from_ref(s: &AppState) -> Self {
                    Arc::clone(&s.$field)
                }
            }
        )*
    };
}

service_from_ref! {
    users: UserService,
    websites: WebsiteService,
    change_requests: ChangeRequestService,
    invoices: InvoiceService,
    upload_assets: UploadAssetService,
    notifications: NotificationService,
    activity_logs: ActivityLogService,
    analytics: AnalyticsService,
}
