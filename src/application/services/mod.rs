//! Resource services
//!
//! One service per aggregate. Each composes the `AccessPolicy` with the
//! document store and writes to the `Journal` after a successful mutation.

pub mod activity_log;
pub mod analytics;
pub mod change_request;
pub mod invoice;
pub mod notification;
pub mod upload_asset;
pub mod website;

pub use activity_log::ActivityLogService;
pub use analytics::{AnalyticsService, DashboardStats};
pub use change_request::ChangeRequestService;
pub use invoice::InvoiceService;
pub use notification::NotificationService;
pub use upload_asset::UploadAssetService;
pub use website::WebsiteService;
