//! Application layer
//!
//! Use-case orchestration between the HTTP interface and the domain.

pub mod access;
pub mod documents;
pub mod identity;
pub mod input;
pub mod journal;
pub mod services;

pub use access::AccessPolicy;
pub use documents::Documents;
pub use identity::{AuthResult, IdentitySettings, UserService};
pub use journal::Journal;
pub use services::{
    ActivityLogService, AnalyticsService, ChangeRequestService, DashboardStats, InvoiceService,
    NotificationService, UploadAssetService, WebsiteService,
};
