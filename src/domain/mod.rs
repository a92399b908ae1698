//! Domain layer
//!
//! Entities of the portal, the acting identity, status machines,
//! errors and the ports implemented by infrastructure.

pub mod activity_log;
pub mod change_request;
pub mod error;
pub mod identity;
pub mod invoice;
pub mod lifecycle;
pub mod notification;
pub mod ports;
pub mod upload_asset;
pub mod user;
pub mod website;

pub use activity_log::{ActivityAction, ActivityLog, GetActivityLogsDto, DEFAULT_ACTIVITY_LIMIT};
pub use change_request::{
    ChangeRequest, CreateChangeRequestDto, RequestStatus, ReviewChangeRequestDto,
};
pub use error::{Denial, DomainError, DomainResult};
pub use identity::{Identity, Owned, Role};
pub use invoice::{CreateInvoiceDto, Invoice, InvoiceLineItem, InvoiceStatus, UpdateInvoiceDto};
pub use lifecycle::Lifecycle;
pub use notification::{GetNotificationsDto, Notification, NotificationKind};
pub use ports::{Collection, Document, DocumentStore, StoreError, StoreResult, TokenAuthority};
pub use upload_asset::{AssetType, CreateUploadAssetDto, UploadAsset};
pub use user::{PublicUser, SignupDto, UpdateProfileDto, User};
pub use website::{CreateWebsiteDto, Plan, UpdateWebsiteDto, Website, WebsiteStatus};
