//! Activity logging and system notifications
//!
//! Written after the primary mutation has been persisted. A journal failure
//! is logged and swallowed; the request that triggered it still succeeds.

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use super::Documents;
use crate::domain::{ActivityAction, ActivityLog, Identity, Notification, NotificationKind};

#[derive(Clone)]
pub struct Journal {
    docs: Documents,
}

impl Journal {
    pub fn new(docs: Documents) -> Self {
        Self { docs }
    }

    pub async fn record(
        &self,
        actor: &Identity,
        action: ActivityAction,
        website_id: Option<&str>,
        description: impl Into<String>,
    ) {
        let entry = ActivityLog {
            id: Uuid::new_v4().to_string(),
            user_id: actor.id.clone(),
            website_id: website_id.map(String::from),
            action,
            description: description.into(),
            created_at: Utc::now(),
        };

        if let Err(e) = self.docs.insert(entry).await {
            warn!(user_id = %actor.id, ?action, error = %e, "Failed to record activity");
        }
    }

    pub async fn notify(
        &self,
        user_id: &str,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        resource_id: Option<&str>,
    ) {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind,
            title: title.into(),
            message: message.into(),
            resource_id: resource_id.map(String::from),
            read: false,
            read_at: None,
            created_at: Utc::now(),
        };

        if let Err(e) = self.docs.insert(notification).await {
            warn!(user_id, ?kind, error = %e, "Failed to create notification");
        }
    }
}
