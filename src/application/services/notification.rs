//! Per-user notifications
//!
//! Notifications are personal: the admin role grants no access to anyone
//! else's.

use chrono::Utc;

use crate::application::{AccessPolicy, Documents};
use crate::domain::{GetNotificationsDto, DomainResult, Identity, Notification};

#[derive(Clone)]
pub struct NotificationService {
    docs: Documents,
    policy: AccessPolicy,
}

impl NotificationService {
    pub fn new(docs: Documents) -> Self {
        Self {
            docs,
            policy: AccessPolicy::new(),
        }
    }

    /// Own notifications, newest first
    pub async fn list(
        &self,
        identity: &Identity,
        query: GetNotificationsDto,
    ) -> DomainResult<Vec<Notification>> {
        let mut notes = self
            .policy
            .owned_only(identity, self.docs.all::<Notification>().await?);
        if query.unread_only {
            notes.retain(|n| !n.read);
        }
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = query.limit {
            notes.truncate(limit);
        }
        Ok(notes)
    }

    pub async fn mark_read(&self, identity: &Identity, id: &str) -> DomainResult<Notification> {
        let policy = self.policy;
        self.docs
            .update::<Notification, _>(id, |n| {
                policy.authorize_owner_only(identity, n)?;
                n.mark_read(Utc::now());
                Ok(())
            })
            .await
    }

    /// Returns how many notifications changed
    pub async fn mark_all_read(&self, identity: &Identity) -> DomainResult<usize> {
        let now = Utc::now();
        self.docs
            .update_where::<Notification, _, _>(
                |n| n.user_id == identity.id && !n.read,
                |n| n.mark_read(now),
            )
            .await
    }
}
