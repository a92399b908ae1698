//! Activity feed

use crate::application::{AccessPolicy, Documents};
use crate::domain::{ActivityLog, DomainResult, GetActivityLogsDto, Identity, DEFAULT_ACTIVITY_LIMIT};

#[derive(Clone)]
pub struct ActivityLogService {
    docs: Documents,
    policy: AccessPolicy,
}

impl ActivityLogService {
    pub fn new(docs: Documents) -> Self {
        Self {
            docs,
            policy: AccessPolicy::new(),
        }
    }

    /// Admins see every entry, optionally for one user; others see their own.
    /// Newest first, truncated after sorting.
    pub async fn list(
        &self,
        identity: &Identity,
        query: GetActivityLogsDto,
    ) -> DomainResult<Vec<ActivityLog>> {
        let mut logs = self
            .policy
            .filter_collection(identity, self.docs.all::<ActivityLog>().await?);

        if identity.is_admin() {
            if let Some(user_id) = &query.user_id {
                logs.retain(|l| &l.user_id == user_id);
            }
        }
        if let Some(website_id) = &query.website_id {
            logs.retain(|l| l.website_id.as_ref() == Some(website_id));
        }

        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        logs.truncate(query.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT));
        Ok(logs)
    }
}
