//! Change requests filed against a website

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::input::required;
use crate::application::{AccessPolicy, Documents, Journal};
use crate::domain::{
    ActivityAction, ChangeRequest, CreateChangeRequestDto, DomainResult, Identity, Lifecycle,
    NotificationKind, RequestStatus, ReviewChangeRequestDto, Role, Website,
};

#[derive(Clone)]
pub struct ChangeRequestService {
    docs: Documents,
    journal: Journal,
    policy: AccessPolicy,
}

impl ChangeRequestService {
    pub fn new(docs: Documents, journal: Journal) -> Self {
        Self {
            docs,
            journal,
            policy: AccessPolicy::new(),
        }
    }

    /// Optionally narrowed to one website before the visibility filter
    pub async fn list(
        &self,
        identity: &Identity,
        website_id: Option<&str>,
    ) -> DomainResult<Vec<ChangeRequest>> {
        let mut requests = self.docs.all::<ChangeRequest>().await?;
        if let Some(website_id) = website_id {
            requests.retain(|r| r.website_id == website_id);
        }
        Ok(self.policy.filter_collection(identity, requests))
    }

    pub async fn get(&self, identity: &Identity, id: &str) -> DomainResult<ChangeRequest> {
        let request = self.docs.get::<ChangeRequest>(id).await?;
        self.policy.authorize_read(identity, &request)?;
        Ok(request)
    }

    /// Website owner or admin. The filer becomes the request's owner.
    pub async fn create(
        &self,
        identity: &Identity,
        dto: CreateChangeRequestDto,
    ) -> DomainResult<ChangeRequest> {
        required(&dto.website_id, "websiteId")?;
        required(&dto.title, "title")?;
        required(&dto.description, "description")?;

        let website = self.docs.get::<Website>(&dto.website_id).await?;
        self.policy.authorize_write(identity, &website, None)?;

        let now = Utc::now();
        let request = ChangeRequest {
            id: Uuid::new_v4().to_string(),
            website_id: website.id,
            owner_id: identity.id.clone(),
            title: dto.title,
            description: dto.description,
            attachments: dto.attachments,
            status: RequestStatus::Pending,
            admin_comment: None,
            created_at: now,
            updated_at: now,
        };
        let request = self.docs.insert(request).await?;
        info!(request_id = %request.id, website_id = %request.website_id, "Change request filed");

        self.journal
            .record(
                identity,
                ActivityAction::ChangeRequestCreated,
                Some(&request.website_id),
                format!("Requested change: {}", request.title),
            )
            .await;
        Ok(request)
    }

    /// Admin review: status and/or comment
    pub async fn review(
        &self,
        identity: &Identity,
        id: &str,
        dto: ReviewChangeRequestDto,
    ) -> DomainResult<ChangeRequest> {
        self.policy.require_role(identity, Role::Admin)?;

        let mut reopened = false;
        let request = self
            .docs
            .update::<ChangeRequest, _>(id, |r| {
                if let Some(status) = dto.status {
                    reopened = r.status.reopens(status);
                    r.status = r.status.transition(status)?;
                }
                if let Some(comment) = dto.admin_comment {
                    r.admin_comment = Some(comment);
                }
                r.updated_at = Utc::now();
                Ok(())
            })
            .await?;
        info!(request_id = %request.id, status = request.status.label(), "Change request reviewed");
        if reopened {
            warn!(request_id = %request.id, "Closed change request reopened");
        }

        self.journal
            .record(
                identity,
                ActivityAction::ChangeRequestReviewed,
                Some(&request.website_id),
                format!("Marked \"{}\" as {}", request.title, request.status.label()),
            )
            .await;
        self.journal
            .notify(
                &request.owner_id,
                NotificationKind::ChangeRequestReviewed,
                format!("Request {}", request.status.label().to_lowercase()),
                format!("Your request \"{}\" is now {}", request.title, request.status.label()),
                Some(&request.id),
            )
            .await;
        Ok(request)
    }
}
