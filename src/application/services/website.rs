//! Website management

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::application::input::{non_blank, required};
use crate::application::{AccessPolicy, Documents, Journal};
use crate::domain::{
    ActivityAction, CreateWebsiteDto, DomainError, DomainResult, Identity, Lifecycle,
    NotificationKind, Role, UpdateWebsiteDto, User, Website,
};

#[derive(Clone)]
pub struct WebsiteService {
    docs: Documents,
    journal: Journal,
    policy: AccessPolicy,
}

impl WebsiteService {
    pub fn new(docs: Documents, journal: Journal) -> Self {
        Self {
            docs,
            journal,
            policy: AccessPolicy::new(),
        }
    }

    pub async fn list(&self, identity: &Identity) -> DomainResult<Vec<Website>> {
        let websites = self.docs.all::<Website>().await?;
        Ok(self.policy.filter_collection(identity, websites))
    }

    pub async fn get(&self, identity: &Identity, id: &str) -> DomainResult<Website> {
        let website = self.docs.get::<Website>(id).await?;
        self.policy.authorize_read(identity, &website)?;
        Ok(website)
    }

    /// Admin only. The owner must be an existing user.
    pub async fn create(&self, identity: &Identity, dto: CreateWebsiteDto) -> DomainResult<Website> {
        self.policy.require_role(identity, Role::Admin)?;
        required(&dto.owner_id, "ownerId")?;
        required(&dto.name, "name")?;
        required(&dto.domain, "domain")?;
        let plan = dto
            .plan
            .ok_or_else(|| DomainError::validation("plan is required"))?;

        let owner = self.docs.get::<User>(&dto.owner_id).await?;

        let now = Utc::now();
        let website = Website {
            id: Uuid::new_v4().to_string(),
            owner_id: owner.id,
            name: dto.name.trim().to_string(),
            domain: dto.domain.trim().to_string(),
            plan,
            status: dto.status.unwrap_or_default(),
            created_at: now,
            last_updated_at: now,
        };
        let website = self.docs.insert(website).await?;
        info!(website_id = %website.id, owner_id = %website.owner_id, "Website created");

        self.journal
            .record(
                identity,
                ActivityAction::WebsiteCreated,
                Some(&website.id),
                format!("Created website {}", website.name),
            )
            .await;
        self.journal
            .notify(
                &website.owner_id,
                NotificationKind::WebsiteCreated,
                "Website added",
                format!("{} ({}) was added to your account", website.name, website.domain),
                Some(&website.id),
            )
            .await;
        Ok(website)
    }

    /// Owner or admin; only the provided fields change
    pub async fn update(
        &self,
        identity: &Identity,
        id: &str,
        dto: UpdateWebsiteDto,
    ) -> DomainResult<Website> {
        let policy = self.policy;
        let website = self
            .docs
            .update::<Website, _>(id, |w| {
                policy.authorize_write(identity, w, None)?;
                if let Some(name) = non_blank(dto.name) {
                    w.name = name;
                }
                if let Some(domain) = non_blank(dto.domain) {
                    w.domain = domain;
                }
                if let Some(plan) = dto.plan {
                    w.plan = plan;
                }
                if let Some(status) = dto.status {
                    w.status = w.status.transition(status)?;
                }
                w.last_updated_at = Utc::now();
                Ok(())
            })
            .await?;

        self.journal
            .record(
                identity,
                ActivityAction::WebsiteUpdated,
                Some(&website.id),
                format!("Updated website {}", website.name),
            )
            .await;
        Ok(website)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fixtures;
    use crate::domain::{Denial, Notification, Plan, WebsiteStatus};

    fn service(docs: &Documents) -> WebsiteService {
        WebsiteService::new(docs.clone(), Journal::new(docs.clone()))
    }

    fn new_site(owner_id: &str, name: &str) -> CreateWebsiteDto {
        CreateWebsiteDto {
            owner_id: owner_id.into(),
            name: name.into(),
            domain: format!("{}.example.com", name.to_lowercase()),
            plan: Some(Plan::Growth),
            status: None,
        }
    }

    #[tokio::test]
    async fn each_client_sees_only_their_websites() {
        let docs = fixtures::docs();
        fixtures::seed_user(&docs, "u1", Role::Client).await;
        fixtures::seed_user(&docs, "u2", Role::Client).await;
        let svc = service(&docs);
        let admin = Identity::admin("admin-1");

        svc.create(&admin, new_site("u1", "A")).await.unwrap();
        svc.create(&admin, new_site("u2", "B")).await.unwrap();
        svc.create(&admin, new_site("u1", "C")).await.unwrap();

        let names = |sites: Vec<Website>| sites.into_iter().map(|w| w.name).collect::<Vec<_>>();
        assert_eq!(names(svc.list(&Identity::client("u1")).await.unwrap()), ["A", "C"]);
        assert_eq!(names(svc.list(&Identity::client("u2")).await.unwrap()), ["B"]);
        assert_eq!(names(svc.list(&admin).await.unwrap()), ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_record() {
        let docs = fixtures::docs();
        fixtures::seed_user(&docs, "u1", Role::Client).await;
        let svc = service(&docs);

        let created = svc
            .create(&Identity::admin("admin-1"), new_site("u1", "Shop"))
            .await
            .unwrap();
        assert_eq!(created.status, WebsiteStatus::Draft);

        let fetched = svc.get(&Identity::client("u1"), &created.id).await.unwrap();
        assert_eq!(fetched, created);

        let err = svc.get(&Identity::client("u2"), &created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(Denial::NotOwner)));
    }

    #[tokio::test]
    async fn create_is_admin_only_and_needs_a_real_owner() {
        let docs = fixtures::docs();
        fixtures::seed_user(&docs, "u1", Role::Client).await;
        let svc = service(&docs);

        let err = svc
            .create(&Identity::client("u1"), new_site("u1", "Mine"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(Denial::RoleRequired(Role::Admin))));

        let err = svc
            .create(&Identity::admin("admin-1"), new_site("ghost", "Orphan"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User not found");
        assert!(svc.list(&Identity::admin("admin-1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_notifies_the_owner() {
        let docs = fixtures::docs();
        fixtures::seed_user(&docs, "u1", Role::Client).await;
        let svc = service(&docs);

        let site = svc
            .create(&Identity::admin("admin-1"), new_site("u1", "Shop"))
            .await
            .unwrap();

        let notes = docs.all::<Notification>().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].user_id, "u1");
        assert_eq!(notes[0].resource_id.as_deref(), Some(site.id.as_str()));
    }

    #[tokio::test]
    async fn owner_may_update_and_stranger_may_not() {
        let docs = fixtures::docs();
        fixtures::seed_user(&docs, "u1", Role::Client).await;
        let svc = service(&docs);
        let site = svc
            .create(&Identity::admin("admin-1"), new_site("u1", "Shop"))
            .await
            .unwrap();

        let patch = UpdateWebsiteDto {
            name: Some("Shop 2".into()),
            status: Some(WebsiteStatus::InReview),
            ..Default::default()
        };
        let err = svc
            .update(&Identity::client("u2"), &site.id, patch.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let updated = svc
            .update(&Identity::client("u1"), &site.id, patch)
            .await
            .unwrap();
        assert_eq!(updated.name, "Shop 2");
        assert_eq!(updated.domain, site.domain);
        assert_eq!(updated.status, WebsiteStatus::InReview);
        assert!(updated.last_updated_at >= site.last_updated_at);
    }
}
