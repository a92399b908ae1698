//! Assets uploaded for a website

use chrono::Utc;
use uuid::Uuid;

use crate::application::input::{non_blank, required};
use crate::application::{AccessPolicy, Documents, Journal};
use crate::domain::{
    ActivityAction, CreateUploadAssetDto, DomainError, DomainResult, Identity, UploadAsset, Website,
};

#[derive(Clone)]
pub struct UploadAssetService {
    docs: Documents,
    journal: Journal,
    policy: AccessPolicy,
}

impl UploadAssetService {
    pub fn new(docs: Documents, journal: Journal) -> Self {
        Self {
            docs,
            journal,
            policy: AccessPolicy::new(),
        }
    }

    /// Assets of one website, gated by the website's owner
    pub async fn list(
        &self,
        identity: &Identity,
        website_id: Option<&str>,
    ) -> DomainResult<Vec<UploadAsset>> {
        let website_id = website_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| DomainError::validation("websiteId is required"))?;

        let website = self.docs.get::<Website>(website_id).await?;
        self.policy.authorize_read(identity, &website)?;

        let mut assets = self.docs.all::<UploadAsset>().await?;
        assets.retain(|a| a.website_id == website.id);
        Ok(assets)
    }

    pub async fn get(&self, identity: &Identity, id: &str) -> DomainResult<UploadAsset> {
        let asset = self.docs.get::<UploadAsset>(id).await?;
        self.policy.authorize_read(identity, &asset)?;
        Ok(asset)
    }

    /// Website owner or admin. Without a url a placeholder reference is stored.
    pub async fn create(
        &self,
        identity: &Identity,
        dto: CreateUploadAssetDto,
    ) -> DomainResult<UploadAsset> {
        required(&dto.website_id, "websiteId")?;
        required(&dto.label, "label")?;

        let website = self.docs.get::<Website>(&dto.website_id).await?;
        self.policy.authorize_write(identity, &website, None)?;

        let now = Utc::now();
        let url = non_blank(dto.url)
            .unwrap_or_else(|| format!("placeholder-{}", now.timestamp_millis()));
        let asset = UploadAsset {
            id: Uuid::new_v4().to_string(),
            website_id: website.id,
            owner_id: identity.id.clone(),
            asset_type: dto.asset_type,
            label: dto.label,
            url,
            created_at: now,
        };
        let asset = self.docs.insert(asset).await?;

        self.journal
            .record(
                identity,
                ActivityAction::AssetUploaded,
                Some(&asset.website_id),
                format!("Uploaded {}", asset.label),
            )
            .await;
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::fixtures;
    use crate::domain::{AssetType, Denial};

    fn service(docs: &Documents) -> UploadAssetService {
        UploadAssetService::new(docs.clone(), Journal::new(docs.clone()))
    }

    fn asset(website_id: &str, label: &str, url: Option<&str>) -> CreateUploadAssetDto {
        CreateUploadAssetDto {
            website_id: website_id.into(),
            asset_type: AssetType::Image,
            label: label.into(),
            url: url.map(String::from),
        }
    }

    #[tokio::test]
    async fn missing_url_gets_a_placeholder() {
        let docs = fixtures::docs();
        fixtures::seed_website(&docs, "w1", "u1").await;
        let svc = service(&docs);
        let owner = Identity::client("u1");

        let created = svc.create(&owner, asset("w1", "Logo", None)).await.unwrap();
        assert!(created.url.starts_with("placeholder-"));

        let given = svc
            .create(&owner, asset("w1", "Hero", Some("https://cdn.example.com/hero.png")))
            .await
            .unwrap();
        assert_eq!(given.url, "https://cdn.example.com/hero.png");

        assert_eq!(svc.get(&owner, &created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn list_needs_a_website_the_caller_may_see() {
        let docs = fixtures::docs();
        fixtures::seed_website(&docs, "w1", "u1").await;
        fixtures::seed_website(&docs, "w2", "u1").await;
        let svc = service(&docs);
        let owner = Identity::client("u1");
        svc.create(&owner, asset("w1", "Logo", None)).await.unwrap();
        svc.create(&owner, asset("w2", "Copy", None)).await.unwrap();

        let err = svc.list(&owner, None).await.unwrap_err();
        assert_eq!(err.to_string(), "websiteId is required");

        let err = svc.list(&owner, Some("nope")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = svc.list(&Identity::client("u2"), Some("w1")).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(Denial::NotOwner)));

        let assets = svc.list(&Identity::admin("admin-1"), Some("w1")).await.unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].label, "Logo");
    }

    #[tokio::test]
    async fn strangers_cannot_upload() {
        let docs = fixtures::docs();
        fixtures::seed_website(&docs, "w1", "u1").await;
        let svc = service(&docs);

        let err = svc
            .create(&Identity::client("u2"), asset("w1", "Logo", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        assert!(docs.all::<UploadAsset>().await.unwrap().is_empty());
    }
}
