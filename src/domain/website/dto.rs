use super::{Plan, WebsiteStatus};

#[derive(Debug, Clone)]
pub struct CreateWebsiteDto {
    pub owner_id: String,
    pub name: String,
    pub domain: String,
    pub plan: Option<Plan>,
    /// Defaults to `Draft`
    pub status: Option<WebsiteStatus>,
}

/// Only the provided fields change
#[derive(Debug, Clone, Default)]
pub struct UpdateWebsiteDto {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub plan: Option<Plan>,
    pub status: Option<WebsiteStatus>,
}
