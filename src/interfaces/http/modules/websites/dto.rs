use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateWebsiteDto, Plan, UpdateWebsiteDto, WebsiteStatus};

/// Fields are checked after the admin gate, so all of them may be absent here
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsiteRequest {
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    pub plan: Option<Plan>,
    pub status: Option<WebsiteStatus>,
}

impl From<CreateWebsiteRequest> for CreateWebsiteDto {
    fn from(r: CreateWebsiteRequest) -> Self {
        Self {
            owner_id: r.owner_id,
            name: r.name,
            domain: r.domain,
            plan: r.plan,
            status: r.status,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWebsiteRequest {
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 253, message = "domain must be at most 253 characters"))]
    pub domain: Option<String>,
    pub plan: Option<Plan>,
    pub status: Option<WebsiteStatus>,
}

impl From<UpdateWebsiteRequest> for UpdateWebsiteDto {
    fn from(r: UpdateWebsiteRequest) -> Self {
        Self {
            name: r.name,
            domain: r.domain,
            plan: r.plan,
            status: r.status,
        }
    }
}
