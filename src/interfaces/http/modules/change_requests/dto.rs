use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{CreateChangeRequestDto, RequestStatus, ReviewChangeRequestDto};

/// `?websiteId=` narrowing shared by the list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WebsiteFilter {
    pub website_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChangeRequestRequest {
    #[serde(default)]
    pub website_id: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "title must be at most 200 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl From<CreateChangeRequestRequest> for CreateChangeRequestDto {
    fn from(r: CreateChangeRequestRequest) -> Self {
        Self {
            website_id: r.website_id,
            title: r.title,
            description: r.description,
            attachments: r.attachments,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewChangeRequestRequest {
    pub status: Option<RequestStatus>,
    pub admin_comment: Option<String>,
}

impl From<ReviewChangeRequestRequest> for ReviewChangeRequestDto {
    fn from(r: ReviewChangeRequestRequest) -> Self {
        Self {
            status: r.status,
            admin_comment: r.admin_comment,
        }
    }
}
