use super::RequestStatus;

#[derive(Debug, Clone)]
pub struct CreateChangeRequestDto {
    pub website_id: String,
    pub title: String,
    pub description: String,
    pub attachments: Vec<String>,
}

/// Admin review of a request
#[derive(Debug, Clone, Default)]
pub struct ReviewChangeRequestDto {
    pub status: Option<RequestStatus>,
    pub admin_comment: Option<String>,
}
