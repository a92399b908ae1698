#[derive(Debug, Clone, Default)]
pub struct GetNotificationsDto {
    pub unread_only: bool,
    pub limit: Option<usize>,
}
