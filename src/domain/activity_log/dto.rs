/// Default page size of the activity feed
pub const DEFAULT_ACTIVITY_LIMIT: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct GetActivityLogsDto {
    /// Honored for admins only; clients always see their own entries
    pub user_id: Option<String>,
    pub website_id: Option<String>,
    pub limit: Option<usize>,
}
