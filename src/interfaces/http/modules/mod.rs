pub mod activity_logs;
pub mod analytics;
pub mod auth;
pub mod change_requests;
pub mod health;
pub mod invoices;
pub mod metrics;
pub mod notifications;
pub mod request_id;
pub mod upload_assets;
pub mod users;
pub mod websites;
