//! Website aggregate

pub mod dto;
pub mod model;

pub use dto::{CreateWebsiteDto, UpdateWebsiteDto};
pub use model::{Plan, Website, WebsiteStatus};
