//! Change request aggregate

pub mod dto;
pub mod model;

pub use dto::{CreateChangeRequestDto, ReviewChangeRequestDto};
pub use model::{ChangeRequest, RequestStatus};
