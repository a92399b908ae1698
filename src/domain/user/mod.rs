//! User aggregate

pub mod dto;
pub mod model;

pub use dto::{SignupDto, UpdateProfileDto};
pub use model::{PublicUser, User};
