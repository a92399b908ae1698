//! Extractors and response pieces shared by the resource modules

pub mod query;
pub mod response;
pub mod validated_json;

pub use query::ApiQuery;
pub use response::MessageResponse;
pub use validated_json::ValidatedJson;
