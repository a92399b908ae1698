//! Acting identity and roles

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User role. Exactly one elevated role exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Client,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }
}

/// The `{id, role}` pair taken from a verified bearer token.
///
/// Verified, not necessarily fresh: a role change takes effect on the next login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Self::new(id, Role::Admin)
    }

    pub fn client(id: impl Into<String>) -> Self {
        Self::new(id, Role::Client)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A record that belongs to exactly one user
pub trait Owned {
    fn owner_id(&self) -> &str;

    fn is_owned_by(&self, identity: &Identity) -> bool {
        self.owner_id() == identity.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::from_str::<Role>("\"client\"").unwrap(), Role::Client);
        assert!(serde_json::from_str::<Role>("\"operator\"").is_err());
    }
}
