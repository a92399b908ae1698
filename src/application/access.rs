//! Access-control policy
//!
//! Authorization is ownership based: each record names its single owner, and
//! the admin role may read and write everything. Every service asks this
//! policy before touching the store, so a refused request never writes.

use crate::domain::{Denial, DomainError, DomainResult, Identity, Owned, Role};

#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Admins see everything, everyone else only what they own
    pub fn authorize_read<R: Owned>(&self, identity: &Identity, record: &R) -> DomainResult<()> {
        if identity.is_admin() || record.is_owned_by(identity) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(Denial::NotOwner))
        }
    }

    /// Narrow a collection to the identity's records, keeping insertion order
    pub fn filter_collection<R: Owned>(&self, identity: &Identity, records: Vec<R>) -> Vec<R> {
        if identity.is_admin() {
            return records;
        }
        self.owned_only(identity, records)
    }

    /// Ownership rule plus an optional hard role requirement.
    ///
    /// A missing role is reported before ownership so that admin-only
    /// operations refuse owners and strangers alike.
    pub fn authorize_write<R: Owned>(
        &self,
        identity: &Identity,
        record: &R,
        required_role: Option<Role>,
    ) -> DomainResult<()> {
        if let Some(role) = required_role {
            self.require_role(identity, role)?;
        }
        self.authorize_read(identity, record)
    }

    pub fn require_role(&self, identity: &Identity, role: Role) -> DomainResult<()> {
        if identity.role == role {
            Ok(())
        } else {
            Err(DomainError::Forbidden(Denial::RoleRequired(role)))
        }
    }

    /// Personal records such as notifications: the admin role grants nothing
    pub fn authorize_owner_only<R: Owned>(&self, identity: &Identity, record: &R) -> DomainResult<()> {
        if record.is_owned_by(identity) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(Denial::NotOwner))
        }
    }

    /// Records owned by the identity, whatever its role
    pub fn owned_only<R: Owned>(&self, identity: &Identity, records: Vec<R>) -> Vec<R> {
        records
            .into_iter()
            .filter(|r| r.is_owned_by(identity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        id: u32,
        owner: &'static str,
    }

    impl Owned for Doc {
        fn owner_id(&self) -> &str {
            self.owner
        }
    }

    fn docs() -> Vec<Doc> {
        vec![
            Doc { id: 1, owner: "client-1" },
            Doc { id: 2, owner: "client-2" },
            Doc { id: 3, owner: "client-1" },
        ]
    }

    #[test]
    fn admin_sees_the_whole_collection() {
        let all = AccessPolicy.filter_collection(&Identity::admin("admin-1"), docs());
        assert_eq!(all, docs());
    }

    #[test]
    fn client_sees_own_records_in_order() {
        let mine = AccessPolicy.filter_collection(&Identity::client("client-1"), docs());
        let ids: Vec<u32> = mine.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn read_is_refused_for_strangers() {
        let doc = Doc { id: 1, owner: "client-1" };
        let policy = AccessPolicy::new();

        assert!(policy.authorize_read(&Identity::client("client-1"), &doc).is_ok());
        assert!(policy.authorize_read(&Identity::admin("admin-1"), &doc).is_ok());
        let err = policy
            .authorize_read(&Identity::client("client-2"), &doc)
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(Denial::NotOwner)));
    }

    #[test]
    fn required_role_is_reported_distinctly() {
        let doc = Doc { id: 1, owner: "client-1" };
        let err = AccessPolicy
            .authorize_write(&Identity::client("client-1"), &doc, Some(Role::Admin))
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(Denial::RoleRequired(Role::Admin))));

        assert!(AccessPolicy
            .authorize_write(&Identity::admin("admin-1"), &doc, Some(Role::Admin))
            .is_ok());
        assert!(AccessPolicy
            .authorize_write(&Identity::client("client-1"), &doc, None)
            .is_ok());
    }

    #[test]
    fn personal_records_ignore_the_admin_role() {
        let doc = Doc { id: 1, owner: "client-1" };
        assert!(AccessPolicy
            .authorize_owner_only(&Identity::admin("admin-1"), &doc)
            .is_err());

        assert!(AccessPolicy
            .owned_only(&Identity::admin("admin-1"), docs())
            .is_empty());
    }
}
