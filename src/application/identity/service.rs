//! User management service, application-layer orchestration
//!
//! All account logic lives here. HTTP handlers are thin wrappers that
//! delegate to this service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::input::{non_blank, required};
use crate::application::{AccessPolicy, Documents, Journal};
use crate::domain::{
    ActivityAction, Denial, DomainError, DomainResult, Identity, PublicUser, Role, SignupDto,
    TokenAuthority, UpdateProfileDto, User,
};
use crate::infrastructure::crypto::password::{hash_password_with_cost, verify_password};

/// Authentication result returned after signup or login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: PublicUser,
    pub token: String,
    pub expires_in: i64,
}

/// Knobs taken from the `[security]` config section
#[derive(Debug, Clone, Copy)]
pub struct IdentitySettings {
    pub bcrypt_cost: u32,
    /// Whether `role: admin` is honored at signup
    pub allow_admin_signup: bool,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            allow_admin_signup: false,
        }
    }
}

#[derive(Clone)]
pub struct UserService {
    docs: Documents,
    journal: Journal,
    tokens: Arc<dyn TokenAuthority>,
    policy: AccessPolicy,
    settings: IdentitySettings,
}

impl UserService {
    pub fn new(
        docs: Documents,
        journal: Journal,
        tokens: Arc<dyn TokenAuthority>,
        settings: IdentitySettings,
    ) -> Self {
        Self {
            docs,
            journal,
            tokens,
            policy: AccessPolicy::new(),
            settings,
        }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Create an account and sign it in
    pub async fn signup(&self, dto: SignupDto) -> DomainResult<AuthResult> {
        if dto.name.trim().is_empty() || dto.email.trim().is_empty() || dto.password.is_empty() {
            return Err(DomainError::validation("All fields are required"));
        }

        let role = dto.role.unwrap_or_default();
        if role == Role::Admin && !self.settings.allow_admin_signup {
            return Err(DomainError::Forbidden(Denial::RoleRequired(Role::Admin)));
        }

        let email = dto.email.trim().to_string();
        let mut users = self.docs.all::<User>().await?;
        if users.iter().any(|u| u.email == email) {
            return Err(DomainError::validation("User with this email already exists"));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: dto.name.trim().to_string(),
            email,
            password_hash: self.hash(&dto.password)?,
            role,
            created_at: Utc::now(),
            updated_at: None,
        };
        users.push(user.clone());
        self.docs.replace_all(&users).await?;

        info!(user_id = %user.id, role = role.as_str(), "New user registered");
        self.authenticated(&user)
    }

    /// Authenticate by email and password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::validation("Email and password are required"));
        }

        let users = self.docs.all::<User>().await?;
        let Some(user) = users.iter().find(|u| u.email == email.trim()) else {
            return Err(DomainError::Unauthenticated("Invalid email or password".into()));
        };

        if !verify_password(password, &user.password_hash).unwrap_or(false) {
            warn!(user_id = %user.id, "Failed login attempt");
            return Err(DomainError::Unauthenticated("Invalid email or password".into()));
        }

        info!(user_id = %user.id, "User logged in");
        self.authenticated(user)
    }

    // ── Own account ─────────────────────────────────────────────

    pub async fn me(&self, identity: &Identity) -> DomainResult<PublicUser> {
        self.docs
            .get::<User>(&identity.id)
            .await
            .map(PublicUser::from)
    }

    /// Change name and/or email; absent or blank fields are left alone
    pub async fn update_profile(
        &self,
        identity: &Identity,
        dto: UpdateProfileDto,
    ) -> DomainResult<PublicUser> {
        let name = non_blank(dto.name);
        let email = non_blank(dto.email);

        let mut users = self.docs.all::<User>().await?;
        if let Some(email) = &email {
            if users.iter().any(|u| &u.email == email && u.id != identity.id) {
                return Err(DomainError::validation("Email already in use"));
            }
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == identity.id)
            .ok_or_else(|| DomainError::not_found("User", &identity.id))?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        user.updated_at = Some(Utc::now());
        let updated = PublicUser::from(&*user);

        self.docs.replace_all(&users).await?;
        self.journal
            .record(identity, ActivityAction::ProfileUpdated, None, "Profile updated")
            .await;
        Ok(updated)
    }

    /// Change the password after checking the current one
    pub async fn change_password(
        &self,
        identity: &Identity,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(DomainError::validation("Current and new passwords are required"));
        }

        let user = self.docs.get::<User>(&identity.id).await?;
        if !verify_password(current_password, &user.password_hash).unwrap_or(false) {
            return Err(DomainError::Unauthenticated("Current password is incorrect".into()));
        }

        let new_hash = self.hash(new_password)?;
        self.docs
            .update::<User, _>(&identity.id, |u| {
                u.password_hash = new_hash;
                u.updated_at = Some(Utc::now());
                Ok(())
            })
            .await?;

        info!(user_id = %identity.id, "Password changed");
        self.journal
            .record(identity, ActivityAction::PasswordChanged, None, "Password changed")
            .await;
        Ok(())
    }

    // ── Directory (admin) ───────────────────────────────────────

    /// Every client account
    pub async fn list_clients(&self, identity: &Identity) -> DomainResult<Vec<PublicUser>> {
        self.policy.require_role(identity, Role::Admin)?;
        Ok(self
            .docs
            .all::<User>()
            .await?
            .iter()
            .filter(|u| u.role == Role::Client)
            .map(PublicUser::from)
            .collect())
    }

    pub async fn get_user(&self, identity: &Identity, id: &str) -> DomainResult<PublicUser> {
        self.policy.require_role(identity, Role::Admin)?;
        self.docs.get::<User>(id).await.map(PublicUser::from)
    }

    // ── Bootstrap ───────────────────────────────────────────────

    /// Seed an admin account when no user exists yet.
    ///
    /// Returns the created admin, `None` when users were already present.
    pub async fn seed_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<PublicUser>> {
        required(email, "admin email")?;
        required(password, "admin password")?;

        let users = self.docs.all::<User>().await?;
        if !users.is_empty() {
            return Ok(None);
        }

        let admin = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: self.hash(password)?,
            role: Role::Admin,
            created_at: Utc::now(),
            updated_at: None,
        };
        let admin = self.docs.insert(admin).await?;
        Ok(Some(PublicUser::from(admin)))
    }

    fn hash(&self, password: &str) -> DomainResult<String> {
        hash_password_with_cost(password, self.settings.bcrypt_cost)
            .map_err(|e| DomainError::Unexpected(format!("Failed to hash password: {}", e)))
    }

    fn authenticated(&self, user: &User) -> DomainResult<AuthResult> {
        Ok(AuthResult {
            user: PublicUser::from(user),
            token: self.tokens.issue(user)?,
            expires_in: self.tokens.expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityLog;
    use crate::infrastructure::{InMemoryStore, JwtAuthority, JwtConfig};

    fn service(allow_admin_signup: bool) -> (UserService, Documents) {
        let docs = Documents::new(Arc::new(InMemoryStore::new()));
        let tokens = Arc::new(JwtAuthority::new(JwtConfig {
            secret: "test-secret".into(),
            expiration_hours: 1,
            issuer: "sitekeeper-test".into(),
        }));
        let settings = IdentitySettings {
            bcrypt_cost: 4,
            allow_admin_signup,
        };
        let service = UserService::new(docs.clone(), Journal::new(docs.clone()), tokens, settings);
        (service, docs)
    }

    fn signup(name: &str, email: &str) -> SignupDto {
        SignupDto {
            name: name.into(),
            email: email.into(),
            password: "secret1".into(),
            role: None,
        }
    }

    #[tokio::test]
    async fn signup_then_login() {
        let (svc, _) = service(false);
        let created = svc.signup(signup("Ana", "ana@example.com")).await.unwrap();
        assert_eq!(created.user.role, Role::Client);
        assert!(!created.token.is_empty());

        let logged_in = svc.login("ana@example.com", "secret1").await.unwrap();
        assert_eq!(logged_in.user.id, created.user.id);

        let err = svc.login("ana@example.com", "nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        let err = svc.login("ghost@example.com", "secret1").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn signup_rejects_duplicates_and_missing_fields() {
        let (svc, _) = service(false);
        svc.signup(signup("Ana", "ana@example.com")).await.unwrap();

        let err = svc.signup(signup("Other", "ana@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = svc.signup(signup("", "b@example.com")).await.unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[tokio::test]
    async fn admin_signup_follows_the_setting() {
        let dto = SignupDto {
            role: Some(Role::Admin),
            ..signup("Boss", "boss@example.com")
        };

        let (closed, _) = service(false);
        let err = closed.signup(dto.clone()).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(Denial::RoleRequired(Role::Admin))));

        let (open, _) = service(true);
        assert_eq!(open.signup(dto).await.unwrap().user.role, Role::Admin);
    }

    #[tokio::test]
    async fn profile_update_checks_email_ownership() {
        let (svc, docs) = service(false);
        let ana = svc.signup(signup("Ana", "ana@example.com")).await.unwrap().user;
        svc.signup(signup("Bob", "bob@example.com")).await.unwrap();
        let me = Identity::client(&ana.id);

        let err = svc
            .update_profile(
                &me,
                UpdateProfileDto {
                    name: None,
                    email: Some("bob@example.com".into()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email already in use");

        let updated = svc
            .update_profile(
                &me,
                UpdateProfileDto {
                    name: Some("Ana Maria".into()),
                    email: Some("ana@example.com".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Ana Maria");
        assert!(updated.updated_at.is_some());

        let logs = docs.all::<ActivityLog>().await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, ActivityAction::ProfileUpdated);
    }

    #[tokio::test]
    async fn change_password_requires_the_current_one() {
        let (svc, _) = service(false);
        let ana = svc.signup(signup("Ana", "ana@example.com")).await.unwrap().user;
        let me = Identity::client(&ana.id);

        let err = svc.change_password(&me, "wrong", "next1").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthenticated(_)));
        let err = svc.change_password(&me, "", "next1").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        svc.change_password(&me, "secret1", "next1").await.unwrap();
        assert!(svc.login("ana@example.com", "next1").await.is_ok());
        assert!(svc.login("ana@example.com", "secret1").await.is_err());
    }

    #[tokio::test]
    async fn directory_is_admin_only() {
        let (svc, _) = service(false);
        let admin = svc
            .seed_admin("Admin", "admin@example.com", "admin123")
            .await
            .unwrap()
            .unwrap();
        let ana = svc.signup(signup("Ana", "ana@example.com")).await.unwrap().user;

        let clients = svc.list_clients(&Identity::admin(&admin.id)).await.unwrap();
        assert_eq!(clients, vec![ana.clone()]);

        let err = svc.list_clients(&Identity::client(&ana.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        let err = svc
            .get_user(&Identity::admin(&admin.id), "missing")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn seed_admin_only_runs_on_an_empty_store() {
        let (svc, _) = service(false);
        svc.signup(signup("Ana", "ana@example.com")).await.unwrap();

        let seeded = svc
            .seed_admin("Admin", "admin@example.com", "admin123")
            .await
            .unwrap();
        assert!(seeded.is_none());
    }
}
