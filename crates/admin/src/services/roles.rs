//! Admin role service.
//!
//! The privilege-sensitive part of the system: granting and revoking the
//! `admin` role. Both operations run against the server's own elevated
//! database credential, so the service re-validates the caller on every
//! request before touching the role store:
//!
//! 1. the request must carry a bearer credential that resolves to a live
//!    account (otherwise 401),
//! 2. that account must itself hold the `admin` grant (otherwise 403),
//! 3. only then is the request body validated and executed.
//!
//! Checking the caller before validating the body keeps "401 regardless of
//! payload" true while still guaranteeing malformed input never reaches the
//! store. Grants are idempotent upserts and revokes idempotent deletes, so
//! repeating an operation is a no-op. A caller can never revoke their own
//! grant through this path; bootstrap and recovery go through the CLI.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use zaatar_core::{AccountId, Role, RoleGrant};

use crate::models::Account;

/// Failure from an identity or role-store collaborator.
///
/// Surfaced to the client as a 500 with the diagnostic message.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CollaboratorError(pub String);

/// Resolves caller credentials and target emails to accounts.
///
/// Production backs this with the token and account tables; tests substitute
/// an in-memory double.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a bearer credential to a live account, if any.
    async fn authenticate(&self, bearer: &str) -> Result<Option<Account>, CollaboratorError>;

    /// Resolve an email address to an account by exact match.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CollaboratorError>;
}

/// Reads and writes role grants.
///
/// `grant` must be an upsert keyed on the (account, role) uniqueness
/// constraint and `revoke` a delete where absence is not an error - the
/// service's idempotence guarantees lean entirely on this.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Whether the account currently holds the role.
    async fn has_role(&self, account: AccountId, role: Role) -> Result<bool, CollaboratorError>;

    /// Grant the role to the account (no-op if already granted).
    async fn grant(&self, account: AccountId, role: Role) -> Result<(), CollaboratorError>;

    /// Revoke the role from the account (no-op if not granted).
    async fn revoke(&self, account: AccountId, role: Role) -> Result<(), CollaboratorError>;

    /// List all grants of the role.
    async fn list(&self, role: Role) -> Result<Vec<RoleGrant>, CollaboratorError>;
}

/// Errors returned by the role service, one per response status class.
#[derive(Debug, thiserror::Error)]
pub enum RoleServiceError {
    /// No or invalid caller credential (401).
    #[error("Unauthorized")]
    Unauthorized,

    /// Valid caller without the admin grant (403).
    #[error("Forbidden: not an admin")]
    Forbidden,

    /// Unrecognized `action` value (400).
    #[error("Invalid action")]
    InvalidAction,

    /// Structurally invalid request body (400).
    #[error("{0}")]
    MalformedRequest(String),

    /// The target email does not resolve to an account (400).
    #[error("No user found with that email. They must sign up first.")]
    UserNotFound,

    /// The caller tried to revoke their own grant (400).
    #[error("You cannot remove your own admin access.")]
    SelfRevokeForbidden,

    /// Identity provider or role store failure (500).
    #[error("{0}")]
    Collaborator(#[from] CollaboratorError),
}

/// A validated role-management command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCommand {
    /// Grant the admin role to the account with this email.
    Add { email: String },
    /// Revoke the admin role from this account.
    Remove { user_id: AccountId },
}

impl RoleCommand {
    /// Parse a command from a raw JSON request body.
    ///
    /// # Errors
    ///
    /// `MalformedRequest` for non-JSON or missing/ill-typed fields,
    /// `InvalidAction` for an unrecognized `action` value.
    pub fn parse(body: &str) -> Result<Self, RoleServiceError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|_| RoleServiceError::MalformedRequest("invalid JSON body".to_owned()))?;

        match value.get("action").and_then(Value::as_str) {
            Some("add") => {
                let email = value
                    .get("email")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .ok_or_else(|| {
                        RoleServiceError::MalformedRequest("email is required".to_owned())
                    })?;
                Ok(Self::Add {
                    email: email.to_owned(),
                })
            }
            Some("remove") => {
                let user_id = value
                    .get("userId")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse::<AccountId>().ok())
                    .ok_or_else(|| {
                        RoleServiceError::MalformedRequest(
                            "userId must be a valid user id".to_owned(),
                        )
                    })?;
                Ok(Self::Remove { user_id })
            }
            _ => Err(RoleServiceError::InvalidAction),
        }
    }
}

/// The admin role service.
///
/// Collaborators are passed in explicitly (never captured as globals) so
/// tests can substitute doubles per case.
#[derive(Clone)]
pub struct RoleService {
    identity: Arc<dyn IdentityResolver>,
    roles: Arc<dyn RoleStore>,
}

impl RoleService {
    /// Create a role service over the given collaborators.
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityResolver>, roles: Arc<dyn RoleStore>) -> Self {
        Self { identity, roles }
    }

    /// Authenticate the bearer credential and require the admin grant.
    async fn authorize_caller(
        &self,
        bearer: Option<&str>,
    ) -> Result<Account, RoleServiceError> {
        let bearer = bearer.ok_or(RoleServiceError::Unauthorized)?;
        let caller = self
            .identity
            .authenticate(bearer)
            .await?
            .ok_or(RoleServiceError::Unauthorized)?;

        if !self.roles.has_role(caller.id, Role::Admin).await? {
            return Err(RoleServiceError::Forbidden);
        }

        Ok(caller)
    }

    /// Execute a grant/revoke request.
    ///
    /// `body` is the raw JSON request body; it is only parsed after the
    /// caller has been authenticated and authorized.
    ///
    /// # Errors
    ///
    /// See [`RoleServiceError`]; every failure is terminal for the request.
    pub async fn execute(
        &self,
        bearer: Option<&str>,
        body: &str,
    ) -> Result<(), RoleServiceError> {
        let caller = self.authorize_caller(bearer).await?;

        match RoleCommand::parse(body)? {
            RoleCommand::Add { email } => {
                let target = self
                    .identity
                    .find_by_email(&email)
                    .await?
                    .ok_or(RoleServiceError::UserNotFound)?;

                self.roles.grant(target.id, Role::Admin).await?;
                tracing::info!(granted_to = %target.id, by = %caller.id, "admin role granted");
            }
            RoleCommand::Remove { user_id } => {
                if user_id == caller.id {
                    return Err(RoleServiceError::SelfRevokeForbidden);
                }

                self.roles.revoke(user_id, Role::Admin).await?;
                tracing::info!(revoked_from = %user_id, by = %caller.id, "admin role revoked");
            }
        }

        Ok(())
    }

    /// List current admin grants (admin callers only).
    ///
    /// # Errors
    ///
    /// Same authentication/authorization failures as [`Self::execute`].
    pub async fn list_admins(
        &self,
        bearer: Option<&str>,
    ) -> Result<Vec<RoleGrant>, RoleServiceError> {
        self.authorize_caller(bearer).await?;
        Ok(self.roles.list(Role::Admin).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;
    use zaatar_core::{Email, RoleGrantId};

    use super::*;

    fn account(email: &str) -> Account {
        Account {
            id: AccountId::generate(),
            email: Email::parse(email).unwrap(),
            created_at: Utc::now(),
        }
    }

    /// In-memory identity resolver: bearer "token-<email>" authenticates as
    /// the registered account with that email.
    struct StubIdentity {
        accounts: Vec<Account>,
        fail: bool,
    }

    impl StubIdentity {
        fn new(accounts: Vec<Account>) -> Self {
            Self {
                accounts,
                fail: false,
            }
        }
    }

    #[async_trait]
    impl IdentityResolver for StubIdentity {
        async fn authenticate(&self, bearer: &str) -> Result<Option<Account>, CollaboratorError> {
            if self.fail {
                return Err(CollaboratorError("identity provider down".to_owned()));
            }
            Ok(bearer.strip_prefix("token-").and_then(|email| {
                self.accounts
                    .iter()
                    .find(|a| a.email.as_str() == email)
                    .cloned()
            }))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CollaboratorError> {
            if self.fail {
                return Err(CollaboratorError("identity provider down".to_owned()));
            }
            Ok(self
                .accounts
                .iter()
                .find(|a| a.email.as_str() == email)
                .cloned())
        }
    }

    /// In-memory role store that records every write.
    #[derive(Default)]
    struct StubRoles {
        grants: Mutex<HashMap<AccountId, Role>>,
        writes: Mutex<u32>,
        fail_writes: bool,
    }

    impl StubRoles {
        fn with_admin(account: AccountId) -> Self {
            let store = Self::default();
            store.grants.lock().unwrap().insert(account, Role::Admin);
            store
        }

        fn write_count(&self) -> u32 {
            *self.writes.lock().unwrap()
        }

        fn is_admin(&self, account: AccountId) -> bool {
            self.grants.lock().unwrap().contains_key(&account)
        }
    }

    #[async_trait]
    impl RoleStore for StubRoles {
        async fn has_role(
            &self,
            account: AccountId,
            role: Role,
        ) -> Result<bool, CollaboratorError> {
            Ok(self.grants.lock().unwrap().get(&account) == Some(&role))
        }

        async fn grant(&self, account: AccountId, role: Role) -> Result<(), CollaboratorError> {
            if self.fail_writes {
                return Err(CollaboratorError("role store down".to_owned()));
            }
            *self.writes.lock().unwrap() += 1;
            self.grants.lock().unwrap().insert(account, role);
            Ok(())
        }

        async fn revoke(&self, account: AccountId, _role: Role) -> Result<(), CollaboratorError> {
            if self.fail_writes {
                return Err(CollaboratorError("role store down".to_owned()));
            }
            *self.writes.lock().unwrap() += 1;
            self.grants.lock().unwrap().remove(&account);
            Ok(())
        }

        async fn list(&self, role: Role) -> Result<Vec<RoleGrant>, CollaboratorError> {
            Ok(self
                .grants
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, r)| **r == role)
                .map(|(account_id, r)| RoleGrant {
                    id: RoleGrantId::generate(),
                    account_id: *account_id,
                    email: Email::parse("stub@example.com").unwrap(),
                    role: *r,
                    created_at: Utc::now(),
                })
                .collect())
        }
    }

    fn service(identity: StubIdentity, roles: Arc<StubRoles>) -> RoleService {
        RoleService::new(Arc::new(identity), roles)
    }

    #[tokio::test]
    async fn test_missing_credential_is_unauthorized_regardless_of_body() {
        let admin = account("admin@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(StubIdentity::new(vec![admin]), Arc::clone(&roles));

        for body in [
            r#"{"action": "add", "email": "x@example.com"}"#,
            r#"{"action": "bogus"}"#,
            "not even json",
        ] {
            let err = svc.execute(None, body).await.unwrap_err();
            assert!(matches!(err, RoleServiceError::Unauthorized), "body: {body}");
        }
        assert_eq!(roles.write_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_credential_is_unauthorized() {
        let admin = account("admin@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(StubIdentity::new(vec![admin]), Arc::clone(&roles));

        let err = svc
            .execute(Some("token-nobody@example.com"), r#"{"action": "bogus"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, RoleServiceError::Unauthorized));
    }

    #[tokio::test]
    async fn test_non_admin_caller_is_forbidden_and_no_write_occurs() {
        let admin = account("admin@example.com");
        let outsider = account("user@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(
            StubIdentity::new(vec![admin, outsider.clone()]),
            Arc::clone(&roles),
        );

        let err = svc
            .execute(
                Some("token-user@example.com"),
                r#"{"action": "add", "email": "user@example.com"}"#,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RoleServiceError::Forbidden));
        assert_eq!(roles.write_count(), 0);
        assert!(!roles.is_admin(outsider.id));
    }

    #[tokio::test]
    async fn test_add_grants_role_and_is_idempotent() {
        let admin = account("admin@example.com");
        let newcomer = account("new@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(
            StubIdentity::new(vec![admin, newcomer.clone()]),
            Arc::clone(&roles),
        );

        let body = r#"{"action": "add", "email": "new@example.com"}"#;
        svc.execute(Some("token-admin@example.com"), body)
            .await
            .unwrap();
        svc.execute(Some("token-admin@example.com"), body)
            .await
            .unwrap();

        // Upserts: still exactly one grant for the target.
        assert!(roles.is_admin(newcomer.id));
        assert_eq!(roles.grants.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_add_unknown_email_is_user_not_found_without_write() {
        let admin = account("admin@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(StubIdentity::new(vec![admin]), Arc::clone(&roles));

        let err = svc
            .execute(
                Some("token-admin@example.com"),
                r#"{"action": "add", "email": "nobody@nowhere.test"}"#,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RoleServiceError::UserNotFound));
        assert_eq!(roles.write_count(), 0);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let admin = account("admin@example.com");
        let former = account("former@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(
            StubIdentity::new(vec![admin, former.clone()]),
            Arc::clone(&roles),
        );

        // Removing a grant that never existed still succeeds.
        let body = format!(r#"{{"action": "remove", "userId": "{}"}}"#, former.id);
        svc.execute(Some("token-admin@example.com"), &body)
            .await
            .unwrap();
        svc.execute(Some("token-admin@example.com"), &body)
            .await
            .unwrap();

        assert!(!roles.is_admin(former.id));
    }

    #[tokio::test]
    async fn test_self_revoke_is_rejected_and_grant_untouched() {
        let admin = account("admin@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(
            StubIdentity::new(vec![admin.clone()]),
            Arc::clone(&roles),
        );

        let body = format!(r#"{{"action": "remove", "userId": "{}"}}"#, admin.id);
        let err = svc
            .execute(Some("token-admin@example.com"), &body)
            .await
            .unwrap_err();

        assert!(matches!(err, RoleServiceError::SelfRevokeForbidden));
        assert_eq!(roles.write_count(), 0);
        assert!(roles.is_admin(admin.id));
    }

    #[tokio::test]
    async fn test_unrecognized_action_is_invalid_for_authorized_admin() {
        let admin = account("admin@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(StubIdentity::new(vec![admin]), Arc::clone(&roles));

        let err = svc
            .execute(Some("token-admin@example.com"), r#"{"action": "bogus"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, RoleServiceError::InvalidAction));

        let err = svc
            .execute(Some("token-admin@example.com"), r"{}")
            .await
            .unwrap_err();
        assert!(matches!(err, RoleServiceError::InvalidAction));
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_without_store_access() {
        let admin = account("admin@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(StubIdentity::new(vec![admin]), Arc::clone(&roles));

        for body in [
            "not json",
            r#"{"action": "add"}"#,
            r#"{"action": "add", "email": "  "}"#,
            r#"{"action": "remove", "userId": "not-a-uuid"}"#,
            r#"{"action": "remove"}"#,
        ] {
            let err = svc
                .execute(Some("token-admin@example.com"), body)
                .await
                .unwrap_err();
            assert!(
                matches!(err, RoleServiceError::MalformedRequest(_)),
                "body: {body}"
            );
        }
        assert_eq!(roles.write_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_collaborator_error() {
        let admin = account("admin@example.com");
        let target = account("target@example.com");
        let mut roles = StubRoles::with_admin(admin.id);
        roles.fail_writes = true;
        let roles = Arc::new(roles);
        let svc = service(StubIdentity::new(vec![admin, target]), Arc::clone(&roles));

        let err = svc
            .execute(
                Some("token-admin@example.com"),
                r#"{"action": "add", "email": "target@example.com"}"#,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RoleServiceError::Collaborator(_)));
        assert_eq!(err.to_string(), "role store down");
    }

    #[tokio::test]
    async fn test_identity_failure_surfaces_as_collaborator_error() {
        let admin = account("admin@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let mut identity = StubIdentity::new(vec![admin]);
        identity.fail = true;
        let svc = service(identity, Arc::clone(&roles));

        let err = svc
            .execute(Some("token-admin@example.com"), r#"{"action": "bogus"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, RoleServiceError::Collaborator(_)));
    }

    #[tokio::test]
    async fn test_list_admins_requires_admin_caller() {
        let admin = account("admin@example.com");
        let outsider = account("user@example.com");
        let roles = Arc::new(StubRoles::with_admin(admin.id));
        let svc = service(
            StubIdentity::new(vec![admin, outsider]),
            Arc::clone(&roles),
        );

        assert!(matches!(
            svc.list_admins(None).await.unwrap_err(),
            RoleServiceError::Unauthorized
        ));
        assert!(matches!(
            svc.list_admins(Some("token-user@example.com"))
                .await
                .unwrap_err(),
            RoleServiceError::Forbidden
        ));

        let grants = svc
            .list_admins(Some("token-admin@example.com"))
            .await
            .unwrap();
        assert_eq!(grants.len(), 1);
    }

    #[test]
    fn test_parse_add_command() {
        let cmd = RoleCommand::parse(r#"{"action": "add", "email": " a@b.c "}"#).unwrap();
        assert_eq!(
            cmd,
            RoleCommand::Add {
                email: "a@b.c".to_owned()
            }
        );
    }

    #[test]
    fn test_parse_remove_command() {
        let id = AccountId::generate();
        let cmd =
            RoleCommand::parse(&format!(r#"{{"action": "remove", "userId": "{id}"}}"#)).unwrap();
        assert_eq!(cmd, RoleCommand::Remove { user_id: id });
    }
}
