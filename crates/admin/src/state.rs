//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::db::{PgIdentityResolver, PgRoleStore};
use crate::services::roles::{IdentityResolver, RoleService, RoleStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the two collaborator handles the role
/// service runs on - constructed explicitly here, never as module-level
/// globals, so tests can build a [`RoleService`] over doubles instead.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    identity: Arc<dyn IdentityResolver>,
    roles: Arc<dyn RoleStore>,
    role_service: RoleService,
}

impl AppState {
    /// Create a new application state over the given pool.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        let identity: Arc<dyn IdentityResolver> = Arc::new(PgIdentityResolver::new(pool.clone()));
        let roles: Arc<dyn RoleStore> = Arc::new(PgRoleStore::new(pool.clone()));
        let role_service = RoleService::new(Arc::clone(&identity), Arc::clone(&roles));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                identity,
                roles,
                role_service,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the identity resolver collaborator.
    #[must_use]
    pub fn identity(&self) -> &Arc<dyn IdentityResolver> {
        &self.inner.identity
    }

    /// Get the role store collaborator.
    #[must_use]
    pub fn roles(&self) -> &Arc<dyn RoleStore> {
        &self.inner.roles
    }

    /// Get the admin role service.
    #[must_use]
    pub fn role_service(&self) -> &RoleService {
        &self.inner.role_service
    }
}
