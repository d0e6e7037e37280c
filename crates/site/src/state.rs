//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;

use zaatar_core::SiteSettings;

use crate::config::SiteConfig;
use crate::db::{RepositoryError, SettingsReader};

/// How long a settings snapshot stays fresh. Matches the dashboard's own
/// expectations: edits show up on the public site within five minutes.
const SETTINGS_TTL: Duration = Duration::from_secs(5 * 60);

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The settings singleton is read on every
/// page, so it sits behind an in-process cache; all other content is
/// queried per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    settings_cache: Cache<(), SiteSettings>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig, pool: PgPool) -> Self {
        let settings_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(SETTINGS_TTL)
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                settings_cache,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the current settings snapshot, hitting the database only when the
    /// cached copy has expired.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the row is missing or the query fails.
    pub async fn settings(&self) -> Result<SiteSettings, RepositoryError> {
        if let Some(settings) = self.inner.settings_cache.get(&()).await {
            return Ok(settings);
        }

        // Failed lookups are not cached; the next request retries.
        let settings = SettingsReader::new(&self.inner.pool).get().await?;
        self.inner.settings_cache.insert((), settings.clone()).await;
        Ok(settings)
    }
}
