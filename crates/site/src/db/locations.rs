//! Location reader.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use zaatar_core::{Location, LocationId};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: Uuid,
    name: String,
    address: String,
    phone: String,
    whatsapp_number: Option<String>,
    whatsapp_link: Option<String>,
    maps_embed: Option<String>,
    sort_order: i32,
    created_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            id: LocationId::new(row.id),
            name: row.name,
            address: row.address,
            phone: row.phone,
            whatsapp_number: row.whatsapp_number,
            whatsapp_link: row.whatsapp_link,
            maps_embed: row.maps_embed,
            sort_order: row.sort_order,
            created_at: row.created_at,
        }
    }
}

/// Reader for locations.
pub struct LocationReader<'a> {
    pool: &'a PgPool,
}

impl<'a> LocationReader<'a> {
    /// Create a new location reader.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all locations in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Location>, RepositoryError> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r"
            SELECT id, name, address, phone, whatsapp_number, whatsapp_link,
                   maps_embed, sort_order, created_at
            FROM location
            ORDER BY sort_order ASC, created_at ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
