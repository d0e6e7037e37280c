//! Location repository (write side).

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

/// Fields for creating or updating a location.
#[derive(Debug, Clone)]
pub struct LocationInput {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub whatsapp_number: Option<String>,
    pub whatsapp_link: Option<String>,
    pub maps_embed: Option<String>,
    pub sort_order: i32,
}

const LOCATION_COLUMNS: &str = r"
    id, name, address, phone, whatsapp_number, whatsapp_link, maps_embed,
    sort_order, created_at
";

/// Repository for location database operations.
pub struct LocationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LocationRepository<'a> {
    /// Create a new location repository.
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
        let rows = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM location ORDER BY sort_order ASC, created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Create a location.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &LocationInput) -> Result<Location, RepositoryError> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r"
            INSERT INTO location
                (name, address, phone, whatsapp_number, whatsapp_link, maps_embed, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {LOCATION_COLUMNS}
            "
        ))
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(input.whatsapp_number.as_deref())
        .bind(input.whatsapp_link.as_deref())
        .bind(input.maps_embed.as_deref())
        .bind(input.sort_order)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Update a location.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the location doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: LocationId,
        input: &LocationInput,
    ) -> Result<Location, RepositoryError> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r"
            UPDATE location SET
                name = $2, address = $3, phone = $4, whatsapp_number = $5,
                whatsapp_link = $6, maps_embed = $7, sort_order = $8
            WHERE id = $1
            RETURNING {LOCATION_COLUMNS}
            "
        ))
        .bind(id.as_uuid())
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(input.whatsapp_number.as_deref())
        .bind(input.whatsapp_link.as_deref())
        .bind(input.maps_embed.as_deref())
        .bind(input.sort_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete a location.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the location doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: LocationId) -> Result<(), RepositoryError> {
        let result = sqlx::query(r"DELETE FROM location WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
