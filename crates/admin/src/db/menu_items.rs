//! Menu item repository (write side).

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use zaatar_core::{CategoryId, MenuItem, MenuItemId, Price};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    price: Price,
    category_id: Option<Uuid>,
    category_name: Option<String>,
    image_url: Option<String>,
    is_available: bool,
    is_featured: bool,
    tag: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            id: MenuItemId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            category_id: row.category_id.map(CategoryId::new),
            category_name: row.category_name,
            image_url: row.image_url,
            is_available: row.is_available,
            is_featured: row.is_featured,
            tag: row.tag,
            created_at: row.created_at,
        }
    }
}

/// Fields for creating or updating a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub tag: Option<String>,
}

const SELECT_WITH_CATEGORY: &str = r"
    SELECT menu_item.id, menu_item.name, menu_item.description,
           menu_item.price, menu_item.category_id,
           category.name AS category_name, menu_item.image_url,
           menu_item.is_available, menu_item.is_featured, menu_item.tag,
           menu_item.created_at
    FROM menu_item
    LEFT JOIN category ON category.id = menu_item.category_id
";

/// Repository for menu item database operations.
pub struct MenuItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuItemRepository<'a> {
    /// Create a new menu item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List menu items newest-first, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        category: Option<CategoryId>,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            r"
            {SELECT_WITH_CATEGORY}
            WHERE $1::uuid IS NULL OR menu_item.category_id = $1
            ORDER BY menu_item.created_at DESC
            "
        ))
        .bind(category.map(|c| c.as_uuid()))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a menu item by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepositoryError> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "{SELECT_WITH_CATEGORY} WHERE menu_item.id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &MenuItemInput) -> Result<MenuItem, RepositoryError> {
        let id: Uuid = sqlx::query_scalar(
            r"
            INSERT INTO menu_item
                (name, description, price, category_id, image_url,
                 is_available, is_featured, tag)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.price)
        .bind(input.category_id.map(|c| c.as_uuid()))
        .bind(input.image_url.as_deref())
        .bind(input.is_available)
        .bind(input.is_featured)
        .bind(input.tag.as_deref())
        .fetch_one(self.pool)
        .await?;

        self.get(MenuItemId::new(id))
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// Update a menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: MenuItemId,
        input: &MenuItemInput,
    ) -> Result<MenuItem, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE menu_item SET
                name = $2, description = $3, price = $4, category_id = $5,
                image_url = $6, is_available = $7, is_featured = $8, tag = $9
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.price)
        .bind(input.category_id.map(|c| c.as_uuid()))
        .bind(input.image_url.as_deref())
        .bind(input.is_available)
        .bind(input.is_featured)
        .bind(input.tag.as_deref())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        self.get(id).await?.ok_or(RepositoryError::NotFound)
    }

    /// Delete a menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: MenuItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query(r"DELETE FROM menu_item WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
