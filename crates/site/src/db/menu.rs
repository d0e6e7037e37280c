//! Menu reader: categories and menu items.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use zaatar_core::{Category, CategoryId, MenuItem, MenuItemId, Price};

use super::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    sort_order: i32,
    created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.name,
            sort_order: row.sort_order,
            created_at: row.created_at,
        }
    }
}

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

const SELECT_WITH_CATEGORY: &str = r"
    SELECT menu_item.id, menu_item.name, menu_item.description,
           menu_item.price, menu_item.category_id,
           category.name AS category_name, menu_item.image_url,
           menu_item.is_available, menu_item.is_featured, menu_item.tag,
           menu_item.created_at
    FROM menu_item
    LEFT JOIN category ON category.id = menu_item.category_id
";

/// Reader for menu content.
pub struct MenuReader<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuReader<'a> {
    /// Create a new menu reader.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r"
            SELECT id, name, sort_order, created_at
            FROM category
            ORDER BY sort_order ASC, created_at ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List menu items newest-first, optionally filtered by category.
    ///
    /// Unavailable items are included; the menu page marks them sold out.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(
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

    /// List items for the home page: featured and currently available.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            r"
            {SELECT_WITH_CATEGORY}
            WHERE menu_item.is_featured AND menu_item.is_available
            ORDER BY menu_item.created_at DESC
            "
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a single menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn item(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepositoryError> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "{SELECT_WITH_CATEGORY} WHERE menu_item.id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
