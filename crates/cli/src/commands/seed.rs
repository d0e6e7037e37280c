//! Seed sample content for local development.
//!
//! Inserts a handful of categories, menu items, and one location so the
//! public site has something to render. Skips any table that already has
//! rows, so re-running is safe. The settings singleton itself is seeded by
//! migration, not here.

use rust_decimal::Decimal;

use zaatar_core::Price;

use zaatar_admin::db::menu_items::MenuItemInput;
use zaatar_admin::db::locations::LocationInput;
use zaatar_admin::db::{CategoryRepository, LocationRepository, MenuItemRepository};

use super::CliError;

/// Sample dishes per category: (name, description, price, featured, tag).
const SAMPLE_ITEMS: &[(&str, &str, &str, i64, bool, Option<&str>)] = &[
    ("Grill", "Chicken Shawarma", "Slow-marinated, carved off the spit, wrapped with garlic sauce and pickles.", 895, true, None),
    ("Grill", "Lamb Kofta", "Charcoal-grilled skewers with sumac onions and flatbread.", 1250, true, Some("Bestseller")),
    ("Mezze", "Hummus", "Silky chickpea dip with olive oil and warm bread.", 650, true, None),
    ("Mezze", "Falafel", "Crisp herb falafel with tahini.", 595, false, Some("Vegan")),
    ("Sweets", "Knafeh", "Warm cheese pastry in syrup with crushed pistachio.", 750, false, Some("New")),
];

/// Seed the database with sample content.
///
/// # Errors
///
/// Returns `CliError` if the environment is missing or any insert fails.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    let categories = CategoryRepository::new(&pool);
    if categories
        .count()
        .await
        .map_err(|e| CliError::Store(e.to_string()))?
        > 0
    {
        tracing::info!("Categories already present, skipping content seed");
        return Ok(());
    }

    let items = MenuItemRepository::new(&pool);
    let mut current: Option<(String, zaatar_core::CategoryId)> = None;

    for (index, (category_name, name, description, cents, featured, tag)) in
        SAMPLE_ITEMS.iter().enumerate()
    {
        let category_id = match &current {
            Some((existing, id)) if existing.as_str() == *category_name => *id,
            _ => {
                let category = categories
                    .create(category_name, i32::try_from(index).unwrap_or(0))
                    .await
                    .map_err(|e| CliError::Store(e.to_string()))?;
                tracing::info!("Created category: {}", category.name);
                current = Some(((*category_name).to_owned(), category.id));
                category.id
            }
        };

        let item = items
            .create(&MenuItemInput {
                name: (*name).to_owned(),
                description: Some((*description).to_owned()),
                price: Price::new(Decimal::new(*cents, 2)),
                category_id: Some(category_id),
                image_url: None,
                is_available: true,
                is_featured: *featured,
                tag: tag.map(str::to_owned),
            })
            .await
            .map_err(|e| CliError::Store(e.to_string()))?;
        tracing::info!("Created menu item: {}", item.name);
    }

    let location = LocationRepository::new(&pool)
        .create(&LocationInput {
            name: "Za'atar Kitchen - Old Town".to_owned(),
            address: "12 Spice Market Lane".to_owned(),
            phone: "+1 555 010 1234".to_owned(),
            whatsapp_number: Some("+1 555 010 1234".to_owned()),
            whatsapp_link: Some("https://wa.me/15550101234".to_owned()),
            maps_embed: None,
            sort_order: 0,
        })
        .await
        .map_err(|e| CliError::Store(e.to_string()))?;
    tracing::info!("Created location: {}", location.name);

    tracing::info!("Seed complete!");
    Ok(())
}
