//! Site settings repository (write side).
//!
//! The settings table holds exactly one row, seeded by migration; updates
//! replace it wholesale.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use zaatar_core::{CookingHighlight, HeroLine, HslColor, SiteSettings};

use super::RepositoryError;

/// Internal row type for the settings singleton.
#[derive(Debug, sqlx::FromRow)]
struct SiteSettingsRow {
    seo_title: String,
    seo_description: String,
    hero_tagline: String,
    hero_title_lines: Json<Vec<HeroLine>>,
    hero_subtitle: String,
    hero_image_url: Option<String>,
    hero_image_mobile_url: Option<String>,
    about_title: String,
    about_description: String,
    about_image_url: Option<String>,
    about_image_2_url: Option<String>,
    locations_section_title: String,
    facebook_url: Option<String>,
    instagram_url: Option<String>,
    primary_color: HslColor,
    secondary_color: HslColor,
    background_color: HslColor,
    footer_bg_color: HslColor,
    logo_url: Option<String>,
    favicon_url: Option<String>,
    menu_header_image_url: Option<String>,
    about_header_image_url: Option<String>,
    contact_header_image_url: Option<String>,
    how_we_cook: Json<Vec<CookingHighlight>>,
    updated_at: DateTime<Utc>,
}

impl From<SiteSettingsRow> for SiteSettings {
    fn from(row: SiteSettingsRow) -> Self {
        Self {
            seo_title: row.seo_title,
            seo_description: row.seo_description,
            hero_tagline: row.hero_tagline,
            hero_title_lines: row.hero_title_lines.0,
            hero_subtitle: row.hero_subtitle,
            hero_image_url: row.hero_image_url,
            hero_image_mobile_url: row.hero_image_mobile_url,
            about_title: row.about_title,
            about_description: row.about_description,
            about_image_url: row.about_image_url,
            about_image_2_url: row.about_image_2_url,
            locations_section_title: row.locations_section_title,
            facebook_url: row.facebook_url,
            instagram_url: row.instagram_url,
            primary_color: row.primary_color,
            secondary_color: row.secondary_color,
            background_color: row.background_color,
            footer_bg_color: row.footer_bg_color,
            logo_url: row.logo_url,
            favicon_url: row.favicon_url,
            menu_header_image_url: row.menu_header_image_url,
            about_header_image_url: row.about_header_image_url,
            contact_header_image_url: row.contact_header_image_url,
            how_we_cook: row.how_we_cook.0,
            updated_at: row.updated_at,
        }
    }
}

const SETTINGS_COLUMNS: &str = r"
    seo_title, seo_description, hero_tagline, hero_title_lines, hero_subtitle,
    hero_image_url, hero_image_mobile_url, about_title, about_description,
    about_image_url, about_image_2_url, locations_section_title, facebook_url,
    instagram_url, primary_color, secondary_color, background_color,
    footer_bg_color, logo_url, favicon_url, menu_header_image_url,
    about_header_image_url, contact_header_image_url, how_we_cook, updated_at
";

/// A full replacement for the settings row (everything but `updated_at`).
#[derive(Debug, Clone)]
pub struct SettingsUpdate {
    pub seo_title: String,
    pub seo_description: String,
    pub hero_tagline: String,
    pub hero_title_lines: Vec<HeroLine>,
    pub hero_subtitle: String,
    pub hero_image_url: Option<String>,
    pub hero_image_mobile_url: Option<String>,
    pub about_title: String,
    pub about_description: String,
    pub about_image_url: Option<String>,
    pub about_image_2_url: Option<String>,
    pub locations_section_title: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub primary_color: HslColor,
    pub secondary_color: HslColor,
    pub background_color: HslColor,
    pub footer_bg_color: HslColor,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub menu_header_image_url: Option<String>,
    pub about_header_image_url: Option<String>,
    pub contact_header_image_url: Option<String>,
    pub how_we_cook: Vec<CookingHighlight>,
}

/// Repository for the settings singleton.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row is missing (migrations
    /// not run), `RepositoryError::Database` on query failure.
    pub async fn get(&self) -> Result<SiteSettings, RepositoryError> {
        let row = sqlx::query_as::<_, SiteSettingsRow>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM site_settings LIMIT 1"
        ))
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Replace the settings row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row is missing,
    /// `RepositoryError::Database` on query failure.
    pub async fn update(&self, update: &SettingsUpdate) -> Result<SiteSettings, RepositoryError> {
        let row = sqlx::query_as::<_, SiteSettingsRow>(&format!(
            r"
            UPDATE site_settings SET
                seo_title = $1, seo_description = $2, hero_tagline = $3,
                hero_title_lines = $4, hero_subtitle = $5, hero_image_url = $6,
                hero_image_mobile_url = $7, about_title = $8,
                about_description = $9, about_image_url = $10,
                about_image_2_url = $11, locations_section_title = $12,
                facebook_url = $13, instagram_url = $14, primary_color = $15,
                secondary_color = $16, background_color = $17,
                footer_bg_color = $18, logo_url = $19, favicon_url = $20,
                menu_header_image_url = $21, about_header_image_url = $22,
                contact_header_image_url = $23, how_we_cook = $24,
                updated_at = NOW()
            RETURNING {SETTINGS_COLUMNS}
            "
        ))
        .bind(&update.seo_title)
        .bind(&update.seo_description)
        .bind(&update.hero_tagline)
        .bind(Json(&update.hero_title_lines))
        .bind(&update.hero_subtitle)
        .bind(update.hero_image_url.as_deref())
        .bind(update.hero_image_mobile_url.as_deref())
        .bind(&update.about_title)
        .bind(&update.about_description)
        .bind(update.about_image_url.as_deref())
        .bind(update.about_image_2_url.as_deref())
        .bind(&update.locations_section_title)
        .bind(update.facebook_url.as_deref())
        .bind(update.instagram_url.as_deref())
        .bind(&update.primary_color)
        .bind(&update.secondary_color)
        .bind(&update.background_color)
        .bind(&update.footer_bg_color)
        .bind(update.logo_url.as_deref())
        .bind(update.favicon_url.as_deref())
        .bind(update.menu_header_image_url.as_deref())
        .bind(update.about_header_image_url.as_deref())
        .bind(update.contact_header_image_url.as_deref())
        .bind(Json(&update.how_we_cook))
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }
}
