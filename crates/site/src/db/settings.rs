//! Site settings reader.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use zaatar_core::{CookingHighlight, HeroLine, HslColor, SiteSettings};

use super::RepositoryError;

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

/// Reader for the settings singleton.
pub struct SettingsReader<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsReader<'a> {
    /// Create a new settings reader.
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
        let row = sqlx::query_as::<_, SiteSettingsRow>(
            r"
            SELECT seo_title, seo_description, hero_tagline, hero_title_lines,
                   hero_subtitle, hero_image_url, hero_image_mobile_url,
                   about_title, about_description, about_image_url,
                   about_image_2_url, locations_section_title, facebook_url,
                   instagram_url, primary_color, secondary_color,
                   background_color, footer_bg_color, logo_url, favicon_url,
                   menu_header_image_url, about_header_image_url,
                   contact_header_image_url, how_we_cook, updated_at
            FROM site_settings
            LIMIT 1
            ",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }
}
