//! Domain types for the site content tables.
//!
//! These are the validated domain objects shared by the public site (read
//! side) and the admin API (write side). Database row types and their
//! conversions live in each binary's `db` module; this module is plain data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, HslColor, LocationId, MenuItemId, Price};

/// One line of the hero title, with its own HSL color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroLine {
    /// Line text.
    pub text: String,
    /// HSL triplet for this line, e.g. `"0 72% 51%"`.
    pub color: String,
}

/// An alternating text/image block shown on the about page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookingHighlight {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// The singleton site settings row.
///
/// Drives SEO metadata, theme colors, and all settings-editable copy and
/// imagery on the public site. There is exactly one row; the admin API
/// replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site name, shown in the navbar and browser tab.
    pub seo_title: String,
    /// Meta description for search engines.
    pub seo_description: String,
    /// Eyebrow text above the hero title, e.g. "Authentic Middle Eastern".
    pub hero_tagline: String,
    /// Hero title, one colored line per entry.
    pub hero_title_lines: Vec<HeroLine>,
    /// Copy under the hero title.
    pub hero_subtitle: String,
    /// Hero background image (desktop).
    pub hero_image_url: Option<String>,
    /// Hero background image (mobile).
    pub hero_image_mobile_url: Option<String>,
    pub about_title: String,
    pub about_description: String,
    pub about_image_url: Option<String>,
    pub about_image_2_url: Option<String>,
    /// Heading above the locations grid.
    pub locations_section_title: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    /// Theme colors, injected as CSS variables on every page.
    pub primary_color: HslColor,
    pub secondary_color: HslColor,
    pub background_color: HslColor,
    pub footer_bg_color: HslColor,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    /// Per-page header images.
    pub menu_header_image_url: Option<String>,
    pub about_header_image_url: Option<String>,
    pub contact_header_image_url: Option<String>,
    /// "How we cook" blocks on the about page.
    pub how_we_cook: Vec<CookingHighlight>,
    pub updated_at: DateTime<Utc>,
}

/// A restaurant location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub whatsapp_number: Option<String>,
    pub whatsapp_link: Option<String>,
    /// Raw map embed markup, rendered as-is on location cards.
    pub maps_embed: Option<String>,
    /// Display order, ascending.
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// A menu category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display order, ascending.
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// A dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    /// Category name, joined in for display; `None` for uncategorized items.
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    /// Unavailable items stay listed but are marked sold out.
    pub is_available: bool,
    /// Featured items appear on the home page (when also available).
    pub is_featured: bool,
    /// Optional badge label, e.g. "20% off" or "New".
    pub tag: Option<String>,
    pub created_at: DateTime<Utc>,
}
