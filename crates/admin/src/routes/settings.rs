//! Site settings route handlers.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use zaatar_core::{CookingHighlight, HeroLine, HslColor, SiteSettings};

use crate::db::SettingsRepository;
use crate::db::settings::SettingsUpdate;
use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Build the settings router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/settings", get(read).put(update))
}

/// Request body for replacing the settings row.
///
/// Colors arrive as raw strings and are validated here, before the
/// repository sees them.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub seo_title: String,
    pub seo_description: String,
    pub hero_tagline: String,
    #[serde(default)]
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
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub footer_bg_color: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub menu_header_image_url: Option<String>,
    pub about_header_image_url: Option<String>,
    pub contact_header_image_url: Option<String>,
    #[serde(default)]
    pub how_we_cook: Vec<CookingHighlight>,
}

fn parse_color(value: &str, field: &str) -> Result<HslColor, AppError> {
    HslColor::parse(value).map_err(|e| AppError::BadRequest(format!("{field}: {e}")))
}

impl UpdateSettingsRequest {
    fn into_update(self) -> Result<SettingsUpdate, AppError> {
        // Hero line colors ride along inside JSONB; validate them too.
        for line in &self.hero_title_lines {
            parse_color(&line.color, "hero_title_lines.color")?;
        }

        Ok(SettingsUpdate {
            primary_color: parse_color(&self.primary_color, "primary_color")?,
            secondary_color: parse_color(&self.secondary_color, "secondary_color")?,
            background_color: parse_color(&self.background_color, "background_color")?,
            footer_bg_color: parse_color(&self.footer_bg_color, "footer_bg_color")?,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            hero_tagline: self.hero_tagline,
            hero_title_lines: self.hero_title_lines,
            hero_subtitle: self.hero_subtitle,
            hero_image_url: self.hero_image_url,
            hero_image_mobile_url: self.hero_image_mobile_url,
            about_title: self.about_title,
            about_description: self.about_description,
            about_image_url: self.about_image_url,
            about_image_2_url: self.about_image_2_url,
            locations_section_title: self.locations_section_title,
            facebook_url: self.facebook_url,
            instagram_url: self.instagram_url,
            logo_url: self.logo_url,
            favicon_url: self.favicon_url,
            menu_header_image_url: self.menu_header_image_url,
            about_header_image_url: self.about_header_image_url,
            contact_header_image_url: self.contact_header_image_url,
            how_we_cook: self.how_we_cook,
        })
    }
}

/// Read the settings singleton.
#[instrument(skip(state))]
pub async fn read(RequireAdmin(_admin): RequireAdmin, State(state): State<AppState>) -> Response {
    match SettingsRepository::new(state.pool()).get().await {
        Ok(settings) => Json::<SiteSettings>(settings).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Replace the settings singleton.
#[instrument(skip(state, request))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Response {
    let update = match request.into_update() {
        Ok(update) => update,
        Err(e) => return e.into_response(),
    };

    match SettingsRepository::new(state.pool()).update(&update).await {
        Ok(settings) => {
            tracing::info!(by = %admin.id, "site settings updated");
            Json::<SiteSettings>(settings).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
