//! Theme color type for CSS variable injection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`HslColor`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum HslColorError {
    /// The input does not have exactly three components.
    #[error("HSL color must have three components: hue, saturation%, lightness%")]
    WrongComponentCount,
    /// The hue component is not a number in 0..=360.
    #[error("invalid hue: {0}")]
    InvalidHue(String),
    /// A saturation/lightness component is not a percentage in 0..=100.
    #[error("invalid percentage component: {0}")]
    InvalidPercentage(String),
}

/// A theme color in the space-separated HSL triplet form used by the site's
/// CSS variables, e.g. `"0 72% 51%"`.
///
/// The admin dashboard edits these as raw strings and the base template
/// interpolates them into `:root { --primary: hsl(H S% L%); ... }`, so the
/// value is validated on the way in and stored verbatim.
///
/// ```
/// use zaatar_core::HslColor;
///
/// assert!(HslColor::parse("0 72% 51%").is_ok());
/// assert!(HslColor::parse("220 20% 92%").is_ok());
///
/// assert!(HslColor::parse("#ff0000").is_err());   // not HSL
/// assert!(HslColor::parse("0 72%").is_err());     // missing lightness
/// assert!(HslColor::parse("400 72% 51%").is_err()); // hue out of range
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HslColor(String);

impl HslColor {
    /// Parse an `HslColor` from a space-separated triplet.
    ///
    /// # Errors
    ///
    /// Returns an error unless the input is `"<hue> <sat>% <light>%"` with
    /// hue in 0..=360 and percentages in 0..=100.
    pub fn parse(s: &str) -> Result<Self, HslColorError> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [hue, saturation, lightness] = parts.as_slice() else {
            return Err(HslColorError::WrongComponentCount);
        };

        let hue_value: f64 = hue
            .parse()
            .map_err(|_| HslColorError::InvalidHue((*hue).to_owned()))?;
        if !(0.0..=360.0).contains(&hue_value) {
            return Err(HslColorError::InvalidHue((*hue).to_owned()));
        }

        for component in [saturation, lightness] {
            let digits = component
                .strip_suffix('%')
                .ok_or_else(|| HslColorError::InvalidPercentage((*component).to_owned()))?;
            let value: f64 = digits
                .parse()
                .map_err(|_| HslColorError::InvalidPercentage((*component).to_owned()))?;
            if !(0.0..=100.0).contains(&value) {
                return Err(HslColorError::InvalidPercentage((*component).to_owned()));
            }
        }

        // Store the normalized single-spaced form
        Ok(Self(parts.join(" ")))
    }

    /// The triplet as a string slice, e.g. `"0 72% 51%"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HslColor {
    type Err = HslColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for HslColor {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for HslColor {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for HslColor {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_triplets() {
        assert!(HslColor::parse("0 72% 51%").is_ok());
        assert!(HslColor::parse("35 30% 95%").is_ok());
        assert!(HslColor::parse("360 0% 100%").is_ok());
        assert!(HslColor::parse("24.6 95% 53.1%").is_ok());
    }

    #[test]
    fn test_parse_normalizes_whitespace() {
        let color = HslColor::parse("  220   20%  92% ").unwrap();
        assert_eq!(color.as_str(), "220 20% 92%");
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(matches!(
            HslColor::parse("0 72%"),
            Err(HslColorError::WrongComponentCount)
        ));
        assert!(matches!(
            HslColor::parse("0 72% 51% 1"),
            Err(HslColorError::WrongComponentCount)
        ));
    }

    #[test]
    fn test_parse_rejects_hex() {
        assert!(HslColor::parse("#ff0000").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            HslColor::parse("400 72% 51%"),
            Err(HslColorError::InvalidHue(_))
        ));
        assert!(matches!(
            HslColor::parse("0 172% 51%"),
            Err(HslColorError::InvalidPercentage(_))
        ));
    }

    #[test]
    fn test_parse_requires_percent_suffix() {
        assert!(matches!(
            HslColor::parse("0 72 51"),
            Err(HslColorError::InvalidPercentage(_))
        ));
    }
}
