//! Field validators shared by the content drafts

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex"));

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("color regex"));

/// Lowercase ASCII words separated by single hyphens, e.g. `about-us`.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("slug")
            .with_message("Slug must contain lowercase letters, digits and single hyphens".into()))
    }
}

pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_RE.is_match(color) {
        Ok(())
    } else {
        Err(ValidationError::new("color").with_message("Color must be #rgb or #rrggbb".into()))
    }
}

/// Rejects strings that are empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message("Field must not be blank".into()))
    } else {
        Ok(())
    }
}
