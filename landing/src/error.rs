//! Error types for content loading and browser glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure to load or validate the embedded site content.
///
/// These are fatal at startup: a page with half-valid content is never mounted.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no pricing tier is flagged popular")]
    NoPopularTier,

    #[error("{count} pricing tiers are flagged popular, expected exactly one")]
    MultiplePopularTiers { count: usize },

    #[error("review by {author} has rating {rating}, expected 1..=5")]
    RatingOutOfRange { author: String, rating: u8 },

    #[error("link {label:?} points at {target:?}, expected \"#\" or \"#anchor\"")]
    InvalidAnchor { label: String, target: String },

    #[error("image URL {url:?} is not https")]
    InsecureImageUrl { url: String },

    #[error("gallery has no images")]
    EmptyGallery,
}

/// Failure talking to the browser. Never fatal: callers log and degrade.
#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_record() {
        let err = ContentError::RatingOutOfRange {
            author: "Ananya".into(),
            rating: 7,
        };
        assert_eq!(
            err.to_string(),
            "review by Ananya has rating 7, expected 1..=5"
        );

        let err = ContentError::InvalidAnchor {
            label: "Gallery".into(),
            target: "gallery".into(),
        };
        assert!(err.to_string().contains("\"gallery\""));
    }

    #[test]
    fn multiple_popular_reports_count() {
        let err = ContentError::MultiplePopularTiers { count: 2 };
        assert!(err.to_string().starts_with("2 pricing tiers"));
    }

    #[test]
    fn dom_failures_carry_the_browser_message() {
        let err = DomError::Js("InvalidCharacterError".into());
        assert_eq!(err.to_string(), "browser call failed: InvalidCharacterError");
        assert_eq!(DomError::NoDocument.to_string(), "window has no document");
    }
}
