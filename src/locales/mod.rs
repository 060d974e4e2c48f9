//! Locale-aware message and word resources.
//!
//! Client-facing text is never hardcoded in use cases; every message comes
//! from these tables, keyed by the request locale.

mod messages;
mod words;

pub use messages::{message, message_with, MessageKey};
pub use words::{word, WordKey};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    PtBr,
}

impl Locale {
    /// Resolve a locale from an `Accept-Language` header value.
    ///
    /// Matches on the primary language subtag of the first listed range;
    /// anything unrecognized falls back to English.
    pub fn from_header_value(value: &str) -> Self {
        let first = value.split(',').next().unwrap_or_default().trim();
        let primary = first
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if primary.starts_with("es") {
            Locale::Es
        } else if primary.starts_with("pt") {
            Locale::PtBr
        } else {
            Locale::En
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_locale_from_header() {
        assert_eq!(Locale::from_header_value("en-US,en;q=0.9"), Locale::En);
        assert_eq!(Locale::from_header_value("es"), Locale::Es);
        assert_eq!(Locale::from_header_value("pt-BR,pt;q=0.8"), Locale::PtBr);
        assert_eq!(Locale::from_header_value("fr-FR"), Locale::En);
        assert_eq!(Locale::from_header_value(""), Locale::En);
    }
}
