//! Input validation helpers shared by the use cases.

use crate::locales::{message_with, word, Locale, MessageKey, WordKey};

/// Check a list of `(field, present)` pairs and build the localized
/// missing-parameters message for the ones that are absent.
///
/// Returns `None` when every field is present.
pub fn missing_params(locale: Locale, fields: &[(WordKey, bool)]) -> Option<String> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(key, _)| word(locale, *key))
        .collect();

    if missing.is_empty() {
        return None;
    }

    Some(message_with(
        locale,
        MessageKey::SomeParametersAreMissing,
        &[("missingParams", &missing.join(", "))],
    ))
}

/// Password shape rule: minimum length with at least one letter and one digit.
pub fn is_valid_password(plain: &str) -> bool {
    plain.len() >= crate::config::MIN_PASSWORD_LENGTH
        && plain.chars().any(|c| c.is_ascii_alphabetic())
        && plain.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_missing_fields_in_order() {
        let message = missing_params(
            Locale::En,
            &[
                (WordKey::Email, false),
                (WordKey::Password, true),
                (WordKey::Gender, false),
            ],
        )
        .unwrap();

        assert_eq!(message, "Some parameters are missing: email, gender.");
    }

    #[test]
    fn no_message_when_everything_is_present() {
        assert!(missing_params(Locale::En, &[(WordKey::Email, true)]).is_none());
    }

    #[test]
    fn password_shape() {
        assert!(is_valid_password("SecurePass123"));
        assert!(!is_valid_password("short1"));
        assert!(!is_valid_password("onlyletters"));
        assert!(!is_valid_password("12345678901"));
    }
}
