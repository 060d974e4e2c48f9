//! Localized field-name table, used to compose validation messages.

use super::Locale;

/// Keys for field names referenced in validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKey {
    Email,
    Password,
    FirstName,
    LastName,
    Gender,
}

/// Get the field name for a key in the given locale.
pub fn word(locale: Locale, key: WordKey) -> &'static str {
    match locale {
        Locale::En => match key {
            WordKey::Email => "email",
            WordKey::Password => "password",
            WordKey::FirstName => "first name",
            WordKey::LastName => "last name",
            WordKey::Gender => "gender",
        },
        Locale::Es => match key {
            WordKey::Email => "correo electrónico",
            WordKey::Password => "contraseña",
            WordKey::FirstName => "nombre",
            WordKey::LastName => "apellido",
            WordKey::Gender => "género",
        },
        Locale::PtBr => match key {
            WordKey::Email => "e-mail",
            WordKey::Password => "senha",
            WordKey::FirstName => "nome",
            WordKey::LastName => "sobrenome",
            WordKey::Gender => "gênero",
        },
    }
}
