//! Localized message table.

use super::Locale;

/// Keys for client-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    SomethingWentWrong,
    AuthorizationRequired,
    InvalidUserOrPassword,
    ErrorCreatingUser,
    UserWasCreated,
    UserWithEmailAlreadyExists,
    InvalidEmail,
    InvalidPassword,
    InvalidSession,
    SessionClosed,
    SomeParametersAreMissing,
    ApplicationStatusOk,
}

/// Get the message text for a key in the given locale.
pub fn message(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => en(key),
        Locale::Es => es(key),
        Locale::PtBr => pt_br(key),
    }
}

/// Get a parameterized message, replacing each `{{name}}` placeholder.
pub fn message_with(locale: Locale, key: MessageKey, params: &[(&str, &str)]) -> String {
    let mut text = message(locale, key).to_string();
    for (name, value) in params {
        text = text.replace(&format!("{{{{{name}}}}}"), value);
    }
    text
}

fn en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::SomethingWentWrong => "Oh sorry, something went wrong with the current action!",
        MessageKey::AuthorizationRequired => "Authorization is required.",
        MessageKey::InvalidUserOrPassword => "Invalid user or password.",
        MessageKey::ErrorCreatingUser => "Error creating user.",
        MessageKey::UserWasCreated => "User was created.",
        MessageKey::UserWithEmailAlreadyExists => {
            "A user with email address {{email}} has already been registered."
        }
        MessageKey::InvalidEmail => "Invalid email address.",
        MessageKey::InvalidPassword => "Invalid password.",
        MessageKey::InvalidSession => "Invalid session.",
        MessageKey::SessionClosed => "Session successfully closed.",
        MessageKey::SomeParametersAreMissing => "Some parameters are missing: {{missingParams}}.",
        MessageKey::ApplicationStatusOk => "Application is running.",
    }
}

fn es(key: MessageKey) -> &'static str {
    match key {
        MessageKey::SomethingWentWrong => "¡Lo sentimos, algo salió mal con la acción actual!",
        MessageKey::AuthorizationRequired => "Autorización requerida.",
        MessageKey::InvalidUserOrPassword => "Usuario o contraseña inválidos.",
        MessageKey::ErrorCreatingUser => "Error al crear el usuario.",
        MessageKey::UserWasCreated => "El usuario fue creado.",
        MessageKey::UserWithEmailAlreadyExists => {
            "Un usuario ya se ha registrado con la dirección de correo: {{email}}."
        }
        MessageKey::InvalidEmail => "Correo electrónico inválido.",
        MessageKey::InvalidPassword => "Contraseña inválida.",
        MessageKey::InvalidSession => "Sesión inválida.",
        MessageKey::SessionClosed => "Sesión cerrada con éxito.",
        MessageKey::SomeParametersAreMissing => "Faltan algunos parámetros: {{missingParams}}.",
        MessageKey::ApplicationStatusOk => "La aplicación está en funcionamiento.",
    }
}

fn pt_br(key: MessageKey) -> &'static str {
    match key {
        MessageKey::SomethingWentWrong => {
            "Oh, desculpe, algo deu errado com a ação atual!"
        }
        MessageKey::AuthorizationRequired => "Autorização necessária.",
        MessageKey::InvalidUserOrPassword => "Usuário ou senha inválidos.",
        MessageKey::ErrorCreatingUser => "Erro ao criar usuário.",
        MessageKey::UserWasCreated => "Usuário foi criado.",
        MessageKey::UserWithEmailAlreadyExists => {
            "Um usuário já se registrou com o endereço de e-mail: {{email}}."
        }
        MessageKey::InvalidEmail => "E-mail inválido.",
        MessageKey::InvalidPassword => "Senha inválida.",
        MessageKey::InvalidSession => "Sessão inválida.",
        MessageKey::SessionClosed => "Sessão encerrada com sucesso.",
        MessageKey::SomeParametersAreMissing => "Alguns parâmetros estão faltando: {{missingParams}}.",
        MessageKey::ApplicationStatusOk => "A aplicação está em execução.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_named_params() {
        let text = message_with(
            Locale::En,
            MessageKey::UserWithEmailAlreadyExists,
            &[("email", "nikola@tesla.com")],
        );
        assert_eq!(
            text,
            "A user with email address nikola@tesla.com has already been registered."
        );
    }

    #[test]
    fn leaves_unknown_placeholders_untouched() {
        let text = message_with(Locale::En, MessageKey::SomeParametersAreMissing, &[]);
        assert!(text.contains("{{missingParams}}"));
    }

    #[test]
    fn every_locale_has_the_authorization_message() {
        for locale in [Locale::En, Locale::Es, Locale::PtBr] {
            assert!(!message(locale, MessageKey::AuthorizationRequired).is_empty());
        }
    }
}
