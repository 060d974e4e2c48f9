//! Custom extractors.

mod body;
mod locale;

pub use body::BodyJson;
pub use locale::RequestLocale;
