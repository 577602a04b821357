//! Codes de langue et locales vocales
//!
//! Associe les codes courts de traduction aux locales attendues par les
//! moteurs vocaux.

mod language;
mod table;

pub use language::Language;
pub use table::{is_known, resolve_locale, DEFAULT_LOCALE, LOCALES};
