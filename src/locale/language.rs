//! Sélection des langues source et cible

use super::table::{resolve_locale, DEFAULT_LOCALE};
use std::fmt;

/// Langue sélectionnée, un code ou la détection automatique
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Détection automatique de la langue source
    #[default]
    Auto,
    /// Code court de traduction ("en", "zh-CN", ...)
    Code(String),
}

impl Language {
    /// Valeur comprise par le service de traduction
    pub const AUTO: &'static str = "auto";

    /// Retourne le code envoyé au service de traduction
    pub fn code(&self) -> &str {
        match self {
            Language::Auto => Self::AUTO,
            Language::Code(code) => code,
        }
    }

    /// Crée une langue depuis un code, "auto" (toute casse) pour la détection
    ///
    /// La casse est conservée pour les variantes régionales comme `zh-TW`.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case(Self::AUTO) || code.is_empty() {
            Language::Auto
        } else {
            Language::Code(code.to_string())
        }
    }

    /// Vrai pour la détection automatique
    pub fn is_auto(&self) -> bool {
        matches!(self, Language::Auto)
    }

    /// Locale utilisée par les moteurs vocaux pour cette langue
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::Auto => DEFAULT_LOCALE,
            Language::Code(code) => resolve_locale(code),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
