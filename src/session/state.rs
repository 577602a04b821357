//! État de la session et règle d'inversion

use crate::locale::Language;

/// Tout ce que l'interface affiche
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub input_text: String,
    pub output_text: String,
    pub source: Language,
    pub target: String,
    pub listening: bool,
    /// Dernière langue détectée par le service
    pub detected: Option<String>,
}

impl SessionState {
    /// État vide avec les langues données
    pub fn new(source: Language, target: impl Into<String>) -> Self {
        Self {
            input_text: String::new(),
            output_text: String::new(),
            source,
            target: target.into(),
            listening: false,
            detected: None,
        }
    }

    /// Inverse les langues et les textes
    ///
    /// `auto` ne peut pas devenir la cible: avec une source `auto`, la
    /// dernière langue détectée devient la cible. Sans détection, seuls les
    /// textes changent de place.
    pub fn swap(&mut self) {
        match &mut self.source {
            Language::Code(source) => std::mem::swap(source, &mut self.target),
            Language::Auto => {
                if let Some(detected) = self.detected.clone() {
                    let target = std::mem::replace(&mut self.target, detected);
                    self.source = Language::Code(target);
                }
            }
        }
        std::mem::swap(&mut self.input_text, &mut self.output_text);
    }
}
