//! Trait principal et types de la traduction

use crate::locale::Language;
use async_trait::async_trait;
use thiserror::Error;

/// Requête de traduction
///
/// Construite uniquement via [`TranslationRequest::new`], qui refuse un texte vide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    source: Language,
    target: String,
}

impl TranslationRequest {
    /// Retourne `None` si le texte est vide une fois nettoyé
    pub fn new(text: &str, source: Language, target: impl Into<String>) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            source,
            target: target.into(),
        })
    }

    /// Texte à traduire, sans espaces en bordure
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Langue source demandée
    pub fn source(&self) -> &Language {
        &self.source
    }

    /// Code de la langue cible
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Résultat d'une traduction aboutie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// Texte traduit
    pub translated_text: String,
    /// Langue détectée par le service quand la source était `auto`
    pub detected_source: Option<String>,
}

/// Erreurs de traduction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Requête remplacée ou annulée")]
    Cancelled,

    #[error("Délai de réponse dépassé")]
    Timeout,

    #[error("Réponse inattendue: {0}")]
    MalformedResponse(String),

    #[error("Traduction vide")]
    EmptyResult,

    #[error("Service injoignable: {0}")]
    NetworkUnavailable(String),
}

/// Nature d'un échec définitif pour l'utilisateur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Service injoignable (réseau, timeout)
    Unavailable,
    /// Réponse inexploitable du service
    Unexpected,
}

impl TranslationError {
    /// Classe l'erreur pour le message de statut, `None` si silencieuse
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            TranslationError::Cancelled => None,
            TranslationError::Timeout | TranslationError::NetworkUnavailable(_) => {
                Some(FailureKind::Unavailable)
            }
            TranslationError::MalformedResponse(_) | TranslationError::EmptyResult => {
                Some(FailureKind::Unexpected)
            }
        }
    }
}

/// Service de traduction
///
/// Une implémentation fait une seule tentative; timeout, nouvelle tentative
/// et remplacement sont gérés par [`TranslationClient`](super::TranslationClient).
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Traduit le texte de la requête
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError>;

    /// Retourne le nom du service
    fn name(&self) -> &str;
}
