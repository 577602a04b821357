//! Accès au presse-papiers

mod system;

pub use system::SystemClipboard;

use thiserror::Error;

/// Erreurs du presse-papiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Presse-papiers indisponible: {0}")]
    Unavailable(String),

    #[error("Écriture dans le presse-papiers impossible: {0}")]
    Write(String),
}

/// Presse-papiers texte
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send {
    /// Remplace le contenu par du texte brut
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Nom de la capacité dans les notifications
pub const CAPABILITY: &str = "Presse-papiers";
