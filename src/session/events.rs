//! Événements reçus et publiés par la session

use crate::locale::Language;
use crate::speech::RecognitionEvent;
use crate::translate::FailureKind;
use std::fmt;

/// Actions de l'interface et événements de la plateforme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Texte saisi modifié (avec anti-rebond)
    TextChanged(String),
    /// Traduction explicite (Entrée), sans anti-rebond
    Submit,
    /// Choix de la langue source
    SetSource(Language),
    /// Choix de la langue cible
    SetTarget(String),
    /// Inversion des langues et des textes
    Swap,
    /// Effacement des deux textes
    Clear,
    /// Copie de la traduction
    Copy,
    /// Bouton micro
    ToggleMic,
    /// Lecture de la traduction
    Speak,
    /// Événement du moteur de reconnaissance
    Recognition(RecognitionEvent),
    /// Arrêt de la session
    Shutdown,
}

/// Notifications passagères
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied,
    NothingToCopy,
    NothingToSpeak,
    /// Capacité absente de la plateforme (signalée une fois)
    CapabilityMissing(&'static str),
    ClipboardFailed(String),
    SpeechFailed(String),
    InvalidTarget(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Copied => write!(f, "Copié ✅"),
            Notice::NothingToCopy => write!(f, "Rien à copier"),
            Notice::NothingToSpeak => write!(f, "Rien à lire"),
            Notice::CapabilityMissing(what) => write!(f, "{} non disponible ici", what),
            Notice::ClipboardFailed(e) => write!(f, "Copie impossible: {}", e),
            Notice::SpeechFailed(e) => write!(f, "Erreur vocale: {}", e),
            Notice::InvalidTarget(code) => write!(f, "\"{}\" ne peut pas être une langue cible", code),
        }
    }
}

/// Changements d'état publiés vers l'interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// Texte source remplacé (inversion, effacement, dictée)
    Input(String),
    /// Texte traduit remplacé (inversion, effacement)
    Output(String),
    /// Requête envoyée, la sortie affiche le texte d'attente
    Pending(String),
    /// Requête aboutie
    Translated(String),
    /// Échec définitif, la sortie affiche le message
    Failed { kind: FailureKind, message: String },
    /// Langues choisies
    Languages { source: Language, target: String },
    /// Écoute du micro
    Listening(bool),
    /// Notification passagère
    Notice(Notice),
}
