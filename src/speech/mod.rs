//! Module vocal
//!
//! Adaptateurs de dictée et de lecture vocale au-dessus de capacités de la
//! plateforme qui peuvent manquer.

mod espeak;
mod input;
mod output;

pub use espeak::EspeakSynthesizer;
pub use input::{
    RecognitionEvent, RecognitionOutcome, RecognitionState, SpeechInput, SpeechRecognizer,
};
pub use output::{SpeechOutput, SpeechSynthesizer};

use thiserror::Error;

/// Erreurs des adaptateurs vocaux
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("{0} indisponible sur cette plateforme")]
    CapabilityUnavailable(&'static str),

    #[error("Rien à lire")]
    NothingToSpeak,

    #[error("Erreur de reconnaissance vocale: {0}")]
    Recognition(String),

    #[error("Erreur de synthèse vocale: {0}")]
    Synthesis(String),
}

#[cfg(test)]
pub use input::MockSpeechRecognizer;
#[cfg(test)]
pub use output::MockSpeechSynthesizer;
