//! Adaptateur de reconnaissance vocale
//!
//! Petite machine à états au-dessus du moteur de la plateforme. Ses
//! événements passent par la session, qui les transmet à
//! [`SpeechInput::handle`].

use super::SpeechError;
use crate::locale::Language;

/// Événements émis par le moteur de reconnaissance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Capture démarrée
    Started,
    /// Transcription, les intermédiaires peuvent être réécrites
    Result { transcript: String, is_final: bool },
    /// Capture terminée (silence, arrêt manuel)
    Ended,
    /// Échec avec un code d'erreur de la plateforme
    Error(String),
}

/// État de la reconnaissance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionState {
    /// Au repos
    Idle,
    /// En écoute
    Listening,
}

/// Ce que la session doit traiter après un événement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// Transcription finale, devient le nouveau texte source
    Transcript(String),
    /// Échec à signaler à l'utilisateur
    Failed(String),
}

/// Reconnaissance vocale de la plateforme
#[cfg_attr(test, mockall::automock)]
pub trait SpeechRecognizer: Send {
    /// Démarre une reconnaissance d'un seul énoncé
    fn start(&mut self, locale: &str) -> Result<(), SpeechError>;

    /// Arrête la reconnaissance en cours
    fn stop(&mut self);
}

/// Adaptateur de dictée
pub struct SpeechInput {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    state: RecognitionState,
    locale: &'static str,
}

impl SpeechInput {
    /// Nom de la capacité dans les notifications
    pub const CAPABILITY: &'static str = "Reconnaissance vocale";

    /// Adaptateur au-dessus d'un moteur disponible
    pub fn new(recognizer: Box<dyn SpeechRecognizer>, language: &Language) -> Self {
        Self {
            recognizer: Some(recognizer),
            state: RecognitionState::Idle,
            locale: language.speech_locale(),
        }
    }

    /// Adaptateur pour les plateformes sans reconnaissance vocale
    pub fn unavailable() -> Self {
        Self {
            recognizer: None,
            state: RecognitionState::Idle,
            locale: Language::Auto.speech_locale(),
        }
    }

    /// État courant
    pub fn state(&self) -> RecognitionState {
        self.state
    }

    /// Vrai pendant l'écoute
    pub fn is_listening(&self) -> bool {
        self.state == RecognitionState::Listening
    }

    /// Locale de la prochaine écoute
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Recalcule la locale depuis la langue source
    pub fn set_locale(&mut self, language: &Language) {
        self.locale = language.speech_locale();
        tracing::debug!("Locale de reconnaissance: {}", self.locale);
    }

    /// Démarre l'écoute au repos, l'arrête pendant l'écoute
    pub fn toggle(&mut self) -> Result<RecognitionState, SpeechError> {
        let recognizer = self
            .recognizer
            .as_mut()
            .ok_or(SpeechError::CapabilityUnavailable(Self::CAPABILITY))?;

        match self.state {
            RecognitionState::Idle => {
                recognizer.start(self.locale)?;
                self.state = RecognitionState::Listening;
                tracing::info!("Écoute démarrée ({})", self.locale);
            }
            RecognitionState::Listening => {
                recognizer.stop();
                self.state = RecognitionState::Idle;
                tracing::info!("Écoute arrêtée");
            }
        }
        Ok(self.state)
    }

    /// Arrête l'écoute si elle est active
    pub fn stop(&mut self) {
        if self.state == RecognitionState::Listening {
            if let Some(recognizer) = self.recognizer.as_mut() {
                recognizer.stop();
            }
            self.state = RecognitionState::Idle;
        }
    }

    /// Applique un événement du moteur
    ///
    /// Seuls les résultats finaux reçus pendant l'écoute donnent une transcription.
    pub fn handle(&mut self, event: RecognitionEvent) -> Option<RecognitionOutcome> {
        match event {
            RecognitionEvent::Started => {
                self.state = RecognitionState::Listening;
                None
            }
            RecognitionEvent::Result {
                transcript,
                is_final,
            } => {
                if !is_final || self.state != RecognitionState::Listening {
                    return None;
                }
                let transcript = transcript.trim();
                if transcript.is_empty() {
                    return None;
                }
                Some(RecognitionOutcome::Transcript(transcript.to_string()))
            }
            RecognitionEvent::Ended => {
                self.state = RecognitionState::Idle;
                None
            }
            RecognitionEvent::Error(code) => {
                tracing::warn!("Erreur de reconnaissance: {}", code);
                self.state = RecognitionState::Idle;
                Some(RecognitionOutcome::Failed(code))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn listening_input() -> SpeechInput {
        let mut recognizer = MockSpeechRecognizer::new();
        recognizer.expect_start().returning(|_| Ok(()));
        recognizer.expect_stop().return_const(());
        let mut input = SpeechInput::new(Box::new(recognizer), &Language::from_code("fr"));
        input.toggle().unwrap();
        input
    }

    #[test]
    fn unavailable_toggle_reports_missing_capability() {
        let mut input = SpeechInput::unavailable();
        assert_eq!(
            input.toggle(),
            Err(SpeechError::CapabilityUnavailable(SpeechInput::CAPABILITY))
        );
        assert_eq!(input.state(), RecognitionState::Idle);
    }

    #[test]
    fn toggle_starts_with_source_locale() {
        let mut recognizer = MockSpeechRecognizer::new();
        recognizer
            .expect_start()
            .with(eq("fr-FR"))
            .times(1)
            .returning(|_| Ok(()));
        recognizer.expect_stop().times(1).return_const(());

        let mut input = SpeechInput::new(Box::new(recognizer), &Language::from_code("fr"));
        assert_eq!(input.toggle(), Ok(RecognitionState::Listening));
        assert_eq!(input.toggle(), Ok(RecognitionState::Idle));
    }

    #[test]
    fn locale_follows_source_language() {
        let mut recognizer = MockSpeechRecognizer::new();
        recognizer
            .expect_start()
            .with(eq("ja-JP"))
            .times(1)
            .returning(|_| Ok(()));

        let mut input = SpeechInput::new(Box::new(recognizer), &Language::Auto);
        assert_eq!(input.locale(), "es-ES");
        input.set_locale(&Language::from_code("ja"));
        input.toggle().unwrap();
    }

    #[test]
    fn failed_start_stays_idle() {
        let mut recognizer = MockSpeechRecognizer::new();
        recognizer
            .expect_start()
            .returning(|_| Err(SpeechError::Recognition("not-allowed".into())));

        let mut input = SpeechInput::new(Box::new(recognizer), &Language::Auto);
        assert!(input.toggle().is_err());
        assert!(!input.is_listening());
    }

    #[test]
    fn final_result_yields_transcript() {
        let mut input = listening_input();
        assert_eq!(
            input.handle(RecognitionEvent::Result {
                transcript: "partial".into(),
                is_final: false,
            }),
            None
        );
        assert_eq!(
            input.handle(RecognitionEvent::Result {
                transcript: " bonjour ".into(),
                is_final: true,
            }),
            Some(RecognitionOutcome::Transcript("bonjour".into()))
        );
        assert_eq!(input.handle(RecognitionEvent::Ended), None);
        assert_eq!(input.state(), RecognitionState::Idle);
    }

    #[test]
    fn result_after_stop_is_ignored() {
        let mut input = listening_input();
        input.stop();
        assert_eq!(
            input.handle(RecognitionEvent::Result {
                transcript: "late".into(),
                is_final: true,
            }),
            None
        );
    }

    #[test]
    fn error_resets_to_idle() {
        let mut input = listening_input();
        assert_eq!(
            input.handle(RecognitionEvent::Error("no-speech".into())),
            Some(RecognitionOutcome::Failed("no-speech".into()))
        );
        assert_eq!(input.state(), RecognitionState::Idle);
    }
}
