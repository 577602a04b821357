//! Adaptateur de synthèse vocale
//!
//! Un seul énoncé à la fois: un nouveau interrompt le précédent au lieu
//! d'attendre derrière lui.

use super::SpeechError;
use crate::locale::Language;

/// Synthèse vocale de la plateforme
#[cfg_attr(test, mockall::automock)]
pub trait SpeechSynthesizer: Send {
    /// Lance la lecture du texte sans attendre la fin
    fn speak(&mut self, text: &str, locale: &str) -> Result<(), SpeechError>;

    /// Arrête toute lecture en cours
    fn cancel_all(&mut self);
}

/// Adaptateur de lecture vocale
pub struct SpeechOutput {
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
}

impl SpeechOutput {
    /// Nom de la capacité dans les notifications
    pub const CAPABILITY: &'static str = "Synthèse vocale";

    /// Adaptateur au-dessus d'un moteur disponible
    pub fn new(synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        Self {
            synthesizer: Some(synthesizer),
        }
    }

    /// Adaptateur pour les plateformes sans synthèse vocale
    pub fn unavailable() -> Self {
        Self { synthesizer: None }
    }

    /// Vrai si un moteur est présent
    pub fn is_available(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Lit le texte à voix haute, retourne la locale utilisée
    pub fn speak(&mut self, text: &str, language: &Language) -> Result<&'static str, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::NothingToSpeak);
        }

        let synthesizer = self
            .synthesizer
            .as_mut()
            .ok_or(SpeechError::CapabilityUnavailable(Self::CAPABILITY))?;

        let locale = language.speech_locale();
        synthesizer.cancel_all();
        synthesizer.speak(text, locale)?;
        tracing::debug!("Lecture de {} caractères ({})", text.chars().count(), locale);
        Ok(locale)
    }

    /// Arrête la lecture
    pub fn cancel(&mut self) {
        if let Some(synthesizer) = self.synthesizer.as_mut() {
            synthesizer.cancel_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn blank_text_is_not_spoken() {
        let mut synthesizer = MockSpeechSynthesizer::new();
        synthesizer.expect_speak().never();
        synthesizer.expect_cancel_all().never();

        let mut output = SpeechOutput::new(Box::new(synthesizer));
        assert_eq!(
            output.speak("   ", &Language::from_code("en")),
            Err(SpeechError::NothingToSpeak)
        );
    }

    #[test]
    fn new_utterance_preempts_current_one() {
        let mut seq = Sequence::new();
        let mut synthesizer = MockSpeechSynthesizer::new();
        synthesizer
            .expect_cancel_all()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        synthesizer
            .expect_speak()
            .with(eq("Hola"), eq("es-ES"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut output = SpeechOutput::new(Box::new(synthesizer));
        assert_eq!(output.speak(" Hola ", &Language::from_code("es")), Ok("es-ES"));
    }

    #[test]
    fn auto_language_uses_default_locale() {
        let mut synthesizer = MockSpeechSynthesizer::new();
        synthesizer.expect_cancel_all().return_const(());
        synthesizer
            .expect_speak()
            .with(eq("texte"), eq("es-ES"))
            .returning(|_, _| Ok(()));

        let mut output = SpeechOutput::new(Box::new(synthesizer));
        assert_eq!(output.speak("texte", &Language::Auto), Ok("es-ES"));
    }

    #[test]
    fn unavailable_synthesis_is_reported() {
        let mut output = SpeechOutput::unavailable();
        assert_eq!(
            output.speak("Hola", &Language::from_code("es")),
            Err(SpeechError::CapabilityUnavailable(SpeechOutput::CAPABILITY))
        );
        output.cancel();
    }
}
