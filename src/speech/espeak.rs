//! Synthèse vocale eSpeak NG
//!
//! Lance `espeak-ng` (ou l'ancien `espeak`) en processus enfant; annuler
//! tue le processus en cours.

use super::{SpeechError, SpeechSynthesizer};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Synthèse vocale via la ligne de commande eSpeak
pub struct EspeakSynthesizer {
    program: PathBuf,
    child: Option<Child>,
}

impl EspeakSynthesizer {
    /// Binaires essayés dans l'ordre
    const PROGRAMS: [&'static str; 2] = ["espeak-ng", "espeak"];

    /// Cherche un binaire eSpeak dans le `PATH`
    pub fn detect() -> Option<Self> {
        let program = Self::PROGRAMS
            .iter()
            .find_map(|name| which::which(name).ok())?;
        tracing::info!("Synthèse vocale: {}", program.display());
        Some(Self::with_program(program))
    }

    /// Synthèse avec un binaire donné
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            child: None,
        }
    }

    /// Bloque jusqu'à la fin de la lecture en cours
    pub fn wait(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.wait() {
                tracing::warn!("Attente d'eSpeak impossible: {}", e);
            }
        }
    }

    /// Les voix eSpeak sont des locales en minuscules ("en-us", "fil-ph")
    pub fn voice_for_locale(locale: &str) -> String {
        locale.to_ascii_lowercase()
    }
}

impl SpeechSynthesizer for EspeakSynthesizer {
    fn speak(&mut self, text: &str, locale: &str) -> Result<(), SpeechError> {
        self.cancel_all();

        let child = Command::new(&self.program)
            .arg("-v")
            .arg(Self::voice_for_locale(locale))
            .arg("--")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::Synthesis(format!("{}: {}", self.program.display(), e)))?;

        self.child = Some(child);
        Ok(())
    }

    fn cancel_all(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Déjà terminé si kill échoue
            if child.kill().is_ok() {
                tracing::debug!("Lecture annulée");
            }
            let _ = child.wait();
        }
    }
}

impl Drop for EspeakSynthesizer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voices_are_lowercase_locales() {
        assert_eq!(EspeakSynthesizer::voice_for_locale("en-US"), "en-us");
        assert_eq!(EspeakSynthesizer::voice_for_locale("fil-PH"), "fil-ph");
        assert_eq!(EspeakSynthesizer::voice_for_locale("eo"), "eo");
    }

    #[test]
    fn missing_binary_is_a_synthesis_error() {
        let mut synthesizer = EspeakSynthesizer::with_program("/nonexistent/espeak-ng");
        let err = synthesizer.speak("hola", "es-ES").unwrap_err();
        assert!(matches!(err, SpeechError::Synthesis(_)));
        synthesizer.cancel_all();
    }
}
