//! Presse-papiers système via arboard
//!
//! Le presse-papiers arboard est ouvert à chaque écriture pour que
//! l'adaptateur reste `Send` sur toutes les plateformes.

use super::{Clipboard, ClipboardError};

/// Presse-papiers système
#[derive(Debug, Default)]
pub struct SystemClipboard {
    hand_over: bool,
}

impl SystemClipboard {
    /// Presse-papiers d'une session interactive
    pub fn new() -> Self {
        Self { hand_over: false }
    }

    /// Presse-papiers d'un processus qui se termine juste après l'écriture
    ///
    /// Sous Linux (X11, Wayland) le contenu appartient au processus qui l'a
    /// écrit: l'écriture bloque jusqu'à ce qu'un autre programme le reprenne.
    pub fn for_one_shot() -> Self {
        Self { hand_over: true }
    }

    /// Vrai si l'écriture attend la reprise du contenu
    pub fn waits_for_handover(&self) -> bool {
        self.hand_over
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        write(&mut clipboard, text, self.hand_over)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[cfg(target_os = "linux")]
fn write(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hand_over: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hand_over {
        tracing::debug!("Presse-papiers conservé jusqu'à sa reprise");
        clipboard.set().wait().text(text.to_string())
    } else {
        clipboard.set_text(text.to_string())
    }
}

#[cfg(not(target_os = "linux"))]
fn write(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hand_over: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_shot_writes_wait_for_handover() {
        assert!(!SystemClipboard::new().waits_for_handover());
        assert!(!SystemClipboard::default().waits_for_handover());
        assert!(SystemClipboard::for_one_shot().waits_for_handover());
    }
}
