//! Commandes interactives
//!
//! Une ligne simple est traduite immédiatement; une ligne qui commence par
//! `:` est une commande.

use crate::locale::Language;
use crate::session::{SessionUpdate, UiEvent};

/// Aide du mode interactif
pub const HELP: &str = "\
Tapez un texte puis Entrée pour le traduire.
  :from CODE   langue source (\"auto\" pour la détection)
  :to CODE     langue cible
  :swap        inverser langues et textes
  :clear       effacer les deux textes
  :copy        copier la traduction
  :speak       lire la traduction
  :mic         démarrer / arrêter la dictée
  :help        cette aide
  :quit        quitter";

/// Ligne interactive analysée
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Événements à envoyer dans l'ordre
    Events(Vec<UiEvent>),
    /// Afficher l'aide
    Help,
    /// Quitter
    Quit,
    /// Rien à faire (ligne vide)
    Nothing,
    /// Commande inconnue
    Unknown(String),
}

/// Analyse une ligne du mode interactif
pub fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Command::Nothing;
    }

    let Some(command) = line.trim().strip_prefix(':') else {
        return Command::Events(vec![UiEvent::TextChanged(line.to_string()), UiEvent::Submit]);
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();

    match (name, argument) {
        ("from", Some(code)) => Command::Events(vec![UiEvent::SetSource(Language::from_code(code))]),
        ("to", Some(code)) => Command::Events(vec![UiEvent::SetTarget(code.to_string())]),
        ("swap", None) => Command::Events(vec![UiEvent::Swap]),
        ("clear", None) => Command::Events(vec![UiEvent::Clear]),
        ("copy", None) => Command::Events(vec![UiEvent::Copy]),
        ("speak", None) => Command::Events(vec![UiEvent::Speak]),
        ("mic", None) => Command::Events(vec![UiEvent::ToggleMic]),
        ("help", None) | ("h", None) => Command::Help,
        ("quit", None) | ("q", None) | ("exit", None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}

/// Ligne affichée pour un changement d'état, `None` si rien à montrer
pub fn render_update(update: &SessionUpdate) -> Option<String> {
    match update {
        SessionUpdate::Pending(placeholder) => Some(placeholder.clone()),
        SessionUpdate::Translated(text) => Some(format!("→ {}", text)),
        SessionUpdate::Failed { message, .. } => Some(message.clone()),
        SessionUpdate::Languages { source, target } => Some(format!("[{} → {}]", source, target)),
        SessionUpdate::Input(text) if !text.is_empty() => Some(format!("source: {}", text)),
        SessionUpdate::Output(text) if !text.is_empty() => Some(format!("traduction: {}", text)),
        SessionUpdate::Input(_) | SessionUpdate::Output(_) => None,
        SessionUpdate::Listening(true) => Some("🎙️ écoute...".to_string()),
        SessionUpdate::Listening(false) => Some("🎤 arrêt".to_string()),
        SessionUpdate::Notice(notice) => Some(format!("! {}", notice)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Notice;

    #[test]
    fn plain_line_is_translated_immediately() {
        assert_eq!(
            parse_line("Hello world\n"),
            Command::Events(vec![
                UiEvent::TextChanged("Hello world".into()),
                UiEvent::Submit
            ])
        );
    }

    #[test]
    fn commands_map_to_events() {
        assert_eq!(
            parse_line(":from auto"),
            Command::Events(vec![UiEvent::SetSource(Language::Auto)])
        );
        assert_eq!(
            parse_line(" :to zh-TW "),
            Command::Events(vec![UiEvent::SetTarget("zh-TW".into())])
        );
        assert_eq!(parse_line(":swap"), Command::Events(vec![UiEvent::Swap]));
        assert_eq!(parse_line(":mic"), Command::Events(vec![UiEvent::ToggleMic]));
        assert_eq!(parse_line(":q"), Command::Quit);
        assert_eq!(parse_line("   "), Command::Nothing);
    }

    #[test]
    fn malformed_commands_are_unknown() {
        assert_eq!(parse_line(":to"), Command::Unknown(":to".into()));
        assert_eq!(parse_line(":dance"), Command::Unknown(":dance".into()));
        assert_eq!(parse_line(":swap now"), Command::Unknown(":swap now".into()));
    }

    #[test]
    fn renders_updates_for_the_terminal() {
        assert_eq!(
            render_update(&SessionUpdate::Translated("Hola".into())).as_deref(),
            Some("→ Hola")
        );
        assert_eq!(render_update(&SessionUpdate::Output(String::new())), None);
        assert_eq!(
            render_update(&SessionUpdate::Notice(Notice::Copied)).as_deref(),
            Some("! Copié ✅")
        );
        assert_eq!(
            render_update(&SessionUpdate::Languages {
                source: Language::Auto,
                target: "es".into()
            })
            .as_deref(),
            Some("[auto → es]")
        );
    }
}
