//! Arguments de la ligne de commande

use clap::Parser;
use std::path::PathBuf;

/// Traduction de texte depuis le terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tradea", version)]
pub struct Args {
    /// Texte à traduire (mode interactif si absent)
    pub text: Vec<String>,

    /// Code de la langue source, "auto" pour la détection
    #[arg(short, long)]
    pub from: Option<String>,

    /// Code de la langue cible
    #[arg(short, long)]
    pub to: Option<String>,

    /// Fichier de configuration JSON
    #[arg(short, long, env = "TRADEA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Lire la traduction à voix haute
    #[arg(long)]
    pub speak: bool,

    /// Copier la traduction dans le presse-papiers
    #[arg(long)]
    pub copy: bool,
}

impl Args {
    /// Texte à traduire en une fois, `None` en mode interactif
    pub fn one_shot_text(&self) -> Option<String> {
        let text = self.text.join(" ");
        (!text.trim().is_empty()).then_some(text)
    }
}
