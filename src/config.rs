//! Configuration de l'application
//!
//! Lue depuis un fichier JSON; chaque champ est optionnel et un fichier
//! absent ou invalide retombe sur les valeurs par défaut.

use crate::locale::Language;
use crate::translate::{RetryPolicy, DEFAULT_CLIENT_ID, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Nombre maximal de nouvelles tentatives
const MAX_RETRIES: u32 = 1;

/// Erreurs de configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Lecture impossible de {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Configuration invalide {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Textes affichés dans la zone de sortie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Texte d'attente pendant une requête
    pub in_progress: String,
    /// Service injoignable
    pub unavailable: String,
    /// Réponse inexploitable du service
    pub unexpected: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            in_progress: "Traduction en cours... ⏳".to_string(),
            unavailable: "Service de traduction indisponible ❌".to_string(),
            unexpected: "Réponse inattendue du service de traduction ❌".to_string(),
        }
    }
}

/// Configuration de l'application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL du service de traduction
    pub endpoint: String,
    /// Identifiant client envoyé au service
    pub client_id: String,
    /// Timeout de la première tentative, 0 pour le désactiver
    pub timeout_ms: u64,
    /// Nouvelles tentatives immédiates après un échec (0 ou 1)
    pub max_retries: u32,
    /// Délai de silence avant la traduction automatique de la saisie
    pub debounce_ms: u64,
    /// Langue source initiale ("auto" pour la détection)
    pub source_language: String,
    /// Langue cible initiale
    pub target_language: String,
    /// Textes de statut
    pub messages: Messages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout_ms: 8000,
            max_retries: 1,
            debounce_ms: 500,
            source_language: Language::AUTO.to_string(),
            target_language: "es".to_string(),
            messages: Messages::default(),
        }
    }
}

impl AppConfig {
    /// Lit le fichier de configuration
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Charge la configuration, ou les valeurs par défaut
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!("Configuration chargée depuis {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, valeurs par défaut utilisées", e);
                Self::default()
            }
        }
    }

    /// Politique de nouvelle tentative du client
    ///
    /// Au plus une nouvelle tentative, une valeur plus grande est ramenée à 1.
    pub fn retry_policy(&self) -> RetryPolicy {
        let max_retries = self.max_retries.min(MAX_RETRIES);
        if max_retries != self.max_retries {
            tracing::warn!(
                "max_retries = {} non supporté, ramené à {}",
                self.max_retries,
                max_retries
            );
        }
        RetryPolicy {
            max_retries,
            timeout: (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms)),
            retry_timeout: None,
        }
    }

    /// Délai d'anti-rebond de la saisie
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Langue source initiale
    pub fn source(&self) -> Language {
        Language::from_code(&self.source_language)
    }

    /// Langue cible, "auto" n'est pas une cible valide et donne la valeur par défaut
    pub fn target(&self) -> String {
        match Language::from_code(&self.target_language) {
            Language::Auto => Self::default().target_language,
            Language::Code(code) => code,
        }
    }
}
