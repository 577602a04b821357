//! Politique de nouvelle tentative des requêtes

use std::time::Duration;

/// Protection et nouvelle tentative d'une requête
///
/// Par défaut: une tentative avec timeout, puis une seule nouvelle tentative
/// immédiate sans timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Tentatives supplémentaires après le premier échec (sans délai)
    pub max_retries: u32,
    /// Timeout de la première tentative
    pub timeout: Option<Duration>,
    /// Timeout des nouvelles tentatives
    pub retry_timeout: Option<Duration>,
}

impl RetryPolicy {
    /// Timeout de la tentative donnée (0 = la première)
    pub fn timeout_for(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 {
            self.timeout
        } else {
            self.retry_timeout
        }
    }

    /// Nombre total de tentatives
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            timeout: Some(Duration::from_millis(8000)),
            retry_timeout: None,
        }
    }
}
