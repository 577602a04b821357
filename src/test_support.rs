//! Doublures de test partagées par les tests unitaires

use crate::translate::{TranslationBackend, TranslationError, TranslationRequest, TranslationResult};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Réponse scriptée du service
#[derive(Debug, Clone)]
pub struct Step {
    delay: Duration,
    result: Result<TranslationResult, TranslationError>,
}

impl Step {
    pub fn ok(text: &str) -> Self {
        Self::ok_after(Duration::ZERO, text)
    }

    pub fn ok_after(delay: Duration, text: &str) -> Self {
        Self {
            delay,
            result: Ok(TranslationResult {
                translated_text: text.to_string(),
                detected_source: None,
            }),
        }
    }

    pub fn detected(text: &str, code: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(TranslationResult {
                translated_text: text.to_string(),
                detected_source: Some(code.to_string()),
            }),
        }
    }

    pub fn err(error: TranslationError) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(error),
        }
    }

    pub fn err_after(delay: Duration, error: TranslationError) -> Self {
        Self {
            delay,
            result: Err(error),
        }
    }
}

/// Compteur d'appels partagé
#[derive(Debug, Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Service qui répond selon un script par texte
///
/// Une étape est consommée au début de l'appel: un appel interrompu par un
/// timeout utilise quand même la sienne. Un texte sans script donne une
/// réponse invalide.
#[derive(Default)]
pub struct ScriptedBackend {
    scripts: Mutex<HashMap<String, VecDeque<Step>>>,
    calls: Calls,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(self, text: &str, step: Step) -> Self {
        if let Ok(mut scripts) = self.scripts.lock() {
            scripts.entry(text.to_string()).or_default().push_back(step);
        }
        self
    }

    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

#[async_trait]
impl TranslationBackend for ScriptedBackend {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        self.calls.0.fetch_add(1, Ordering::SeqCst);
        let step = self
            .scripts
            .lock()
            .ok()
            .and_then(|mut scripts| scripts.get_mut(request.text())?.pop_front());

        match step {
            Some(step) => {
                if !step.delay.is_zero() {
                    tokio::time::sleep(step.delay).await;
                }
                step.result
            }
            None => Err(TranslationError::MalformedResponse(format!(
                "no script for {:?}",
                request.text()
            ))),
        }
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
