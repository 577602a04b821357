//! Contrôleur de session
//!
//! Une seule boucle applique dans l'ordre les événements de l'interface, les
//! échéances d'anti-rebond et les résultats de traduction. Les requêtes
//! tournent dans des tâches séparées et renvoient leur résultat marqué de
//! leur identifiant; seul le dernier est appliqué.

use super::debounce::Debouncer;
use super::events::{Notice, SessionUpdate, UiEvent};
use super::state::SessionState;
use crate::clipboard::Clipboard;
use crate::config::{AppConfig, Messages};
use crate::locale::{is_known, Language};
use crate::speech::{RecognitionEvent, RecognitionOutcome, SpeechError, SpeechInput, SpeechOutput};
use crate::translate::{
    FailureKind, TranslationClient, TranslationError, TranslationRequest, TranslationResult,
};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::{JoinError, JoinHandle};

/// Résultat d'une tâche de requête
struct Completion {
    id: u64,
    request: TranslationRequest,
    outcome: Result<TranslationResult, TranslationError>,
}

/// Session de traduction
pub struct Session {
    state: SessionState,
    messages: Messages,
    client: Arc<TranslationClient>,
    debouncer: Debouncer,
    speech_input: SpeechInput,
    speech_output: SpeechOutput,
    clipboard: Option<Box<dyn Clipboard>>,
    updates: broadcast::Sender<SessionUpdate>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    /// Identifiant de la dernière requête lancée, en attente de son résultat
    current_request: Option<u64>,
    next_request: u64,
    missing_reported: Vec<&'static str>,
}

/// Poignée sur une session lancée
pub struct SessionHandle {
    events: mpsc::Sender<UiEvent>,
    task: JoinHandle<SessionState>,
}

impl SessionHandle {
    /// Envoie un événement, faux une fois la session arrêtée
    pub async fn send(&self, event: UiEvent) -> bool {
        self.events.send(event).await.is_ok()
    }

    /// Émetteur pour les adaptateurs de la plateforme (rappels de la reconnaissance vocale)
    pub fn sender(&self) -> mpsc::Sender<UiEvent> {
        self.events.clone()
    }

    /// Arrête la session et retourne son état final
    ///
    /// Une requête déjà lancée se termine avant l'arrêt.
    pub async fn shutdown(self) -> Result<SessionState, JoinError> {
        let _ = self.events.send(UiEvent::Shutdown).await;
        self.task.await
    }
}

impl Session {
    /// Session sans capacités vocales ni presse-papiers
    pub fn new(client: Arc<TranslationClient>, config: &AppConfig) -> Self {
        let (updates, _) = broadcast::channel(100);
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let source = config.source();

        Self {
            speech_input: SpeechInput::unavailable(),
            speech_output: SpeechOutput::unavailable(),
            clipboard: None,
            state: SessionState::new(source, config.target()),
            messages: config.messages.clone(),
            client,
            debouncer: Debouncer::new(config.debounce()),
            updates,
            completion_tx,
            completion_rx,
            current_request: None,
            next_request: 0,
            missing_reported: Vec::new(),
        }
    }

    /// Ajoute la dictée, sa locale suit la langue source
    pub fn with_speech_input(mut self, mut speech_input: SpeechInput) -> Self {
        speech_input.set_locale(&self.state.source);
        self.speech_input = speech_input;
        self
    }

    /// Ajoute la lecture vocale
    pub fn with_speech_output(mut self, speech_output: SpeechOutput) -> Self {
        self.speech_output = speech_output;
        self
    }

    /// Ajoute le presse-papiers
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// S'abonne aux changements d'état
    pub fn subscribe(&self) -> broadcast::Receiver<SessionUpdate> {
        self.updates.subscribe()
    }

    /// État courant
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Lance la boucle dans une nouvelle tâche
    pub fn spawn(self) -> SessionHandle {
        let (events, rx) = mpsc::channel(64);
        let task = tokio::spawn(self.run(rx));
        SessionHandle { events, task }
    }

    /// Boucle de la session, retourne l'état final à l'arrêt
    pub async fn run(mut self, mut events: mpsc::Receiver<UiEvent>) -> SessionState {
        tracing::info!(
            "Session démarrée ({} -> {})",
            self.state.source,
            self.state.target
        );

        loop {
            let deadline = self.debouncer.deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(UiEvent::Shutdown) | None => break,
                    Some(event) => self.handle(event),
                },
                Some(completion) = self.completion_rx.recv() => self.apply_completion(completion),
                _ = Debouncer::until(deadline) => {
                    if self.debouncer.fire() {
                        self.translate_now();
                    }
                }
            }
        }

        // La dernière requête se termine par une traduction ou un message d'échec
        while self.current_request.is_some() {
            match self.completion_rx.recv().await {
                Some(completion) => self.apply_completion(completion),
                None => break,
            }
        }

        self.client.cancel();
        self.speech_output.cancel();
        self.speech_input.stop();
        tracing::info!("Session arrêtée");
        self.state
    }

    /// Applique un événement de l'interface
    pub fn handle(&mut self, event: UiEvent) {
        tracing::debug!("Événement: {:?}", event);
        match event {
            UiEvent::TextChanged(text) => {
                self.state.input_text = text;
                self.debouncer.touch();
            }
            UiEvent::Submit => self.translate_now(),
            UiEvent::SetSource(language) => {
                self.state.source = language;
                self.speech_input.set_locale(&self.state.source);
                self.publish_languages();
                self.translate_now();
            }
            UiEvent::SetTarget(code) => match Language::from_code(&code) {
                Language::Auto => self.notify(Notice::InvalidTarget(code)),
                Language::Code(code) => {
                    if !is_known(&code) {
                        tracing::warn!("Langue cible inconnue: {}", code);
                    }
                    self.state.target = code;
                    self.publish_languages();
                    self.translate_now();
                }
            },
            UiEvent::Swap => self.swap(),
            UiEvent::Clear => self.clear(),
            UiEvent::Copy => self.copy(),
            UiEvent::ToggleMic => self.toggle_mic(),
            UiEvent::Speak => self.speak(),
            UiEvent::Recognition(event) => self.on_recognition(event),
            UiEvent::Shutdown => {}
        }
    }

    /// Traduit la saisie immédiatement
    ///
    /// Une saisie vide ne fait rien: pas de requête, la sortie reste intacte.
    fn translate_now(&mut self) {
        self.debouncer.cancel();

        let Some(request) = TranslationRequest::new(
            &self.state.input_text,
            self.state.source.clone(),
            self.state.target.clone(),
        ) else {
            return;
        };

        self.next_request += 1;
        let id = self.next_request;
        self.current_request = Some(id);

        let placeholder = self.messages.in_progress.clone();
        self.state.output_text = placeholder.clone();
        self.publish(SessionUpdate::Pending(placeholder));

        let pending = self.client.submit(request.clone());
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.await;
            let _ = completion_tx.send(Completion {
                id,
                request,
                outcome,
            });
        });
    }

    fn apply_completion(&mut self, completion: Completion) {
        if self.current_request != Some(completion.id) {
            tracing::debug!("Résultat périmé de la requête #{} ignoré", completion.id);
            return;
        }
        self.current_request = None;

        match completion.outcome {
            Ok(result) => {
                self.state.output_text = result.translated_text.clone();
                self.publish(SessionUpdate::Translated(result.translated_text));

                // Écrite après l'affichage de la traduction
                if let Some(code) = result.detected_source {
                    self.state.detected = Some(code.clone());
                    if completion.request.source().is_auto() && self.state.source.is_auto() {
                        tracing::info!("Langue source détectée: {}", code);
                        self.state.source = Language::Code(code);
                        self.speech_input.set_locale(&self.state.source);
                        self.publish_languages();
                    }
                }
            }
            Err(e) => {
                let Some(kind) = e.failure_kind() else {
                    return;
                };
                let message = match kind {
                    FailureKind::Unavailable => self.messages.unavailable.clone(),
                    FailureKind::Unexpected => self.messages.unexpected.clone(),
                };
                self.state.output_text = message.clone();
                self.publish(SessionUpdate::Failed { kind, message });
            }
        }
    }

    fn swap(&mut self) {
        self.state.swap();
        self.speech_input.set_locale(&self.state.source);
        self.publish_languages();
        self.publish(SessionUpdate::Input(self.state.input_text.clone()));
        self.publish(SessionUpdate::Output(self.state.output_text.clone()));
        self.translate_now();
    }

    fn clear(&mut self) {
        self.debouncer.cancel();
        self.client.cancel();
        self.current_request = None;
        self.speech_output.cancel();
        self.stop_listening();

        self.state.input_text.clear();
        self.state.output_text.clear();
        self.publish(SessionUpdate::Input(String::new()));
        self.publish(SessionUpdate::Output(String::new()));
    }

    fn copy(&mut self) {
        let text = self.state.output_text.trim();
        if text.is_empty() {
            self.notify(Notice::NothingToCopy);
            return;
        }

        let Some(clipboard) = self.clipboard.as_mut() else {
            self.report_missing(crate::clipboard::CAPABILITY);
            return;
        };
        let notice = match clipboard.set_text(text) {
            Ok(()) => Notice::Copied,
            Err(e) => {
                tracing::warn!("{}", e);
                Notice::ClipboardFailed(e.to_string())
            }
        };
        self.notify(notice);
    }

    fn toggle_mic(&mut self) {
        match self.speech_input.toggle() {
            Ok(_) => self.sync_listening(),
            Err(e) => self.report_speech_error(e),
        }
    }

    fn speak(&mut self) {
        let language = Language::from_code(&self.state.target);
        if let Err(e) = self.speech_output.speak(&self.state.output_text, &language) {
            self.report_speech_error(e);
        }
    }

    fn on_recognition(&mut self, event: RecognitionEvent) {
        let outcome = self.speech_input.handle(event);
        self.sync_listening();

        match outcome {
            Some(RecognitionOutcome::Transcript(text)) => {
                self.state.input_text = text.clone();
                self.publish(SessionUpdate::Input(text));
                self.translate_now();
            }
            Some(RecognitionOutcome::Failed(code)) => self.notify(Notice::SpeechFailed(code)),
            None => {}
        }
    }

    fn stop_listening(&mut self) {
        self.speech_input.stop();
        self.sync_listening();
    }

    fn sync_listening(&mut self) {
        let listening = self.speech_input.is_listening();
        if listening != self.state.listening {
            self.state.listening = listening;
            self.publish(SessionUpdate::Listening(listening));
        }
    }

    fn report_speech_error(&mut self, error: SpeechError) {
        match error {
            SpeechError::CapabilityUnavailable(what) => self.report_missing(what),
            SpeechError::NothingToSpeak => self.notify(Notice::NothingToSpeak),
            other => {
                tracing::warn!("{}", other);
                self.notify(Notice::SpeechFailed(other.to_string()));
            }
        }
    }

    /// Une capacité absente est signalée une fois, les essais suivants ne font rien
    fn report_missing(&mut self, what: &'static str) {
        if self.missing_reported.contains(&what) {
            return;
        }
        tracing::warn!("{} indisponible", what);
        self.missing_reported.push(what);
        self.notify(Notice::CapabilityMissing(what));
    }

    fn publish_languages(&self) {
        self.publish(SessionUpdate::Languages {
            source: self.state.source.clone(),
            target: self.state.target.clone(),
        });
    }

    fn notify(&self, notice: Notice) {
        self.publish(SessionUpdate::Notice(notice));
    }

    fn publish(&self, update: SessionUpdate) {
        // Aucun abonné: rien à faire
        let _ = self.updates.send(update);
    }
}
