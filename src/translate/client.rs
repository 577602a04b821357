//! Client de traduction
//!
//! Entoure un service du cycle de vie des requêtes: une seule requête en
//! cours, un timeout sur la première tentative et une nouvelle tentative
//! immédiate en cas d'échec.

use super::engine::{TranslationBackend, TranslationError, TranslationRequest, TranslationResult};
use super::retry::RetryPolicy;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Requête en cours
struct InFlight {
    id: u64,
    token: CancellationToken,
}

/// Client de traduction partagé par la session et ses tâches de requête
pub struct TranslationClient {
    backend: Box<dyn TranslationBackend>,
    policy: RetryPolicy,
    current: Mutex<Option<InFlight>>,
    next_id: AtomicU64,
}

impl TranslationClient {
    /// Crée un client autour d'un service
    pub fn new(backend: Box<dyn TranslationBackend>, policy: RetryPolicy) -> Self {
        Self {
            backend,
            policy,
            current: Mutex::new(None),
            next_id: AtomicU64::new(0),
        }
    }

    /// Politique de nouvelle tentative appliquée
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Nom du service utilisé
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Traduit une requête en remplaçant celle encore en cours
    ///
    /// Une requête remplacée se termine en [`TranslationError::Cancelled`],
    /// même si sa réponse est arrivée entre-temps.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let (id, token) = self.begin();
        self.complete(id, request, token).await
    }

    /// Enregistre la requête comme courante immédiatement et retourne un
    /// future autonome, prêt à être lancé
    ///
    /// Le remplacement suit l'ordre des appels à `submit`, pas l'ordre
    /// d'exécution des futures.
    pub fn submit(
        self: &Arc<Self>,
        request: TranslationRequest,
    ) -> impl Future<Output = Result<TranslationResult, TranslationError>> + Send + 'static {
        let (id, token) = self.begin();
        let client = Arc::clone(self);
        async move { client.complete(id, &request, token).await }
    }

    async fn complete(
        &self,
        id: u64,
        request: &TranslationRequest,
        token: CancellationToken,
    ) -> Result<TranslationResult, TranslationError> {
        let outcome = self.run(id, request, &token).await;
        self.finish(id);

        if token.is_cancelled() {
            tracing::debug!("Requête #{} remplacée, résultat ignoré", id);
            return Err(TranslationError::Cancelled);
        }
        outcome
    }

    /// Annule la requête en cours, s'il y en a une
    pub fn cancel(&self) {
        if let Some(in_flight) = self.lock_current().take() {
            tracing::debug!("Requête #{} annulée", in_flight.id);
            in_flight.token.cancel();
        }
    }

    /// Vrai si une requête attend encore son résultat
    pub fn is_pending(&self) -> bool {
        self.lock_current().is_some()
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<InFlight>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();

        let previous = self.lock_current().replace(InFlight {
            id,
            token: token.clone(),
        });
        if let Some(previous) = previous {
            tracing::debug!("Requête #{} remplace #{}", id, previous.id);
            previous.token.cancel();
        }
        (id, token)
    }

    fn finish(&self, id: u64) {
        let mut current = self.lock_current();
        if current.as_ref().is_some_and(|in_flight| in_flight.id == id) {
            *current = None;
        }
    }

    async fn run(
        &self,
        id: u64,
        request: &TranslationRequest,
        token: &CancellationToken,
    ) -> Result<TranslationResult, TranslationError> {
        let mut last_error = TranslationError::Cancelled;

        for attempt in 0..self.policy.attempts() {
            if attempt > 0 {
                tracing::warn!("Requête #{} en échec ({}), nouvelle tentative", id, last_error);
            }

            match self
                .attempt(request, token, self.policy.timeout_for(attempt))
                .await
            {
                Ok(result) => {
                    tracing::debug!("Requête #{} terminée après {} tentative(s)", id, attempt + 1);
                    return Ok(result);
                }
                Err(TranslationError::Cancelled) => return Err(TranslationError::Cancelled),
                Err(e) => last_error = e,
            }
        }

        tracing::error!("Requête #{} en échec: {}", id, last_error);
        Err(last_error)
    }

    async fn attempt(
        &self,
        request: &TranslationRequest,
        token: &CancellationToken,
        limit: Option<Duration>,
    ) -> Result<TranslationResult, TranslationError> {
        let call = self.backend.translate(request);
        let guarded = async {
            match limit {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(result) => result,
                    Err(_) => Err(TranslationError::Timeout),
                },
                None => call.await,
            }
        };

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(TranslationError::Cancelled),
            result = guarded => result,
        }
    }
}
