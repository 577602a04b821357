//! Service Google Translate (point d'accès public `gtx`)
//!
//! Un GET par requête, la réponse est le format en tableaux imbriqués de
//! `translate_a/single`.

use super::engine::{TranslationBackend, TranslationError, TranslationRequest, TranslationResult};
use async_trait::async_trait;
use serde_json::Value;

/// Point d'accès public par défaut
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Identifiant client par défaut
pub const DEFAULT_CLIENT_ID: &str = "gtx";

/// Service de traduction Google `translate_a/single`
pub struct GoogleBackend {
    endpoint: String,
    client_id: String,
    http_client: reqwest::Client,
}

impl GoogleBackend {
    /// Service sur le point d'accès public
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_CLIENT_ID)
    }

    /// Service sur un point d'accès personnalisé (miroir, serveur de test)
    pub fn with_endpoint(endpoint: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Construit l'URL complète, le texte est encodé en pourcentage
    pub fn request_url(&self, request: &TranslationRequest) -> String {
        format!(
            "{}?client={}&sl={}&tl={}&dt=t&q={}",
            self.endpoint,
            self.client_id,
            urlencoding::encode(request.source().code()),
            urlencoding::encode(request.target()),
            urlencoding::encode(request.text())
        )
    }
}

impl Default for GoogleBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Extrait la traduction d'une réponse `translate_a/single`
///
/// L'élément 0 est une liste de segments `[traduit, original, ...]`,
/// l'élément 2 la langue source détectée.
pub fn parse_response(
    payload: &Value,
    want_detected: bool,
) -> Result<TranslationResult, TranslationError> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::MalformedResponse("liste de segments absente".to_string()))?;

    let mut translated_text = String::new();
    for segment in segments {
        let parts = segment.as_array().ok_or_else(|| {
            TranslationError::MalformedResponse("segment qui n'est pas une liste".to_string())
        })?;
        // Les segments de translittération finaux commencent par null
        if let Some(fragment) = parts.first().and_then(Value::as_str) {
            translated_text.push_str(fragment);
        }
    }

    if translated_text.trim().is_empty() {
        return Err(TranslationError::EmptyResult);
    }

    let detected_source = if want_detected {
        payload
            .get(2)
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
    } else {
        None
    };

    Ok(TranslationResult {
        translated_text,
        detected_source,
    })
}

#[async_trait]
impl TranslationBackend for GoogleBackend {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        let url = self.request_url(request);
        tracing::debug!(
            "Requête Google: {} caractères, {} -> {}",
            request.text().chars().count(),
            request.source(),
            request.target()
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslationError::NetworkUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::MalformedResponse(format!("JSON invalide: {}", e)))?;

        parse_response(&payload, request.source().is_auto())
    }

    fn name(&self) -> &str {
        "Google Translate"
    }
}
