//! Module de traduction
//!
//! Fournit le trait des services, l'implémentation Google et le client qui
//! gère le remplacement des requêtes, le timeout et la nouvelle tentative.

mod client;
mod engine;
mod google;
mod retry;

pub use client::TranslationClient;
pub use engine::{
    FailureKind, TranslationBackend, TranslationError, TranslationRequest, TranslationResult,
};
pub use google::{parse_response, GoogleBackend, DEFAULT_CLIENT_ID, DEFAULT_ENDPOINT};
pub use retry::RetryPolicy;
