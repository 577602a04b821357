//! Tradea - Session de traduction de texte
//!
//! Envoie le texte à un service de traduction distant avec anti-rebond,
//! remplacement des requêtes, timeout et une seule nouvelle tentative, plus
//! la dictée, la lecture vocale et le presse-papiers.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod locale;
pub mod session;
pub mod speech;
pub mod translate;

#[cfg(test)]
mod test_support;
