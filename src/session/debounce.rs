//! Anti-rebond de la saisie
//!
//! Regroupe une rafale de modifications en une seule échéance. La boucle de
//! la session attend [`Debouncer::until`] sur l'échéance courante et appelle
//! [`Debouncer::fire`] quand elle est atteinte.

use std::time::Duration;
use tokio::time::Instant;

/// Minuterie d'anti-rebond
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Minuterie désarmée avec le délai de silence donné
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Arme la minuterie, ou la relance si elle l'est déjà
    pub fn touch(&mut self) {
        self.deadline = Some(Instant::now() + self.quiet_period);
    }

    /// Désarme la minuterie
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Échéance courante, `None` si désarmée
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Désarme la minuterie une fois l'échéance passée, vrai si elle était due
    pub fn fire(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Se termine à l'échéance, jamais si désarmée
    pub async fn until(deadline: Option<Instant>) {
        match deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}
