//! Session de traduction
//!
//! Possède les textes, les langues choisies et les adaptateurs, et applique
//! les événements de l'interface un par un.

mod controller;
mod debounce;
mod events;
mod state;

pub use controller::{Session, SessionHandle};
pub use debounce::Debouncer;
pub use events::{Notice, SessionUpdate, UiEvent};
pub use state::SessionState;
