//! Interface terminal
//!
//! Arguments de la ligne de commande et syntaxe du mode interactif.

mod args;
mod commands;

pub use args::Args;
pub use commands::{parse_line, render_update, Command, HELP};
