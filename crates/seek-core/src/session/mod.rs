//! Session domain module.
//!
//! Everything the client remembers lives here and only for the lifetime of
//! one REPL session; nothing is written to disk.
//!
//! # Module Structure
//!
//! - `exchange`: one query paired with its answer (`Exchange`)
//! - `history`: append-only record of exchanges (`SessionHistory`)

mod exchange;
mod history;

pub use exchange::{Exchange, NO_ANSWER_PLACEHOLDER};
pub use history::SessionHistory;
