//! Backend client and submission flow for the Seek REPL.

pub mod backend;
pub mod controller;

pub use backend::{AnswerBackend, HttpAnswerBackend};
pub use controller::{InteractionResult, QueryController};
