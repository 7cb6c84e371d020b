pub mod config;
pub mod error;
pub mod session;

// Re-export common types
pub use config::ClientConfig;
pub use error::{Result, SeekError};
pub use session::{Exchange, SessionHistory, NO_ANSWER_PLACEHOLDER};
