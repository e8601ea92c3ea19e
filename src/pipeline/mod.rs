pub mod aggregate;
pub mod briefing;
pub mod conversation;
pub mod ollama;
pub mod prompt;
pub mod session;
pub mod similarity;

use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Completion service connection failed: {0}")]
    GatewayConnection(String),

    #[error("Completion request timed out after {0}s")]
    GatewayTimeout(u64),

    #[error("Completion service returned HTTP {status}: {body}")]
    GatewayStatus { status: u16, body: String },

    #[error("Completion response parsing failed: {0}")]
    ResponseParsing(String),

    #[error("No completion model available")]
    NoModel,

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}
