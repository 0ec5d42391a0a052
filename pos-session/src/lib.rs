pub mod controller;
pub mod input;
pub mod report;

pub use controller::{SessionController, SessionOutcome};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The input stream ended while a prompt was still waiting
    #[error("input stream closed before the session finished")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store error: {0}")]
    Store(Box<dyn std::error::Error + Send + Sync>),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for SessionError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        SessionError::Store(err)
    }
}
