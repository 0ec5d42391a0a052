pub mod models;
pub mod money;
pub mod repository;

pub use models::{LineGroup, MenuItem, Order, OrderLine, OrderReport, Payment, PaymentMethod};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
