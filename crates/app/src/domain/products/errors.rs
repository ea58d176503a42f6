//! Product validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// A draft failed local constraints. Raised before any write is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("description is required")]
    EmptyDescription,

    #[error("price is required")]
    MissingPrice,

    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),
}
