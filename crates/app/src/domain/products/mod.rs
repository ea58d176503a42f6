//! Products

pub mod data;
pub mod errors;
pub mod format;
pub mod models;
pub mod records;

pub use data::{ProductDraft, ValidatedProduct};
pub use errors::ValidationError;
pub use models::{Product, ProductId};
pub use records::ProductRecord;
