//! In-memory collaborators for tests and local runs.

mod navigator;
mod store;
mod tree;

pub use navigator::HistoryNavigator;
pub use store::MemoryStore;
