//! Jobs domain: job postings, listing, creation and editing

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use repository::JobRepository;

// Re-export API types
pub use api::routes;
pub use api::JobsState;
