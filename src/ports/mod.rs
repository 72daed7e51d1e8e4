//! Ports: interfaces the application core consumes.
//!
//! Adapters implement these traits; the application handlers depend only on
//! the trait objects, never on concrete infrastructure.

mod cache_invalidator;
mod identity_resolver;
mod insight_generator;
mod insight_repository;
mod repository;
mod user_repository;

pub use cache_invalidator::{CacheInvalidator, InvalidationError, HOME_SURFACE_PATH};
pub use identity_resolver::IdentityResolver;
pub use insight_generator::{GeneratorError, InsightGenerator};
pub use insight_repository::InsightRepository;
pub use repository::RepositoryError;
pub use user_repository::UserRepository;
