//! Domain layer: value objects and aggregates with no infrastructure
//! dependencies.

pub mod foundation;
pub mod insight;
pub mod user;
