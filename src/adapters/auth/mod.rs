//! Adapters for the IdentityResolver port.

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtIdentityResolver};
pub use mock::MockIdentityResolver;
