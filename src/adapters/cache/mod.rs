//! Adapters for the CacheInvalidator port.

mod in_memory;
mod redis_invalidator;

pub use in_memory::InMemoryInvalidator;
pub use redis_invalidator::RedisInvalidator;
