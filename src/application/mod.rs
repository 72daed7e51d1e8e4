//! Application layer: the operations exposed to callers.

pub mod handlers;
