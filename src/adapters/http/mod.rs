//! HTTP adapter: axum DTOs, handlers, and routes.

pub mod profile;
